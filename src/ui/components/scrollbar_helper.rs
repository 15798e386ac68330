//! Scrollbar for the bordered issue list.

use crate::ui::components::dialogs::common::render_scrollbar;
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

/// Tracks where the selection sits in the list and draws the bar next to it
#[derive(Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the bar with `total_lines` of content, `viewport` of them visible
    pub fn update_state(&mut self, total_lines: usize, position: usize, viewport: usize) {
        self.state = self
            .state
            .content_length(total_lines)
            .viewport_content_length(viewport)
            .position(position);
    }

    /// Split a bordered `rect` into the list area and, if the content overflows, a bar column
    /// inside the right border
    pub fn calculate_areas(rect: Rect, total_lines: usize) -> (Rect, Option<Rect>) {
        let inner_height = rect.height.saturating_sub(2);
        if total_lines <= inner_height as usize || rect.width < 3 {
            return (rect, None);
        }
        let list_area = Rect {
            width: rect.width - 1,
            ..rect
        };
        let bar_area = Rect::new(rect.right() - 1, rect.y + 1, 1, inner_height);
        (list_area, Some(bar_area))
    }

    pub fn render(&mut self, f: &mut Frame, area: Option<Rect>) {
        if let Some(area) = area {
            render_scrollbar(f, area, &mut self.state);
        }
    }
}
