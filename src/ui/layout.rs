use crate::constants::{FILTER_BAR_HEIGHT, STATS_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout manager for the terminal interface
pub struct LayoutManager;

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy)]
pub struct MainAreas {
    pub stats: Rect,
    pub filters: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl LayoutManager {
    /// Split the screen into the statistics header, filter bar, body and status bar.
    /// The report form has no use for the filter bar, so it gets zero height there.
    #[must_use]
    pub fn main_layout(area: Rect, show_filters: bool) -> MainAreas {
        let filter_height = if show_filters { FILTER_BAR_HEIGHT } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STATS_HEIGHT),
                Constraint::Length(filter_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        MainAreas {
            stats: chunks[0],
            filters: chunks[1],
            body: chunks[2],
            status: chunks[3],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Area of a toast anchored to the top-right corner
    #[must_use]
    pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(r.x + r.width - width, r.y, width, height)
    }
}
