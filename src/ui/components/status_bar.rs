//! Status bar component

use crate::ui::core::View;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the status bar reflects
pub struct StatusInfo<'a> {
    pub view: View,
    pub active_tasks: usize,
    pub base_url: &'a str,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, info: &StatusInfo<'_>) {
        let shortcuts = match info.view {
            View::Dashboard => "n: report issue • e: export • o: print • r: refresh • R: reset • ?: help • q: quit",
            View::ReportForm => "Tab: next field • Ctrl+F: stage images • Ctrl+S: submit • Esc: back",
        };

        let (status_text, status_color) = if info.active_tasks > 0 {
            (format!("⟳ {} request(s) in progress • {}", info.active_tasks, shortcuts), Color::Yellow)
        } else {
            (format!("{} • {}", info.base_url, shortcuts), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
