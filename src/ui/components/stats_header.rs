//! Aggregate counters over the full issue set

use crate::issues::IssueStats;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct StatsHeader;

impl StatsHeader {
    pub fn render(f: &mut Frame, area: Rect, stats: IssueStats) {
        let cards = [
            ("Total", stats.total, Color::White),
            ("Pending", stats.pending, Color::Yellow),
            ("In Progress", stats.in_progress, Color::Cyan),
            ("Completed", stats.completed, Color::Green),
        ];
        let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

        for ((label, count, color), chunk) in cards.into_iter().zip(chunks.iter()) {
            let card = Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", count), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(label, Style::default().fg(Color::Gray)),
            ]))
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(color)),
            );
            f.render_widget(card, *chunk);
        }
    }
}
