//! Filter controls: status, priority, tech level and search.

use crate::filter::FilterCriteria;
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct FilterBar {
    pub criteria: FilterCriteria,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    fn control(key: &'static str, label: &'static str, value: Option<String>) -> Vec<Span<'static>> {
        let value_style = if value.is_some() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled(key, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value.unwrap_or_else(|| "All".to_string()), value_style),
            Span::raw("   "),
        ]
    }
}

impl Component for FilterBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('S') => Action::CycleStatusFilter,
            KeyCode::Char('P') => Action::CyclePriorityFilter,
            KeyCode::Char('L') => Action::CycleTechLevelFilter,
            KeyCode::Char('/') => Action::ShowDialog(DialogType::Search {
                query: self.criteria.search.clone().unwrap_or_default(),
            }),
            KeyCode::Char('C') => Action::ClearFilters,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut spans = Vec::new();
        spans.extend(Self::control("S", "Status", self.criteria.status.map(|s| s.to_string())));
        spans.extend(Self::control("P", "Priority", self.criteria.priority.map(|p| p.to_string())));
        spans.extend(Self::control(
            "L",
            "Tech level",
            self.criteria.tech_level.map(|t| t.label().to_string()),
        ));
        spans.extend(Self::control(
            "/",
            "Search",
            self.criteria.search.as_ref().map(|q| format!("\"{}\"", q)),
        ));
        if !self.criteria.is_empty() {
            spans.push(Span::styled("C", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" Clear", Style::default().fg(Color::Gray)));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Filters "),
        );
        f.render_widget(bar, rect);
    }
}
