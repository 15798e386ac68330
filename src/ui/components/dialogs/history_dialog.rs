use super::common::{create_dialog_block, create_instructions_paragraph, render_scrollbar, shortcuts};
use super::scroll_behavior::DialogScroll;
use crate::issues::HistoryEntry;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Timeline lines for the history entries, oldest first as returned by the server
pub fn history_lines(entries: &[HistoryEntry]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Cyan)),
            Span::styled(
                entry.action.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {} by {}", entry.display_timestamp(), entry.performed_by),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }
    lines
}

pub fn render_history_dialog(f: &mut Frame, area: Rect, issue_id: i64, entries: &[HistoryEntry], scroll: &mut DialogScroll) {
    let dialog_area = LayoutManager::centered_rect(70, 80, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" Issue #{} History ", issue_id);
    let block = create_dialog_block("", Color::Cyan).title(title);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines = history_lines(entries);
    let visible_height = chunks[0].height as usize;
    let offset = scroll.clamp(lines.len(), visible_height);
    let total_lines = lines.len();

    let visible: Vec<Line> = lines.into_iter().skip(offset).take(visible_height).collect();
    f.render_widget(Paragraph::new(visible), chunks[0]);

    if total_lines > visible_height {
        render_scrollbar(f, chunks[0], &mut scroll.state);
    }

    let instructions = create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]);
    f.render_widget(instructions, chunks[1]);
}
