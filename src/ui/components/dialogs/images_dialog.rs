use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::icons::IconService;
use crate::issues::ImageLink;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState},
    Frame,
};

pub fn render_images_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    issue_id: i64,
    links: &[ImageLink],
    selected: usize,
) {
    let height = (links.len() as u16 * 2 + 4).min(area.height);
    let dialog_area = LayoutManager::centered_rect_lines(80, height, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} Issue #{} Images ({}) ", icons.images(), issue_id, links.len());
    let block = create_dialog_block("", Color::Blue).title(title);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = links
        .iter()
        .map(|link| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    link.filename.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!("  {}", link.url), Style::default().fg(Color::DarkGray))),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    if !links.is_empty() {
        state.select(Some(selected.min(links.len() - 1)));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    let instructions = create_instructions_paragraph(&[
        shortcuts::UP_DOWN_SELECT,
        shortcuts::SEPARATOR,
        ("Enter/d", Color::Green, " Download"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]);
    f.render_widget(instructions, chunks[1]);
}
