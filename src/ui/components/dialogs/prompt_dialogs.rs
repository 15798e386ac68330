use super::common::{
    create_dialog_block, create_error_paragraph, create_input_paragraph, create_instructions_paragraph, shortcuts,
};
use crate::dispatcher::Prompt;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the confirmation step of an issue action
pub fn render_prompt_dialog(
    f: &mut Frame,
    area: Rect,
    prompt: Prompt,
    selected_option: Option<usize>,
    input_buffer: &str,
    cursor_position: usize,
    error: Option<&str>,
) {
    match prompt {
        Prompt::ChoosePriority { .. } | Prompt::ChooseTechLevel { .. } => {
            render_selection_prompt(f, area, prompt, selected_option, error);
        }
        Prompt::ConfirmStart { .. } => render_confirm_prompt(f, area, prompt),
        Prompt::ResolutionNotes { .. } => render_notes_prompt(f, area, prompt, input_buffer, cursor_position),
    }
}

fn prompt_title(prompt: Prompt) -> String {
    format!(" {} - Issue #{} ", prompt.title(), prompt.issue_id())
}

fn render_selection_prompt(f: &mut Frame, area: Rect, prompt: Prompt, selected_option: Option<usize>, error: Option<&str>) {
    let options = prompt.options();
    let height = options.len() as u16 + 8;
    let dialog_area = LayoutManager::centered_rect_lines(50, height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block("", Color::Cyan).title(prompt_title(prompt));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(options.len() as u16 + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(index, (_, label))| ListItem::new(format!("{}. {}", index + 1, label)))
        .collect();

    let list_title = match selected_option {
        Some(_) => " Choose one ".to_string(),
        None => format!(" {} ", prompt.placeholder()),
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(list_title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(selected_option);
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    if let Some(message) = error {
        f.render_widget(create_error_paragraph(message), chunks[1]);
    }

    let instructions = create_instructions_paragraph(&[
        shortcuts::UP_DOWN_SELECT,
        shortcuts::SEPARATOR,
        ("Enter", Color::Green, " "),
        ("", Color::Green, prompt.confirm_label()),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}

fn render_confirm_prompt(f: &mut Frame, area: Rect, prompt: Prompt) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block("", Color::Yellow).title(prompt_title(prompt));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let question = Paragraph::new(Line::from(Span::styled(
        prompt.placeholder(),
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(question, chunks[1]);

    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Green, " "),
        ("", Color::Green, prompt.confirm_label()),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}

fn render_notes_prompt(f: &mut Frame, area: Rect, prompt: Prompt, input_buffer: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block("", Color::Green).title(prompt_title(prompt));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let hint = Paragraph::new(prompt.placeholder()).style(Style::default().fg(Color::Gray));
    f.render_widget(hint, chunks[0]);

    let input = create_input_paragraph(input_buffer, cursor_position, "Resolution Notes").wrap(Wrap { trim: false });
    f.render_widget(input, chunks[1]);

    let instructions = create_instructions_paragraph(&[
        ("Ctrl+S", Color::Green, " "),
        ("", Color::Green, prompt.confirm_label()),
        shortcuts::SEPARATOR,
        ("Enter", Color::Gray, " new line"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}
