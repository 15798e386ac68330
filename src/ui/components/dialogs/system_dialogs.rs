use super::common::{
    self, create_dialog_block, create_input_paragraph, create_instructions_paragraph, render_scrollbar, shortcuts,
};
use super::scroll_behavior::DialogScroll;
use crate::constants::{DIALOG_TITLE_LOGS, RESET_WARNING};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
TECHFLOW - Issue Tracker Terminal Client
========================================

DASHBOARD
---------
j/k         Select issue (down/up)
p           Set priority of the selected issue
t           Set tech level of the selected issue
s           Start work on the selected issue
c           Complete the selected issue (Enter: new line, Ctrl+S: confirm)
v           View the history of the selected issue
i           Show the images attached to the selected issue

FILTERS
-------
S           Cycle status filter
P           Cycle priority filter
L           Cycle tech level filter
/           Search name, email, phone, project and description
C           Clear all filters

REPORT FORM
-----------
n           Open the report form
Tab         Next field (Shift+Tab for previous)
Ctrl+F      Stage image files
x / X       Remove selected image / clear all images
Ctrl+S      Submit the report
Esc         Back to the dashboard

DATA
----
r           Refresh issues
e           Export all issues as an Excel file
o           Send all issues to the printer
R           Reset all data (with confirmation)

GENERAL CONTROLS
----------------
?           Toggle help panel
G           Show logs
I           Change icon theme
Enter/Esc   Dismiss an error notification
q           Quit application

HELP PANEL SCROLLING
--------------------
j/k         Scroll help content down/up
PageUp/Down Page through help content
Home/End    Jump to top/bottom

Buttons you just used are dimmed for two seconds and ignore repeated presses.

Press 'Esc' or '?' to close this help panel
";

/// Shared body of the help and logs panels
fn render_scrolling_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let offset = scroll.clamp(total_lines, visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        render_scrollbar(f, content_area, &mut scroll.state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_scrolling_panel(
        f,
        area,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll,
    );
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: Option<&Logger>, scroll: &mut DialogScroll) {
    let content = match logger {
        Some(logger) => {
            let logs = logger.get_logs();
            if logs.is_empty() {
                "No logs available".to_string()
            } else {
                logs.join("\n")
            }
        }
        None => "No logger available".to_string(),
    };

    render_scrolling_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}

pub fn render_reset_confirmation_dialog(f: &mut Frame, area: Rect) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" ⚠ Reset All Data? ", Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let warning = Paragraph::new(Line::from(Span::styled(
        RESET_WARNING,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(warning, chunks[1]);

    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Red, " Yes, reset everything!"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}

/// Modal shown while a request is in flight; it accepts no input
pub fn render_loading_dialog(f: &mut Frame, area: Rect, title: &str, text: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 5, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, Color::Cyan);
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, dialog_area);
}

/// Single-line text input dialog shared by the search and file staging prompts
#[allow(clippy::too_many_arguments)]
pub fn render_input_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    field_title: &str,
    hint: &str,
    input_buffer: &str,
    cursor_position: usize,
    confirm: common::InstructionShortcut,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let hint = Paragraph::new(hint).style(Style::default().fg(Color::Gray));
    f.render_widget(hint, chunks[0]);

    f.render_widget(create_input_paragraph(input_buffer, cursor_position, field_title), chunks[1]);

    let instructions = create_instructions_paragraph(&[confirm, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]);
    f.render_widget(instructions, chunks[2]);
}
