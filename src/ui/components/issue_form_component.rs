//! Issue report form with inline validation errors and the image staging list.

use crate::issues::NewIssue;
use crate::notification::Notification;
use crate::ui::core::{Action, Component, DialogType, View};
use crate::upload::{StagedFile, UploadStagingBuffer};
use crate::validation::{validate_form, FieldKind, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

/// Height of a single-line input box
const INPUT_HEIGHT: u16 = 3;
/// Height of the description box
const TEXTAREA_HEIGHT: u16 = 6;

pub struct IssueFormComponent {
    pub fields: Vec<FormField>,
    pub uploads: UploadStagingBuffer,
    /// Index into `fields`; `fields.len()` is the images section
    pub focus: usize,
    pub cursor_position: usize,
    pub selected_file: usize,
    /// Soft-guard state of the submit control
    pub submit_guarded: bool,
    file_list_state: ListState,
}

impl Default for IssueFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn report_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "Full Name", FieldKind::Text, true),
        FormField::new("phone", "Phone Number", FieldKind::Phone, true),
        FormField::new("email", "Email Address", FieldKind::Email, true),
        FormField::new("project", "Project / Site", FieldKind::Text, true),
        FormField::new("description", "Issue Description", FieldKind::TextArea, true),
    ]
}

impl IssueFormComponent {
    pub fn new() -> Self {
        Self {
            fields: report_fields(),
            uploads: UploadStagingBuffer::new(),
            focus: 0,
            cursor_position: 0,
            selected_file: 0,
            submit_guarded: false,
            file_list_state: ListState::default(),
        }
    }

    fn images_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focus)
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus % (self.fields.len() + 1);
        self.cursor_position = self
            .fields
            .get(self.focus)
            .map_or(0, |field| field.value.chars().count());
    }

    /// Run every field through the validator; errors are shown inline
    pub fn validate(&mut self) -> bool {
        let valid = validate_form(&mut self.fields);
        if !valid {
            if let Some(first_error) = self.fields.iter().position(FormField::has_error) {
                self.set_focus(first_error);
            }
        }
        valid
    }

    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map_or("", |field| field.value.as_str())
    }

    /// Form contents as submitted to the server
    pub fn new_issue(&self) -> NewIssue {
        NewIssue {
            name: self.value("name").trim().to_string(),
            phone: self.value("phone").trim().to_string(),
            email: self.value("email").trim().to_string(),
            project: self.value("project").trim().to_string(),
            description: self.value("description").trim().to_string(),
        }
    }

    pub fn staged_files(&self) -> Vec<StagedFile> {
        self.uploads.files().to_vec()
    }

    /// Empty the form and the staged images after a successful submission
    pub fn reset(&mut self) {
        self.fields = report_fields();
        self.uploads.clear();
        self.selected_file = 0;
        self.set_focus(0);
    }

    /// Replace the staged images; an invalid selection keeps the previous one
    pub fn stage(&mut self, paths: &[PathBuf]) -> Action {
        match self.uploads.stage_paths(paths) {
            Ok(()) => {
                log::info!("Upload: staged {} file(s)", self.uploads.len());
                self.selected_file = 0;
                Action::None
            }
            Err(error) => {
                log::warn!("Upload: selection rejected: {}", error);
                Action::Notify(Notification::error(error.title(), error.message()))
            }
        }
    }

    fn byte_pos(value: &str, cursor: usize) -> usize {
        value.chars().take(cursor).map(char::len_utf8).sum()
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.cursor_position;
        if let Some(field) = self.focused_field_mut() {
            let byte_pos = Self::byte_pos(&field.value, cursor);
            field.value.insert(byte_pos, c);
            self.cursor_position += 1;
        }
    }

    fn backspace(&mut self) {
        let cursor = self.cursor_position;
        if cursor == 0 {
            return;
        }
        if let Some(field) = self.focused_field_mut() {
            let byte_pos = Self::byte_pos(&field.value, cursor - 1);
            field.value.remove(byte_pos);
            self.cursor_position -= 1;
        }
    }

    fn delete(&mut self) {
        let cursor = self.cursor_position;
        if let Some(field) = self.focused_field_mut() {
            if cursor < field.value.chars().count() {
                let byte_pos = Self::byte_pos(&field.value, cursor);
                field.value.remove(byte_pos);
            }
        }
    }

    fn handle_images_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('f') | KeyCode::Enter => Action::ShowDialog(DialogType::StageFiles),
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.uploads.is_empty() {
                    self.selected_file = (self.selected_file + 1) % self.uploads.len();
                }
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.uploads.is_empty() {
                    self.selected_file = self.selected_file.checked_sub(1).unwrap_or(self.uploads.len() - 1);
                }
                Action::None
            }
            KeyCode::Char('x') | KeyCode::Delete if !self.uploads.is_empty() => {
                Action::RemoveStagedFile(self.selected_file)
            }
            KeyCode::Char('X') if !self.uploads.is_empty() => Action::ClearStagedFiles,
            _ => Action::None,
        }
    }

    fn render_field(&self, f: &mut Frame, area: Rect, index: usize) {
        let field = &self.fields[index];
        let focused = self.focus == index;
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

        let border_color = if field.has_error() {
            Color::Red
        } else if focused {
            Color::Cyan
        } else {
            Color::Gray
        };
        let title = if field.required {
            format!(" {} * ", field.label)
        } else {
            format!(" {} ", field.label)
        };

        let mut value = field.value.clone();
        if focused {
            let byte_pos = Self::byte_pos(&value, self.cursor_position);
            value.insert(byte_pos, '█');
        }

        let input = Paragraph::new(value)
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .style(Style::default().fg(border_color)),
            );
        f.render_widget(input, chunks[0]);

        if let Some(error) = &field.error {
            let error_line = Paragraph::new(Line::from(Span::styled(
                format!("  ⚠ {}", error),
                Style::default().fg(Color::Red),
            )));
            f.render_widget(error_line, chunks[1]);
        }
    }

    fn render_images(&mut self, f: &mut Frame, area: Rect) {
        let focused = self.images_focused();
        let title = match self.uploads.summary() {
            Some(summary) => format!(" Images ({}) ", summary),
            None => " Images ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(if focused { Color::Cyan } else { Color::Gray }));

        if self.uploads.is_empty() {
            let hint = Paragraph::new("No images staged. Press Ctrl+F to select up to 10 images (max 5MB each).")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = self
            .uploads
            .display_lines()
            .into_iter()
            .map(|line| ListItem::new(Line::from(vec![Span::raw(line), Span::styled("  [x]", Style::default().fg(Color::Red))])))
            .collect();
        self.file_list_state
            .select(if focused { Some(self.selected_file) } else { None });
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        f.render_stateful_widget(list, area, &mut self.file_list_state);
    }
}

impl Component for IssueFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Action::SubmitIssue,
                KeyCode::Char('f') => Action::ShowDialog(DialogType::StageFiles),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => return Action::ShowView(View::Dashboard),
            KeyCode::Tab => {
                self.set_focus(self.focus + 1);
                return Action::None;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus + self.fields.len());
                return Action::None;
            }
            _ => {}
        }

        if self.images_focused() {
            return self.handle_images_key(key);
        }

        let is_textarea = self
            .fields
            .get(self.focus)
            .is_some_and(|field| field.kind == FieldKind::TextArea);

        match key.code {
            KeyCode::Enter if is_textarea => self.insert_char('\n'),
            KeyCode::Enter => self.set_focus(self.focus + 1),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                let char_count = self.fields.get(self.focus).map_or(0, |field| field.value.chars().count());
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.set_focus(self.focus),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::StageFiles(paths) => self.stage(&paths),
            Action::RemoveStagedFile(index) => {
                if let Some(file) = self.uploads.remove(index) {
                    log::info!("Upload: removed staged file '{}'", file.name);
                }
                if self.selected_file >= self.uploads.len() {
                    self.selected_file = self.uploads.len().saturating_sub(1);
                }
                Action::None
            }
            Action::ClearStagedFiles => {
                self.uploads.clear();
                self.selected_file = 0;
                Action::None
            }
            Action::IssueSubmitted(report_id) => {
                self.reset();
                Action::IssueSubmitted(report_id)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let mut constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|field| {
                let height = if field.kind == FieldKind::TextArea {
                    TEXTAREA_HEIGHT
                } else {
                    INPUT_HEIGHT
                };
                Constraint::Length(height + 1)
            })
            .collect();
        constraints.push(Constraint::Min(4));
        constraints.push(Constraint::Length(1));

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Report an Issue ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let chunks = Layout::vertical(constraints).split(inner);
        for index in 0..self.fields.len() {
            self.render_field(f, chunks[index], index);
        }
        self.render_images(f, chunks[self.fields.len()]);

        let submit_style = if self.submit_guarded {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Ctrl+S", submit_style),
            Span::styled(" Submit Issue  ", Style::default().fg(Color::Gray)),
            Span::styled("Esc", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(" Back", Style::default().fg(Color::Gray)),
        ]))
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(footer, chunks[self.fields.len() + 1]);
    }
}
