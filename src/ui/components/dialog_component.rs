//! Modal dialog component for issue prompts and system panels.
//!
//! The component owns the input state shared by every dialog (text buffer,
//! cursor, selection, scroll position) and delegates drawing to the modules
//! under [`crate::ui::components::dialogs`].

use crate::dispatcher::{ActionDispatcher, Prompt};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::upload::parse_path_list;
use crate::ui::components::dialogs::{
    history_dialog, images_dialog, prompt_dialogs, scroll_behavior::DialogScroll, system_dialogs,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Color, Frame};

/// Modal dialog component.
///
/// # Dialog Types
/// - **Prompts** - priority and tech level selection, start confirmation, resolution notes
/// - **Issue details** - history timeline and image attachments
/// - **Inputs** - live search and file staging
/// - **System** - help, logs, reset confirmation and the blocking loading modal
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Selected option of a selection prompt; `None` until the user picks one
    pub selected_option: Option<usize>,
    /// Inline validation message of the open prompt
    pub prompt_error: Option<String>,
    pub selected_image: usize,
    pub scroll: DialogScroll,
    pub icons: IconService,
    dispatcher: ActionDispatcher,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(ActionDispatcher::default())
    }
}

impl DialogComponent {
    pub fn new(dispatcher: ActionDispatcher) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            selected_option: None,
            prompt_error: None,
            selected_image: 0,
            scroll: DialogScroll::default(),
            icons: IconService::default(),
            dispatcher,
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    /// A loading dialog swallows all input until the request finishes
    pub fn is_blocking(&self) -> bool {
        matches!(self.dialog_type, Some(DialogType::Loading { .. }))
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.selected_option = None;
        self.prompt_error = None;
        self.selected_image = 0;
        self.scroll.reset();
    }

    /// Answer the open prompt. Selection prompts stay open with an inline
    /// message while nothing is selected.
    fn confirm_prompt(&mut self, prompt: Prompt) -> Action {
        let request = match prompt {
            Prompt::ChoosePriority { issue_id } => {
                let choice = self
                    .selected_option
                    .and_then(|index| crate::issues::Priority::ALL.get(index).copied());
                self.dispatcher.set_priority(issue_id, choice)
            }
            Prompt::ChooseTechLevel { issue_id } => {
                let choice = self
                    .selected_option
                    .and_then(|index| crate::issues::TechLevel::ALL.get(index).copied());
                self.dispatcher.set_tech_level(issue_id, choice)
            }
            Prompt::ConfirmStart { issue_id } => Ok(self.dispatcher.start(issue_id)),
            Prompt::ResolutionNotes { issue_id } => Ok(self.dispatcher.complete(issue_id, &self.input_buffer)),
        };

        match request {
            Ok(request) => {
                self.clear_dialog();
                Action::SubmitUpdate(request)
            }
            Err(error) => {
                self.prompt_error = Some(error.message().to_string());
                Action::None
            }
        }
    }

    fn select_option(&mut self, index: usize, option_count: usize) {
        if index < option_count {
            self.selected_option = Some(index);
            self.prompt_error = None;
        }
    }

    fn handle_prompt_key(&mut self, prompt: Prompt, key: KeyEvent) -> Action {
        match prompt {
            Prompt::ChoosePriority { .. } | Prompt::ChooseTechLevel { .. } => {
                let option_count = prompt.options().len();
                match key.code {
                    KeyCode::Esc => Action::HideDialog,
                    KeyCode::Enter => self.confirm_prompt(prompt),
                    KeyCode::Down | KeyCode::Char('j') => {
                        let next = self.selected_option.map_or(0, |index| (index + 1) % option_count);
                        self.select_option(next, option_count);
                        Action::None
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        let previous = match self.selected_option {
                            Some(0) | None => option_count.saturating_sub(1),
                            Some(index) => index - 1,
                        };
                        self.select_option(previous, option_count);
                        Action::None
                    }
                    KeyCode::Char(c) => {
                        if let Some(digit) = c.to_digit(10).filter(|d| *d > 0) {
                            self.select_option(digit as usize - 1, option_count);
                        }
                        Action::None
                    }
                    _ => Action::None,
                }
            }
            Prompt::ConfirmStart { .. } => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => self.confirm_prompt(prompt),
                _ => Action::None,
            },
            // Notes are multi-line: Enter breaks the line, Ctrl+S confirms
            Prompt::ResolutionNotes { .. } => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.confirm_prompt(prompt),
                KeyCode::Enter => {
                    self.edit_input(KeyEvent::new(KeyCode::Char('\n'), KeyModifiers::NONE));
                    Action::None
                }
                _ => {
                    self.edit_input(key);
                    Action::None
                }
            },
        }
    }

    /// Apply a text editing key to the input buffer; returns true when the text changed
    fn edit_input(&mut self, key: KeyEvent) -> bool {
        let byte_pos = |buffer: &str, chars: usize| -> usize { buffer.chars().take(chars).map(char::len_utf8).sum() };
        let char_count = self.input_buffer.chars().count();

        match key.code {
            KeyCode::Char(c) => {
                let pos = byte_pos(&self.input_buffer, self.cursor_position);
                self.input_buffer.insert(pos, c);
                self.cursor_position += 1;
                true
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                let pos = byte_pos(&self.input_buffer, self.cursor_position - 1);
                self.input_buffer.remove(pos);
                self.cursor_position -= 1;
                true
            }
            KeyCode::Delete if self.cursor_position < char_count => {
                let pos = byte_pos(&self.input_buffer, self.cursor_position);
                self.input_buffer.remove(pos);
                true
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(char_count);
                false
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                false
            }
            KeyCode::End => {
                self.cursor_position = char_count;
                false
            }
            _ => false,
        }
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::Prompt(prompt) => self.handle_prompt_key(prompt, key),
            DialogType::History { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Images { links, .. } => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Down | KeyCode::Char('j') => {
                    if !links.is_empty() {
                        self.selected_image = (self.selected_image + 1) % links.len();
                    }
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    if !links.is_empty() {
                        self.selected_image = self.selected_image.checked_sub(1).unwrap_or(links.len() - 1);
                    }
                    Action::None
                }
                KeyCode::Enter | KeyCode::Char('d') => links
                    .get(self.selected_image)
                    .map_or(Action::None, |link| Action::DownloadImage(link.filename.clone())),
                _ => Action::None,
            },
            DialogType::ResetConfirmation => match key.code {
                KeyCode::Esc | KeyCode::Char('n') => Action::HideDialog,
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.clear_dialog();
                    Action::Reset
                }
                _ => Action::None,
            },
            DialogType::StageFiles => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => {
                    let paths = parse_path_list(&self.input_buffer);
                    self.clear_dialog();
                    if paths.is_empty() {
                        Action::None
                    } else {
                        Action::StageFiles(paths)
                    }
                }
                _ => {
                    self.edit_input(key);
                    Action::None
                }
            },
            DialogType::Search { .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => Action::HideDialog,
                _ => {
                    if self.edit_input(key) {
                        Action::SetSearch(self.input_buffer.clone())
                    } else {
                        Action::None
                    }
                }
            },
            DialogType::Loading { .. } => Action::None,
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if let DialogType::Search { query } = &dialog_type {
                    self.input_buffer = query.clone();
                    self.cursor_position = query.chars().count();
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::Prompt(prompt) => prompt_dialogs::render_prompt_dialog(
                f,
                rect,
                prompt,
                self.selected_option,
                &self.input_buffer,
                self.cursor_position,
                self.prompt_error.as_deref(),
            ),
            DialogType::History { issue_id, entries } => {
                history_dialog::render_history_dialog(f, rect, issue_id, &entries, &mut self.scroll);
            }
            DialogType::Images { issue_id, links } => {
                images_dialog::render_images_dialog(f, rect, &self.icons, issue_id, &links, self.selected_image);
            }
            DialogType::ResetConfirmation => system_dialogs::render_reset_confirmation_dialog(f, rect),
            DialogType::StageFiles => system_dialogs::render_input_dialog(
                f,
                rect,
                " Attach Images ",
                "Paths",
                "Image paths separated by commas (max 10, 5MB each)",
                &self.input_buffer,
                self.cursor_position,
                ("Enter", Color::Green, " Stage"),
            ),
            DialogType::Search { .. } => system_dialogs::render_input_dialog(
                f,
                rect,
                " 🔍 Search Issues ",
                "Query",
                "Matches name, email, phone, project and description",
                &self.input_buffer,
                self.cursor_position,
                ("Enter", Color::Green, " Done"),
            ),
            DialogType::Loading { title, text } => system_dialogs::render_loading_dialog(f, rect, &title, &text),
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, self.logger.as_ref(), &mut self.scroll),
        }
    }
}
