use crate::icons::IconService;
use crate::notification::{Notification, Severity};
use crate::ui::components::dialogs::common::create_dialog_block;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Width of the auto-dismissing toast
const TOAST_WIDTH: u16 = 50;

/// Shows the latest notification. A new one replaces the current one.
///
/// Errors render as a centered modal that captures input until Enter or Esc;
/// everything else is a toast in the top-right corner with a countdown bar.
#[derive(Default)]
pub struct NotificationComponent {
    pub current: Option<Notification>,
    pub icons: IconService,
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an error waits for the user
    pub fn is_modal(&self) -> bool {
        self.current.as_ref().is_some_and(Notification::requires_confirmation)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the notification once its display time ran out; returns true when it did
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    fn color(severity: Severity) -> Color {
        match severity {
            Severity::Success => Color::Green,
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
            Severity::Info => Color::Cyan,
        }
    }

    fn render_modal(&self, f: &mut Frame, area: Rect, notification: &Notification) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 8, area);
        f.render_widget(Clear, dialog_area);

        let title = format!(" {} {} ", self.icons.severity(notification.severity), notification.title);
        let block = create_dialog_block("", Color::Red).title(title);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let body = Paragraph::new(notification.body.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(body, chunks[0]);

        let footer = Paragraph::new(Line::from("Press Enter or Esc to dismiss"))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(footer, chunks[1]);
    }

    fn render_toast(&self, f: &mut Frame, area: Rect, notification: &Notification) {
        let toast_area = LayoutManager::toast_rect(TOAST_WIDTH, 6, area);
        f.render_widget(Clear, toast_area);

        let color = Self::color(notification.severity);
        let title = format!(" {} {} ", self.icons.severity(notification.severity), notification.title);
        let block = create_dialog_block("", color).title(title);
        let inner = block.inner(toast_area);
        f.render_widget(block, toast_area);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let body = Paragraph::new(notification.body.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        f.render_widget(body, chunks[0]);

        let progress = notification.progress_at(Instant::now()).unwrap_or(0.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(progress.clamp(0.0, 1.0))
            .label("");
        f.render_widget(gauge, chunks[1]);
    }
}

impl Component for NotificationComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_modal() {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::DismissNotification,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Notify(notification) => {
                self.current = Some(notification);
                Action::None
            }
            Action::DismissNotification => {
                self.current = None;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(notification) = self.current.clone() else {
            return;
        };
        if notification.requires_confirmation() {
            self.render_modal(f, rect, &notification);
        } else {
            self.render_toast(f, rect, &notification);
        }
    }
}
