//! Transient notifications.
//!
//! Success, warning and info notifications dismiss themselves after
//! [`NOTIFICATION_AUTO_DISMISS`]; errors stay until the user dismisses them.

use crate::constants::NOTIFICATION_AUTO_DISMISS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub severity: Severity,
    pub shown_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
            shown_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Success)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Error)
    }

    #[must_use]
    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Warning)
    }

    #[must_use]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, Severity::Info)
    }

    /// `None` for errors, which need an explicit dismissal
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        match self.severity {
            Severity::Error => None,
            _ => Some(NOTIFICATION_AUTO_DISMISS),
        }
    }

    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        self.auto_dismiss_after().is_none()
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.auto_dismiss_after()
            .is_some_and(|timeout| now.saturating_duration_since(self.shown_at) >= timeout)
    }

    /// Remaining share of the display time, from 1.0 down to 0.0
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Option<f64> {
        let timeout = self.auto_dismiss_after()?;
        let elapsed = now.saturating_duration_since(self.shown_at);
        let remaining = timeout.saturating_sub(elapsed);
        Some(remaining.as_secs_f64() / timeout.as_secs_f64())
    }
}
