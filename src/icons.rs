//! Icon service for managing different icon themes
//!
//! Emoji, Unicode and ASCII sets are provided so the client renders on any terminal.

use crate::issues::{IssueStatus, Priority};
use crate::notification::Severity;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Issue status icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub pending: &'static str,
    pub in_progress: &'static str,
    pub completed: &'static str,
}

/// Notification severity icons
#[derive(Debug, Clone)]
pub struct SeverityIcons {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
}

/// Priority indicators
#[derive(Debug, Clone)]
pub struct PriorityIcons {
    pub high: &'static str,
    pub medium: &'static str,
    pub low: &'static str,
    pub unset: &'static str,
}

/// Issue metadata icons
#[derive(Debug, Clone)]
pub struct MetaIcons {
    pub images: &'static str,
    pub project: &'static str,
    pub contact: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub status: StatusIcons,
    pub severity: SeverityIcons,
    pub priority: PriorityIcons,
    pub meta: MetaIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "⏳",
                in_progress: "🔧",
                completed: "✅",
            },
            severity: SeverityIcons {
                success: "✅",
                error: "❌",
                warning: "⚠️",
                info: "💡",
            },
            priority: PriorityIcons {
                high: "🔴",
                medium: "🟡",
                low: "🟢",
                unset: "⚪",
            },
            meta: MetaIcons {
                images: "📷",
                project: "📁",
                contact: "👤",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "○",
                in_progress: "◐",
                completed: "●",
            },
            severity: SeverityIcons {
                success: "✓",
                error: "✗",
                warning: "⚠",
                info: "ⓘ",
            },
            priority: PriorityIcons {
                high: "▲",
                medium: "◆",
                low: "▼",
                unset: "·",
            },
            meta: MetaIcons {
                images: "▣",
                project: "◆",
                contact: "☺",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            status: StatusIcons {
                pending: "[ ]",
                in_progress: "[~]",
                completed: "[X]",
            },
            severity: SeverityIcons {
                success: "+",
                error: "X",
                warning: "!",
                info: "i",
            },
            priority: PriorityIcons {
                high: "!!!",
                medium: "!!",
                low: "!",
                unset: "-",
            },
            meta: MetaIcons {
                images: "[img]",
                project: "#",
                contact: "@",
            },
        }
    }

    #[must_use]
    pub fn status(&self, status: IssueStatus) -> &'static str {
        let icons = self.icons().status;
        match status {
            IssueStatus::Pending => icons.pending,
            IssueStatus::InProgress => icons.in_progress,
            IssueStatus::Completed => icons.completed,
        }
    }

    #[must_use]
    pub fn priority(&self, priority: Option<Priority>) -> &'static str {
        let icons = self.icons().priority;
        match priority {
            Some(Priority::High) => icons.high,
            Some(Priority::Medium) => icons.medium,
            Some(Priority::Low) => icons.low,
            None => icons.unset,
        }
    }

    #[must_use]
    pub fn severity(&self, severity: Severity) -> &'static str {
        let icons = self.icons().severity;
        match severity {
            Severity::Success => icons.success,
            Severity::Error => icons.error,
            Severity::Warning => icons.warning,
            Severity::Info => icons.info,
        }
    }

    #[must_use]
    pub fn images(&self) -> &'static str {
        self.icons().meta.images
    }

    #[must_use]
    pub fn project(&self) -> &'static str {
        self.icons().meta.project
    }

    #[must_use]
    pub fn contact(&self) -> &'static str {
        self.icons().meta.contact
    }
}
