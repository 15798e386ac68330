//! Maps user actions on an issue to prompts, and prompt answers to update requests.

use crate::api::{ApiError, UpdateKind, UpdateRequest};
use crate::constants::{
    DEFAULT_PERFORMED_BY, DEFAULT_RESOLUTION_NOTES, ERROR_UPDATE_FAILED, ERROR_UPDATE_REJECTED, MSG_SELECT_PRIORITY, MSG_SELECT_TECH_LEVEL,
    SUCCESS_UPDATE, TITLE_ERROR, TITLE_SUCCESS,
};
use crate::issues::{Priority, TechLevel};
use crate::notification::Notification;

/// Action a user can trigger on one issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueAction {
    SetPriority,
    SetTechLevel,
    StartIssue,
    CompleteIssue,
    ViewHistory,
}

impl IssueAction {
    pub const ALL: [IssueAction; 5] = [
        IssueAction::SetPriority,
        IssueAction::SetTechLevel,
        IssueAction::StartIssue,
        IssueAction::CompleteIssue,
        IssueAction::ViewHistory,
    ];

    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            IssueAction::SetPriority => "setPriority",
            IssueAction::SetTechLevel => "setTechLevel",
            IssueAction::StartIssue => "startIssue",
            IssueAction::CompleteIssue => "completeIssue",
            IssueAction::ViewHistory => "viewHistory",
        }
    }

    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.identifier() == identifier)
    }

    /// Prompt shown before the action runs; `None` for read-only actions
    #[must_use]
    pub fn prompt(self, issue_id: i64) -> Option<Prompt> {
        match self {
            IssueAction::SetPriority => Some(Prompt::ChoosePriority { issue_id }),
            IssueAction::SetTechLevel => Some(Prompt::ChooseTechLevel { issue_id }),
            IssueAction::StartIssue => Some(Prompt::ConfirmStart { issue_id }),
            IssueAction::CompleteIssue => Some(Prompt::ResolutionNotes { issue_id }),
            IssueAction::ViewHistory => None,
        }
    }
}

/// Confirmation step of a mutating action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    ChoosePriority { issue_id: i64 },
    ChooseTechLevel { issue_id: i64 },
    ConfirmStart { issue_id: i64 },
    ResolutionNotes { issue_id: i64 },
}

impl Prompt {
    #[must_use]
    pub fn issue_id(self) -> i64 {
        match self {
            Prompt::ChoosePriority { issue_id }
            | Prompt::ChooseTechLevel { issue_id }
            | Prompt::ConfirmStart { issue_id }
            | Prompt::ResolutionNotes { issue_id } => issue_id,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Prompt::ChoosePriority { .. } => "Set Priority",
            Prompt::ChooseTechLevel { .. } => "Set Tech Level",
            Prompt::ConfirmStart { .. } => "Start Work",
            Prompt::ResolutionNotes { .. } => "Complete Issue",
        }
    }

    #[must_use]
    pub fn confirm_label(self) -> &'static str {
        match self {
            Prompt::ChoosePriority { .. } => "Set Priority",
            Prompt::ChooseTechLevel { .. } => "Set Tech Level",
            Prompt::ConfirmStart { .. } => "Yes, start work!",
            Prompt::ResolutionNotes { .. } => "Mark as Complete",
        }
    }

    /// Options of a selection prompt as (value, label)
    #[must_use]
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            Prompt::ChoosePriority { .. } => Priority::ALL.iter().map(|p| (p.as_str(), p.as_str())).collect(),
            Prompt::ChooseTechLevel { .. } => TechLevel::ALL.iter().map(|t| (t.as_str(), t.label())).collect(),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Prompt::ChoosePriority { .. } => "Select Priority",
            Prompt::ChooseTechLevel { .. } => "Select Tech Level",
            Prompt::ConfirmStart { .. } => "Are you sure you want to start working on this issue?",
            Prompt::ResolutionNotes { .. } => "Enter resolution details...",
        }
    }
}

/// Reason a prompt cannot be confirmed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Please select a priority")]
    NoPrioritySelected,
    #[error("Please select a tech level")]
    NoTechLevelSelected,
}

impl PromptError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PromptError::NoPrioritySelected => MSG_SELECT_PRIORITY,
            PromptError::NoTechLevelSelected => MSG_SELECT_TECH_LEVEL,
        }
    }
}

/// Builds update requests on behalf of one actor
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    performed_by: String,
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PERFORMED_BY)
    }
}

impl ActionDispatcher {
    #[must_use]
    pub fn new(performed_by: impl Into<String>) -> Self {
        Self {
            performed_by: performed_by.into(),
        }
    }

    #[must_use]
    pub fn performed_by(&self) -> &str {
        &self.performed_by
    }

    fn request(&self, issue_id: i64, kind: UpdateKind) -> UpdateRequest {
        UpdateRequest {
            issue_id,
            kind,
            performed_by: self.performed_by.clone(),
        }
    }

    pub fn set_priority(&self, issue_id: i64, selection: Option<Priority>) -> Result<UpdateRequest, PromptError> {
        let priority = selection.ok_or(PromptError::NoPrioritySelected)?;
        Ok(self.request(issue_id, UpdateKind::Priority(priority)))
    }

    pub fn set_tech_level(&self, issue_id: i64, selection: Option<TechLevel>) -> Result<UpdateRequest, PromptError> {
        let level = selection.ok_or(PromptError::NoTechLevelSelected)?;
        Ok(self.request(issue_id, UpdateKind::TechLevel(level)))
    }

    #[must_use]
    pub fn start(&self, issue_id: i64) -> UpdateRequest {
        self.request(issue_id, UpdateKind::Start)
    }

    /// Blank notes fall back to [`DEFAULT_RESOLUTION_NOTES`]
    #[must_use]
    pub fn complete(&self, issue_id: i64, notes: &str) -> UpdateRequest {
        let resolution_notes = if notes.trim().is_empty() {
            DEFAULT_RESOLUTION_NOTES.to_string()
        } else {
            notes.to_string()
        };
        self.request(issue_id, UpdateKind::Complete { resolution_notes })
    }
}

/// Notification shown once an update request finished
#[must_use]
pub fn update_outcome(result: &Result<(), ApiError>) -> Notification {
    match result {
        Ok(()) => Notification::success(TITLE_SUCCESS, SUCCESS_UPDATE),
        Err(error) => Notification::error(TITLE_ERROR, error.user_message(ERROR_UPDATE_REJECTED, ERROR_UPDATE_FAILED)),
    }
}
