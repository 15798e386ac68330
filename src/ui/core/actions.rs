use crate::api::UpdateRequest;
use crate::dispatcher::{IssueAction, Prompt};
use crate::issues::{HistoryEntry, ImageLink, IssueRecord};
use crate::notification::Notification;
use std::path::PathBuf;

/// Top-level screen shown below the statistics header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    ReportForm,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextIssue,
    PreviousIssue,
    ShowView(View),

    // Filters
    CycleStatusFilter,
    CyclePriorityFilter,
    CycleTechLevelFilter,
    SetSearch(String),
    ClearFilters,

    // Issue operations
    Dispatch {
        action: IssueAction,
        issue_id: i64,
    },
    SubmitUpdate(UpdateRequest),
    HistoryLoaded {
        issue_id: i64,
        entries: Vec<HistoryEntry>,
    },
    ShowImages(i64),
    DownloadImage(String),

    // Issue list loading
    LoadIssues,
    IssuesLoaded(Vec<IssueRecord>),
    LoadFailed(String),
    /// Reload the list after the short delay that follows a mutation
    ScheduleReload,

    // Report form
    StageFiles(Vec<PathBuf>),
    RemoveStagedFile(usize),
    ClearStagedFiles,
    SubmitIssue,
    IssueSubmitted(String),

    // Data operations
    Export,
    Print,
    Reset,

    // Feedback
    Notify(Notification),
    DismissNotification,

    // UI operations
    CycleIconTheme,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Prompt(Prompt),
    History {
        issue_id: i64,
        entries: Vec<HistoryEntry>,
    },
    Images {
        issue_id: i64,
        links: Vec<ImageLink>,
    },
    ResetConfirmation,
    StageFiles,
    Search {
        query: String,
    },
    Loading {
        title: String,
        text: String,
    },
    Help,
    Logs,
}
