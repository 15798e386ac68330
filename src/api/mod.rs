//! API gateway for the TechFlow issue tracking server.
//!
//! This module defines the request/response boundary the client talks to. Every
//! call is a single request: no queueing, no retry and no timeout.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::issues::{HistoryEntry, IssueRecord, NewIssue, Priority, TechLevel};
use crate::upload::StagedFile;

pub mod http;

pub use http::HttpIssueApi;

/// Failure of a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered `success: false`, optionally with an error text
    #[error("Server rejected request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user.
    ///
    /// Server-reported errors are surfaced verbatim (or `rejected_fallback`
    /// when the server gave no text); everything else uses `generic`.
    #[must_use]
    pub fn user_message(&self, rejected_fallback: &str, generic: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) if !message.is_empty() => message.clone(),
            ApiError::Rejected(_) => rejected_fallback.to_string(),
            _ => generic.to_string(),
        }
    }

    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

/// Common envelope of the JSON endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub report_id: Option<Value>,
    #[serde(default)]
    pub total_issues: Option<u64>,
}

impl ApiResponse {
    /// Turn `success: false` into [`ApiError::Rejected`]
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.error))
        }
    }
}

/// What an update changes on the issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    Priority(Priority),
    TechLevel(TechLevel),
    Start,
    Complete { resolution_notes: String },
}

impl UpdateKind {
    /// Last path segment of the update endpoint
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            UpdateKind::Priority(_) => "priority",
            UpdateKind::TechLevel(_) => "tech_level",
            UpdateKind::Start => "start",
            UpdateKind::Complete { .. } => "complete",
        }
    }
}

/// One state change requested for an issue, sent once per confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub issue_id: i64,
    pub kind: UpdateKind,
    pub performed_by: String,
}

impl UpdateRequest {
    #[must_use]
    pub fn path(&self) -> String {
        format!("/api/issues/{}/{}", self.issue_id, self.kind.endpoint())
    }

    /// JSON body for the PUT request
    #[must_use]
    pub fn body(&self) -> Value {
        match &self.kind {
            UpdateKind::Priority(priority) => json!({
                "priority": priority.as_str(),
                "performed_by": self.performed_by,
            }),
            UpdateKind::TechLevel(level) => json!({
                "tech_level": level.as_str(),
                "performed_by": self.performed_by,
            }),
            UpdateKind::Start => json!({ "performed_by": self.performed_by }),
            UpdateKind::Complete { resolution_notes } => json!({
                "resolution_notes": resolution_notes,
                "performed_by": self.performed_by,
            }),
        }
    }
}

/// Gateway trait implemented by the HTTP client and by test doubles.
#[async_trait]
pub trait IssueApi: Send + Sync {
    /// Full issue list, in server order
    async fn list_issues(&self) -> Result<Vec<IssueRecord>, ApiError>;

    /// Submit a new report with its staged images; returns the report id
    async fn create_issue(&self, issue: &NewIssue, images: &[StagedFile]) -> Result<String, ApiError>;

    async fn update_issue(&self, request: &UpdateRequest) -> Result<(), ApiError>;

    async fn history(&self, issue_id: i64) -> Result<Vec<HistoryEntry>, ApiError>;

    /// Spreadsheet export; a non-OK status is an error
    async fn export(&self) -> Result<Vec<u8>, ApiError>;

    /// Ask the server to print all issues; returns how many were printed
    async fn print(&self) -> Result<u64, ApiError>;

    /// Delete all data on the server
    async fn reset(&self) -> Result<(), ApiError>;

    /// Download one uploaded attachment
    async fn fetch_image(&self, filename: &str) -> Result<Vec<u8>, ApiError>;

    /// Base URL used to build attachment links
    fn base_url(&self) -> &reqwest::Url;
}
