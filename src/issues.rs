//! Issue data model shared by the filter engine, the API gateway and the UI.
//!
//! Records are read-only on the client: they are materialized from the
//! server's issue list and replaced wholesale on every refresh.

use crate::constants::UPLOADS_PATH;
use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

/// Priority assigned by the technical team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Support tier responsible for the issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechLevel {
    L1,
    L2,
    L3,
}

/// Error returned when a status, priority or tech level string is unknown
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 3] = [IssueStatus::Pending, IssueStatus::InProgress, IssueStatus::Completed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IssueStatus::Pending => "Pending",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Completed => "Completed",
        }
    }
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl TechLevel {
    pub const ALL: [TechLevel; 3] = [TechLevel::L1, TechLevel::L2, TechLevel::L3];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TechLevel::L1 => "L1",
            TechLevel::L2 => "L2",
            TechLevel::L3 => "L3",
        }
    }

    /// Label shown in the tech level prompt
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TechLevel::L1 => "L1 - CE",
            TechLevel::L2 => "L2 - Skidata/TKH",
            TechLevel::L3 => "L3 - Skidata/TKH",
        }
    }
}

impl FromStr for IssueStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for Priority {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "priority",
                value: s.to_string(),
            })
    }
}

impl FromStr for TechLevel {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TechLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownValue {
                kind: "tech level",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treats `null`, `""` and unknown values as "unset".
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One issue as reported by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    #[serde(alias = "id")]
    pub report_id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: IssueStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub tech_level: Option<TechLevel>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resolution_notes: Option<String>,
}

impl IssueRecord {
    /// Full text of the record as it is rendered, used by the search criterion.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut parts = vec![
            format!("#{}", self.report_id),
            self.name.clone(),
            self.project.clone(),
            self.description.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.to_string(),
        ];
        if let Some(priority) = self.priority {
            parts.push(priority.to_string());
        }
        if let Some(level) = self.tech_level {
            parts.push(level.to_string());
        }
        if let Some(created_at) = &self.created_at {
            parts.push(created_at.clone());
        }
        if let Some(notes) = &self.resolution_notes {
            parts.push(notes.clone());
        }
        parts.join(" ")
    }

    /// Attached image filenames, trimmed, blanks dropped
    #[must_use]
    pub fn image_filenames(&self) -> Vec<String> {
        parse_image_list(&self.images)
    }

    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.trim().is_empty()
    }
}

/// Aggregate counters over the full, unfiltered issue set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl IssueStats {
    #[must_use]
    pub fn from_records(records: &[IssueRecord]) -> Self {
        let count = |status: IssueStatus| records.iter().filter(|r| r.status == status).count();
        Self {
            total: records.len(),
            pending: count(IssueStatus::Pending),
            in_progress: count(IssueStatus::InProgress),
            completed: count(IssueStatus::Completed),
        }
    }
}

/// One entry of an issue's audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub performed_by: String,
}

impl HistoryEntry {
    /// Timestamp in local time, or "N/A" when missing or unparsable
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        let Some(raw) = self.timestamp.as_deref().filter(|t| !t.trim().is_empty()) else {
            return "N/A".to_string();
        };
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
                return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
            }
        }
        "N/A".to_string()
    }
}

/// Fields submitted with a new issue report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub project: String,
    pub description: String,
}

/// A downloadable attachment of an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub filename: String,
    pub url: String,
}

/// Split a comma-separated filename list, trimming entries and dropping blanks
#[must_use]
pub fn parse_image_list(images: &str) -> Vec<String> {
    images
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build `{base_url}/static/uploads/{encoded filename}` for every attachment
#[must_use]
pub fn image_links(base_url: &reqwest::Url, images: &str) -> Vec<ImageLink> {
    parse_image_list(images)
        .into_iter()
        .map(|filename| ImageLink {
            url: upload_url(base_url, &filename),
            filename,
        })
        .collect()
}

/// URL of one uploaded file, with the filename encoded as a single path segment
#[must_use]
pub fn upload_url(base_url: &reqwest::Url, filename: &str) -> String {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty();
        for part in UPLOADS_PATH.split('/').filter(|p| !p.is_empty()) {
            segments.push(part);
        }
        segments.push(filename);
    }
    url.to_string()
}
