//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, limits and timings so the
//! components agree on them.

use std::time::Duration;

// Upload limits
/// Maximum number of images that can be staged for one report
pub const MAX_STAGED_FILES: usize = 10;
/// Maximum size of a single staged image (5 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

// Timings
/// How long non-error notifications stay on screen
pub const NOTIFICATION_AUTO_DISMISS: Duration = Duration::from_secs(3);
/// Delay between a successful mutation and the issue list refresh
pub const RELOAD_DELAY: Duration = Duration::from_millis(1500);
/// How long a control stays disabled after it was activated
pub const SOFT_GUARD_DURATION: Duration = Duration::from_secs(2);

// Defaults
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_PERFORMED_BY: &str = "Technical Team";
pub const DEFAULT_RESOLUTION_NOTES: &str = "Issue resolved successfully";
pub const UPLOADS_PATH: &str = "/static/uploads";

// Validation Messages
pub const MSG_FIELD_REQUIRED: &str = "This field is required";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";
pub const MSG_SELECT_PRIORITY: &str = "Please select a priority";
pub const MSG_SELECT_TECH_LEVEL: &str = "Please select a tech level";

// Notification titles
pub const TITLE_SUCCESS: &str = "Success!";
pub const TITLE_ERROR: &str = "Error";
pub const TITLE_TOO_MANY_FILES: &str = "❌ Too Many Files";
pub const TITLE_FILE_TOO_LARGE: &str = "❌ File Too Large";
pub const TITLE_FILE_UNREADABLE: &str = "❌ File Not Readable";
pub const TITLE_ISSUE_REPORTED: &str = "🎉 Issue Reported Successfully!";
pub const TITLE_SUBMIT_ERROR: &str = "❌ Error";
pub const TITLE_CONNECTION_ERROR: &str = "❌ Connection Error";
pub const TITLE_EXPORT_SUCCESS: &str = "Export Successful!";
pub const TITLE_PRINTED: &str = "Data Printed!";
pub const TITLE_RESET: &str = "Reset!";
pub const TITLE_NO_HISTORY: &str = "No History";
pub const TITLE_NO_IMAGES: &str = "No Images";
pub const TITLE_DOWNLOADED: &str = "Downloaded";

// Success Messages
pub const SUCCESS_UPDATE: &str = "Update completed successfully";
pub const SUCCESS_RESET: &str = "All data has been reset.";
pub const SUCCESS_EXPORT: &str = "Excel file has been saved";

// Error Messages
pub const ERROR_TOO_MANY_FILES: &str = "Please select maximum 10 images";
pub const ERROR_FILE_TOO_LARGE: &str = "Please select images smaller than 5MB each";
pub const ERROR_UPDATE_REJECTED: &str = "Failed to update";
pub const ERROR_UPDATE_FAILED: &str = "Failed to update issue";
pub const ERROR_HISTORY_FAILED: &str = "Failed to load history";
pub const ERROR_EXPORT_FAILED: &str = "Failed to export data";
pub const ERROR_PRINT_FAILED: &str = "Failed to print data";
pub const ERROR_RESET_FAILED: &str = "Failed to reset data";
pub const ERROR_SUBMIT_REJECTED: &str = "Failed to submit issue";
pub const ERROR_SUBMIT_CONNECTION: &str = "Failed to submit issue. Please check your connection and try again.";
pub const ERROR_LOAD_FAILED: &str = "Failed to load issues";
pub const ERROR_NO_ISSUE_SELECTED: &str = "No issue selected";

// Info Messages
pub const INFO_NO_HISTORY: &str = "No history found for this issue";
pub const INFO_NO_IMAGES: &str = "No images attached to this issue";
pub const INFO_NO_VALID_IMAGES: &str = "No valid images found for this issue";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const RESET_WARNING: &str = "This will delete ALL data permanently!";
pub const SUBMITTING_TITLE: &str = "Submitting Issue...";
pub const SUBMITTING_TEXT: &str = "Please wait while we process your request";

// UI Layout Constants
/// Height of the statistics header in lines
pub const STATS_HEIGHT: u16 = 3;
/// Height of the filter bar in lines
pub const FILTER_BAR_HEIGHT: u16 = 3;
