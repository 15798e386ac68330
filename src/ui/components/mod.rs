//! Reusable UI components

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod filter_bar;
pub mod issue_form_component;
pub mod issue_list_component;
pub mod notification_component;
pub mod scrollbar_helper;
pub mod stats_header;
pub mod status_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use filter_bar::FilterBar;
pub use issue_form_component::IssueFormComponent;
pub use issue_list_component::IssueListComponent;
pub use notification_component::NotificationComponent;
pub use stats_header::StatsHeader;
pub use status_bar::{StatusBar, StatusInfo};
