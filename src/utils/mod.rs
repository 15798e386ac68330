//! Utility modules for the TechFlow client.
//!
//! - [`datetime`] - Timestamp formatting for exported files
//! - [`downloads`] - Saving downloaded bytes into the download directory

pub mod datetime;
pub mod downloads;
