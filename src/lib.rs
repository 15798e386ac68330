//! TechFlow - a terminal client for the TechFlow issue tracker
//!
//! This library implements the client side of the TechFlow helpdesk: it loads
//! reported issues from the server, filters them, triages them (priority,
//! tech level, start, complete), shows their history and attachments, and
//! submits new reports with staged images. The interface is built with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - HTTP gateway to the TechFlow server
//! * [`config`] - Application configuration management
//! * [`dispatcher`] - Issue actions, their prompts and the resulting update requests
//! * [`filter`] - Client-side filtering of the loaded issue set
//! * [`upload`] - Images staged for a new report
//! * [`validation`] - Report form field validation
//! * [`notification`] - Transient success/error notifications
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// API gateway: trait and HTTP implementation
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Action dispatcher for issue triage
pub mod dispatcher;

/// Issue filter engine
pub mod filter;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Issue data model shared by the gateway and the UI
pub mod issues;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Notification model
pub mod notification;

/// Terminal user interface components and rendering
pub mod ui;

/// Upload staging buffer
pub mod upload;

/// Utility functions for timestamps and downloads
pub mod utils;

/// Report form validation
pub mod validation;
