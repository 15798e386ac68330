//! Core UI functionality for the TechFlow client.
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Services shared across the application
//! - [`event_handler`] - Keyboard and resize input
//! - [`guard`] - Soft guard against repeated activation of a control
//! - [`task_manager`] - Background network calls reporting back via actions
//!
//! Components turn key events into [`Action`]s; [`Component::update`] lets each
//! component consume the actions it owns and pass the rest up to the
//! application, which runs network calls through the [`TaskManager`].

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod guard;
pub mod task_manager;

pub use actions::{Action, DialogType, View};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use guard::{Control, SoftGuard};
pub use task_manager::{ActionSender, TaskId, TaskManager};
