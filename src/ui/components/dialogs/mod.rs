//! Dialog rendering, one module per family of dialogs

pub mod common;
pub mod history_dialog;
pub mod images_dialog;
pub mod prompt_dialogs;
pub mod scroll_behavior;
pub mod system_dialogs;
