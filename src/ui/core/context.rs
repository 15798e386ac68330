use crate::{api::IssueApi, dispatcher::ActionDispatcher, icons::IconService, logger::Logger};
use std::path::PathBuf;
use std::sync::Arc;

/// Services shared by the application component
pub struct AppContext {
    pub api: Arc<dyn IssueApi>,
    pub dispatcher: ActionDispatcher,
    pub download_dir: PathBuf,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(api: Arc<dyn IssueApi>, dispatcher: ActionDispatcher, download_dir: PathBuf, logger: Logger) -> Self {
        Self {
            api,
            dispatcher,
            download_dir,
            icons: IconService::default(),
            logger,
        }
    }
}
