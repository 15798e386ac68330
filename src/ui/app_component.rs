use crate::constants::{
    ERROR_EXPORT_FAILED, ERROR_HISTORY_FAILED, ERROR_LOAD_FAILED, ERROR_NO_ISSUE_SELECTED, ERROR_PRINT_FAILED,
    ERROR_RESET_FAILED, ERROR_SUBMIT_CONNECTION, ERROR_SUBMIT_REJECTED, INFO_NO_HISTORY, INFO_NO_IMAGES,
    INFO_NO_VALID_IMAGES, RELOAD_DELAY, SUBMITTING_TEXT, SUBMITTING_TITLE, SUCCESS_EXPORT, SUCCESS_RESET,
    TITLE_CONNECTION_ERROR, TITLE_DOWNLOADED, TITLE_ERROR, TITLE_EXPORT_SUCCESS, TITLE_ISSUE_REPORTED,
    TITLE_NO_HISTORY, TITLE_NO_IMAGES, TITLE_PRINTED, TITLE_RESET, TITLE_SUBMIT_ERROR,
};
use crate::dispatcher::{update_outcome, IssueAction};
use crate::filter::IssueFilterEngine;
use crate::issues::image_links;
use crate::notification::Notification;
use crate::ui::components::{
    DialogComponent, FilterBar, IssueFormComponent, IssueListComponent, NotificationComponent, StatsHeader,
    StatusBar, StatusInfo,
};
use crate::ui::core::{
    actions::{Action, DialogType, View},
    event_handler::EventType,
    task_manager::TaskManager,
    AppContext, Component, Control, SoftGuard,
};
use crate::ui::layout::LayoutManager;
use crate::utils::{datetime::export_filename, downloads::save_download};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Upper bound on follow-up actions produced by a single action
const MAX_ACTION_CHAIN: usize = 16;

pub struct AppComponent {
    // Component composition
    issue_list: IssueListComponent,
    filter_bar: FilterBar,
    form: IssueFormComponent,
    dialog: DialogComponent,
    notifications: NotificationComponent,

    // Application state
    filters: IssueFilterEngine,
    view: View,
    loading: bool,
    guard: SoftGuard,

    // Services
    ctx: AppContext,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(ctx: AppContext) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let mut dialog = DialogComponent::new(ctx.dispatcher.clone());
        dialog.set_logger(ctx.logger.clone());

        let mut app = Self {
            issue_list: IssueListComponent::new(),
            filter_bar: FilterBar::default(),
            form: IssueFormComponent::new(),
            dialog,
            notifications: NotificationComponent::new(),
            filters: IssueFilterEngine::new(),
            view: View::Dashboard,
            loading: true,
            guard: SoftGuard::default(),
            ctx,
            task_manager,
            background_action_rx,
            should_quit: false,
        };
        app.apply_icon_theme();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn filters(&self) -> &IssueFilterEngine {
        &self.filters
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current.as_ref()
    }

    pub fn current_dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn form(&self) -> &IssueFormComponent {
        &self.form
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if any background operations are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Fetch the issue list on startup
    pub fn trigger_initial_load(&mut self) {
        self.ctx.logger.log("AppComponent: Starting initial load".to_string());
        self.process_action(Action::LoadIssues);
    }

    /// Push current state into the components that render it
    fn sync_component_data(&mut self) {
        let now = Instant::now();
        let visible = self.filters.filtered().into_iter().cloned().collect();
        self.issue_list.update_data(visible, self.filters.summary());
        self.issue_list.loading = self.loading;

        self.issue_list.guarded_actions = match self.issue_list.selected_issue() {
            Some(issue) => {
                let issue_id = issue.report_id;
                IssueAction::ALL
                    .into_iter()
                    .filter(|action| self.guard.is_guarded(Control::Issue(*action, issue_id), now))
                    .collect()
            }
            None => Vec::new(),
        };
        self.form.submit_guarded = self.guard.is_guarded(Control::Submit, now);
        self.filter_bar.update_data(self.filters.criteria().clone());
    }

    fn apply_icon_theme(&mut self) {
        self.issue_list.icons = self.ctx.icons.clone();
        self.dialog.icons = self.ctx.icons.clone();
        self.notifications.icons = self.ctx.icons.clone();
    }

    /// Returns false when the control is still guarded from an earlier activation
    fn activate(&mut self, control: Control) -> bool {
        self.guard.try_activate(control, Instant::now())
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.ctx.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }
        if self.view == View::ReportForm {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.ctx.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('n') => Action::ShowView(View::ReportForm),
            KeyCode::Char('e') => Action::Export,
            KeyCode::Char('o') => Action::Print,
            KeyCode::Char('r') => {
                self.ctx.logger.log("Global key: 'r' - refreshing issues".to_string());
                Action::LoadIssues
            }
            KeyCode::Char('R') => Action::ShowDialog(DialogType::ResetConfirmation),
            KeyCode::Char('I') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Run an action through the components and the app-level handler until nothing is left
    pub fn process_action(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if matches!(action, Action::None) {
                break;
            }
            let remaining = self.update(action);
            action = self.handle_app_action(remaining);
        }
        self.sync_component_data();
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::ShowView(view) => {
                self.ctx.logger.log(format!("View: switching to {:?}", view));
                self.view = view;
                Action::None
            }

            // Filters
            Action::CycleStatusFilter => {
                self.filters.cycle_status();
                Action::None
            }
            Action::CyclePriorityFilter => {
                self.filters.cycle_priority();
                Action::None
            }
            Action::CycleTechLevelFilter => {
                self.filters.cycle_tech_level();
                Action::None
            }
            Action::SetSearch(query) => {
                self.filters.set_search(&query);
                Action::None
            }
            Action::ClearFilters => {
                self.filters.clear_all();
                Action::None
            }

            // Loading
            Action::LoadIssues => {
                self.loading = true;
                self.spawn_load();
                Action::None
            }
            Action::IssuesLoaded(records) => {
                self.ctx.logger.log(format!("Loaded {} issues", records.len()));
                self.loading = false;
                self.filters.load(records);
                Action::None
            }
            Action::LoadFailed(message) => {
                self.ctx.logger.log(format!("Loading issues failed: {}", message));
                self.loading = false;
                Action::Notify(Notification::error(TITLE_ERROR, ERROR_LOAD_FAILED))
            }
            Action::ScheduleReload => {
                self.task_manager.spawn_delayed(Action::LoadIssues, RELOAD_DELAY);
                Action::None
            }

            // Issue operations
            Action::Dispatch { action, issue_id } => {
                if !self.activate(Control::Issue(action, issue_id)) {
                    return Action::None;
                }
                self.ctx
                    .logger
                    .log(format!("Dispatch: {} on issue #{}", action.identifier(), issue_id));
                match action.prompt(issue_id) {
                    Some(prompt) => Action::ShowDialog(DialogType::Prompt(prompt)),
                    None => {
                        self.spawn_history(issue_id);
                        Action::None
                    }
                }
            }
            Action::SubmitUpdate(request) => {
                self.spawn_update(request);
                Action::None
            }
            Action::HistoryLoaded { issue_id, entries } => {
                Action::ShowDialog(DialogType::History { issue_id, entries })
            }
            Action::ShowImages(issue_id) => self.show_images(issue_id),
            Action::DownloadImage(filename) => {
                self.spawn_image_download(filename);
                Action::None
            }

            // Report form
            Action::SubmitIssue => self.submit_issue(),
            Action::IssueSubmitted(report_id) => {
                self.ctx.logger.log(format!("Issue reported with ID {}", report_id));
                self.view = View::Dashboard;
                self.task_manager.spawn_delayed(Action::LoadIssues, RELOAD_DELAY);
                Action::Notify(Notification::success(
                    TITLE_ISSUE_REPORTED,
                    format!("Your issue has been reported with ID: {}", report_id),
                ))
            }

            // Data operations
            Action::Export => {
                self.spawn_export();
                Action::None
            }
            Action::Print => {
                self.spawn_print();
                Action::None
            }
            Action::Reset => {
                self.spawn_reset();
                Action::None
            }

            Action::CycleIconTheme => {
                self.ctx.icons.cycle_icon_theme();
                self.apply_icon_theme();
                self.ctx
                    .logger
                    .log(format!("Icon theme changed to {:?}", self.ctx.icons.theme()));
                Action::None
            }
            _ => Action::None,
        }
    }

    fn spawn_load(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        self.task_manager.spawn("Load issues", move |tx| async move {
            let action = match api.list_issues().await {
                Ok(records) => Action::IssuesLoaded(records),
                Err(e) => Action::LoadFailed(e.to_string()),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_history(&mut self, issue_id: i64) {
        let api = Arc::clone(&self.ctx.api);
        self.task_manager
            .spawn(format!("History of #{}", issue_id), move |tx| async move {
                let action = match api.history(issue_id).await {
                    Ok(entries) if entries.is_empty() => {
                        Action::Notify(Notification::info(TITLE_NO_HISTORY, INFO_NO_HISTORY))
                    }
                    Ok(entries) => Action::HistoryLoaded { issue_id, entries },
                    Err(e) => {
                        log::warn!("History of #{} failed: {}", issue_id, e);
                        Action::Notify(Notification::error(TITLE_ERROR, ERROR_HISTORY_FAILED))
                    }
                };
                let _ = tx.send(action);
            });
    }

    fn spawn_update(&mut self, request: crate::api::UpdateRequest) {
        let api = Arc::clone(&self.ctx.api);
        let description = format!("Update {}", request.path());
        self.ctx.logger.log(description.clone());
        self.task_manager.spawn(description, move |tx| async move {
            let result = api.update_issue(&request).await;
            if let Err(e) = &result {
                log::warn!("Update {} failed: {}", request.path(), e);
            }
            let succeeded = result.is_ok();
            let _ = tx.send(Action::Notify(update_outcome(&result)));
            if succeeded {
                let _ = tx.send(Action::ScheduleReload);
            }
        });
    }

    fn show_images(&mut self, issue_id: i64) -> Action {
        let Some(record) = self.filters.find(issue_id) else {
            return Action::Notify(Notification::error(TITLE_ERROR, ERROR_NO_ISSUE_SELECTED));
        };
        if !record.has_images() {
            return Action::Notify(Notification::info(TITLE_NO_IMAGES, INFO_NO_IMAGES));
        }
        let links = image_links(self.ctx.api.base_url(), &record.images);
        if links.is_empty() {
            return Action::Notify(Notification::info(TITLE_NO_IMAGES, INFO_NO_VALID_IMAGES));
        }
        Action::ShowDialog(DialogType::Images { issue_id, links })
    }

    fn spawn_image_download(&mut self, filename: String) {
        let api = Arc::clone(&self.ctx.api);
        let dir = self.ctx.download_dir.clone();
        self.task_manager
            .spawn(format!("Download {}", filename), move |tx| async move {
                let notification = match api.fetch_image(&filename).await {
                    Ok(bytes) => match save_download(&dir, &filename, &bytes).await {
                        Ok(path) => Notification::success(TITLE_DOWNLOADED, format!("Saved {}", path.display())),
                        Err(e) => Notification::error(TITLE_ERROR, format!("Failed to save {}: {}", filename, e)),
                    },
                    Err(e) => {
                        log::warn!("Image {} unavailable: {}", filename, e);
                        Notification::error(TITLE_ERROR, format!("❌ Image not found: {}", filename))
                    }
                };
                let _ = tx.send(Action::Notify(notification));
            });
    }

    fn submit_issue(&mut self) -> Action {
        if !self.form.validate() {
            self.ctx.logger.log("Report form: validation failed".to_string());
            return Action::None;
        }
        if !self.activate(Control::Submit) {
            return Action::None;
        }

        let issue = self.form.new_issue();
        let images = self.form.staged_files();
        let api = Arc::clone(&self.ctx.api);
        self.ctx
            .logger
            .log(format!("Submitting issue for '{}' with {} image(s)", issue.project, images.len()));

        self.task_manager.spawn("Submit issue", move |tx| async move {
            let result = api.create_issue(&issue, &images).await;
            let _ = tx.send(Action::HideDialog);
            let action = match result {
                Ok(report_id) => Action::IssueSubmitted(report_id),
                Err(e) if e.is_rejection() => Action::Notify(Notification::error(
                    TITLE_SUBMIT_ERROR,
                    e.user_message(ERROR_SUBMIT_REJECTED, ERROR_SUBMIT_REJECTED),
                )),
                Err(e) => {
                    log::warn!("Submitting issue failed: {}", e);
                    Action::Notify(Notification::error(TITLE_CONNECTION_ERROR, ERROR_SUBMIT_CONNECTION))
                }
            };
            let _ = tx.send(action);
        });

        Action::ShowDialog(DialogType::Loading {
            title: SUBMITTING_TITLE.to_string(),
            text: SUBMITTING_TEXT.to_string(),
        })
    }

    fn spawn_export(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        let dir = self.ctx.download_dir.clone();
        self.task_manager.spawn("Export issues", move |tx| async move {
            let notification = match api.export().await {
                Ok(bytes) => {
                    let filename = export_filename(chrono::Utc::now());
                    match save_download(&dir, &filename, &bytes).await {
                        Ok(path) => Notification::success(
                            TITLE_EXPORT_SUCCESS,
                            format!("{}: {}", SUCCESS_EXPORT, path.display()),
                        ),
                        Err(e) => {
                            log::warn!("Saving export failed: {}", e);
                            Notification::error(TITLE_ERROR, ERROR_EXPORT_FAILED)
                        }
                    }
                }
                Err(e) => {
                    log::warn!("Export failed: {}", e);
                    Notification::error(TITLE_ERROR, ERROR_EXPORT_FAILED)
                }
            };
            let _ = tx.send(Action::Notify(notification));
        });
    }

    fn spawn_print(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        self.task_manager.spawn("Print issues", move |tx| async move {
            let notification = match api.print().await {
                Ok(total) => Notification::success(TITLE_PRINTED, format!("Printed {} issues to console", total)),
                Err(e) => {
                    log::warn!("Print failed: {}", e);
                    Notification::error(TITLE_ERROR, ERROR_PRINT_FAILED)
                }
            };
            let _ = tx.send(Action::Notify(notification));
        });
    }

    fn spawn_reset(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        self.ctx.logger.log("Resetting all data".to_string());
        self.task_manager.spawn("Reset data", move |tx| async move {
            match api.reset().await {
                Ok(()) => {
                    let _ = tx.send(Action::Notify(Notification::success(TITLE_RESET, SUCCESS_RESET)));
                    let _ = tx.send(Action::ScheduleReload);
                }
                Err(e) => {
                    let message = e.user_message(ERROR_RESET_FAILED, ERROR_RESET_FAILED);
                    let _ = tx.send(Action::Notify(Notification::error(TITLE_ERROR, message)));
                }
            }
        });
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            self.ctx.logger.log(format!("Background: Received action {:?}", action));
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            self.ctx.logger.log(format!(
                "Background: Cleaned up {} finished tasks",
                completed_tasks.len()
            ));
        }

        actions
    }

    /// Periodic housekeeping; returns true when the screen needs a redraw
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let expired = self.notifications.expire(now);
        self.guard.prune(now);
        self.sync_component_data();
        // Toast countdowns and dimmed controls change every tick
        expired || self.notifications.is_visible() || self.is_busy()
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.notifications.is_modal() {
                    self.notifications.handle_key_events(key)
                } else if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else {
                    let component_action = match self.view {
                        View::Dashboard => {
                            let list_action = self.issue_list.handle_key_events(key);
                            if matches!(list_action, Action::None) {
                                self.filter_bar.handle_key_events(key)
                            } else {
                                list_action
                            }
                        }
                        View::ReportForm => self.form.handle_key_events(key),
                    };
                    if matches!(component_action, Action::None) {
                        self.handle_global_key(key)
                    } else {
                        component_action
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.process_action(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.notifications.update(action);
        let action = self.issue_list.update(action);
        self.form.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.view == View::Dashboard);

        StatsHeader::render(f, areas.stats, self.filters.stats());
        match self.view {
            View::Dashboard => {
                self.filter_bar.render(f, areas.filters);
                self.issue_list.render(f, areas.body);
            }
            View::ReportForm => self.form.render(f, areas.body),
        }

        let base_url = self.ctx.api.base_url().to_string();
        StatusBar::render(
            f,
            areas.status,
            &StatusInfo {
                view: self.view,
                active_tasks: self.task_manager.task_count(),
                base_url: &base_url,
            },
        );

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
        if self.notifications.is_visible() {
            self.notifications.render(f, rect);
        }
    }
}
