//! End-to-end behavior of the application component against an in-memory gateway.

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use techflow::api::{ApiError, IssueApi, UpdateKind, UpdateRequest};
use techflow::dispatcher::{ActionDispatcher, Prompt};
use techflow::issues::{HistoryEntry, IssueRecord, IssueStatus, NewIssue};
use techflow::logger::Logger;
use techflow::notification::Severity;
use techflow::ui::core::{AppContext, DialogType, EventType, View};
use techflow::ui::AppComponent;
use techflow::upload::StagedFile;

/// How one fake endpoint answers
#[derive(Clone, Copy)]
enum Outcome {
    Ok,
    Rejected(&'static str),
    Transport,
    Status(u16),
}

impl Outcome {
    fn check(self) -> Result<(), ApiError> {
        match self {
            Outcome::Ok => Ok(()),
            Outcome::Rejected(text) => Err(ApiError::Rejected(Some(text.to_string()))),
            Outcome::Transport => Err(ApiError::Transport("connection refused".to_string())),
            Outcome::Status(code) => Err(ApiError::Status(code)),
        }
    }
}

struct FakeApi {
    base_url: reqwest::Url,
    issues: Vec<IssueRecord>,
    list: Outcome,
    create: Outcome,
    update: Outcome,
    history: Outcome,
    export: Outcome,
    list_calls: AtomicUsize,
    print_calls: AtomicUsize,
    updates: Mutex<Vec<UpdateRequest>>,
    created: Mutex<Vec<(NewIssue, usize)>>,
}

impl FakeApi {
    fn new(issues: Vec<IssueRecord>) -> Self {
        Self {
            base_url: reqwest::Url::parse("http://localhost:5000").unwrap(),
            issues,
            list: Outcome::Ok,
            create: Outcome::Ok,
            update: Outcome::Ok,
            history: Outcome::Ok,
            export: Outcome::Ok,
            list_calls: AtomicUsize::new(0),
            print_calls: AtomicUsize::new(0),
            updates: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
        }
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueApi for FakeApi {
    async fn list_issues(&self) -> Result<Vec<IssueRecord>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list.check()?;
        Ok(self.issues.clone())
    }

    async fn create_issue(&self, issue: &NewIssue, images: &[StagedFile]) -> Result<String, ApiError> {
        self.create.check()?;
        self.created.lock().unwrap().push((issue.clone(), images.len()));
        Ok("42".to_string())
    }

    async fn update_issue(&self, request: &UpdateRequest) -> Result<(), ApiError> {
        self.updates.lock().unwrap().push(request.clone());
        self.update.check()
    }

    async fn history(&self, issue_id: i64) -> Result<Vec<HistoryEntry>, ApiError> {
        self.history.check()?;
        if issue_id == 1 {
            Ok(vec![HistoryEntry {
                timestamp: Some("2024-05-01 10:00:00".to_string()),
                action: "Created".to_string(),
                description: "Issue reported".to_string(),
                performed_by: "Jane".to_string(),
            }])
        } else {
            Ok(Vec::new())
        }
    }

    async fn export(&self) -> Result<Vec<u8>, ApiError> {
        self.export.check()?;
        Ok(b"spreadsheet".to_vec())
    }

    async fn print(&self) -> Result<u64, ApiError> {
        self.print_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.issues.len() as u64)
    }

    async fn reset(&self) -> Result<(), ApiError> {
        Err(ApiError::Rejected(Some("Reset disabled".to_string())))
    }

    async fn fetch_image(&self, _filename: &str) -> Result<Vec<u8>, ApiError> {
        Err(ApiError::Status(404))
    }

    fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }
}

fn record(id: i64, status: IssueStatus, images: &str) -> IssueRecord {
    IssueRecord {
        report_id: id,
        name: format!("Reporter {id}"),
        phone: "+15550000000".to_string(),
        email: "reporter@example.com".to_string(),
        project: if id % 2 == 0 { "Stadium" } else { "Mall Garage" }.to_string(),
        description: "Barrier stuck".to_string(),
        status,
        priority: None,
        tech_level: None,
        images: images.to_string(),
        created_at: None,
        resolution_notes: None,
    }
}

fn sample_issues() -> Vec<IssueRecord> {
    vec![
        record(1, IssueStatus::Pending, "gate.jpg, cam.png"),
        record(2, IssueStatus::InProgress, ""),
        record(3, IssueStatus::Completed, " , "),
    ]
}

fn app_with(api: Arc<FakeApi>, download_dir: &std::path::Path) -> AppComponent {
    let ctx = AppContext::new(
        api,
        ActionDispatcher::new("Technical Team"),
        download_dir.to_path_buf(),
        Logger::new(),
    );
    AppComponent::new(ctx)
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn pump(app: &mut AppComponent) {
    for action in app.process_background_actions() {
        app.process_action(action);
    }
}

/// Feed background results back into the app until `done` holds
async fn settle(app: &mut AppComponent, done: impl Fn(&AppComponent) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        pump(app);
        if done(app) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("background work did not settle");
}

/// Keep feeding background results for `duration`
async fn run_for(app: &mut AppComponent, duration: Duration) {
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        pump(app);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    pump(app);
}

fn fill_report_form(app: &mut AppComponent) {
    for value in ["Jane", "+1 555 123 4567", "jane@example.com", "Gate 3", "Barrier stuck"] {
        type_text(app, value);
        press(app, KeyCode::Tab);
    }
}

fn ctrl(c: char) -> EventType {
    EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

async fn loaded_app(api: Arc<FakeApi>, dir: &std::path::Path) -> AppComponent {
    let mut app = app_with(api, dir);
    app.trigger_initial_load();
    settle(&mut app, |app| app.filters().total() > 0).await;
    app
}

#[tokio::test]
async fn test_initial_load_and_filter_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    assert_eq!(app.filters().summary(), "Showing 3 of 3 issues");
    assert_eq!(app.filters().stats().pending, 1);

    press(&mut app, KeyCode::Char('S'));
    assert_eq!(app.filters().criteria().status, Some(IssueStatus::Pending));
    assert_eq!(app.filters().summary(), "Showing 1 of 3 issues");

    press(&mut app, KeyCode::Char('C'));
    assert!(app.filters().criteria().is_empty());
}

#[tokio::test]
async fn test_live_search_through_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('/'));
    assert!(matches!(app.current_dialog(), Some(DialogType::Search { .. })));

    type_text(&mut app, "stadium");
    assert_eq!(app.filters().filtered_len(), 1);

    press(&mut app, KeyCode::Enter);
    assert!(app.current_dialog().is_none());
    assert_eq!(app.filters().criteria().search.as_deref(), Some("stadium"));
}

#[tokio::test]
async fn test_load_failure_shows_modal_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(Vec::new());
    api.list = Outcome::Transport;
    let mut app = app_with(Arc::new(api), dir.path());

    app.trigger_initial_load();
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.body, "Failed to load issues");

    // Modal errors capture input until dismissed
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Esc);
    assert!(app.current_notification().is_none());
}

#[tokio::test]
async fn test_start_issue_flow() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(FakeApi::new(sample_issues()));
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;

    press(&mut app, KeyCode::Char('s'));
    assert!(matches!(
        app.current_dialog(),
        Some(DialogType::Prompt(Prompt::ConfirmStart { issue_id: 1 }))
    ));

    press(&mut app, KeyCode::Char('y'));
    assert!(app.current_dialog().is_none());
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let updates = api.updates.lock().unwrap().clone();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].issue_id, 1);
    assert_eq!(updates[0].kind, UpdateKind::Start);
    assert_eq!(app.current_notification().unwrap().body, "Update completed successfully");
}

#[tokio::test]
async fn test_repeated_dispatch_is_soft_guarded() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('p'));
    assert!(app.current_dialog().is_some());
    press(&mut app, KeyCode::Esc);
    assert!(app.current_dialog().is_none());

    press(&mut app, KeyCode::Char('p'));
    assert!(app.current_dialog().is_none());

    // A different action on the same issue is not guarded
    press(&mut app, KeyCode::Char('t'));
    assert!(matches!(
        app.current_dialog(),
        Some(DialogType::Prompt(Prompt::ChooseTechLevel { issue_id: 1 }))
    ));
}

#[tokio::test]
async fn test_history_dialog_and_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('v'));
    settle(&mut app, |app| app.current_dialog().is_some()).await;
    assert!(matches!(app.current_dialog(), Some(DialogType::History { issue_id: 1, entries }) if entries.len() == 1));
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('v'));
    settle(&mut app, |app| app.current_notification().is_some()).await;
    let notification = app.current_notification().unwrap();
    assert_eq!(notification.title, "No History");
    assert_eq!(notification.severity, Severity::Info);
}

#[tokio::test]
async fn test_images_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('i'));
    match app.current_dialog() {
        Some(DialogType::Images { issue_id, links }) => {
            assert_eq!(*issue_id, 1);
            assert_eq!(links.len(), 2);
            assert_eq!(links[1].url, "http://localhost:5000/static/uploads/cam.png");
        }
        other => panic!("unexpected dialog: {other:?}"),
    }

    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| app.current_notification().is_some()).await;
    assert_eq!(app.current_notification().unwrap().body, "❌ Image not found: gate.jpg");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.current_notification().unwrap().body, "No images attached to this issue");

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.current_notification().unwrap().body, "No valid images found for this issue");
}

#[tokio::test]
async fn test_report_submission() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(FakeApi::new(sample_issues()));
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;
    let ctrl_s = ctrl('s');

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.view(), View::ReportForm);

    // Invalid form: nothing is sent
    app.handle_event(ctrl_s.clone());
    assert!(app.current_dialog().is_none());
    assert!(api.created.lock().unwrap().is_empty());

    fill_report_form(&mut app);
    app.handle_event(ctrl_s);
    assert!(matches!(app.current_dialog(), Some(DialogType::Loading { .. })));

    settle(&mut app, |app| app.view() == View::Dashboard).await;
    assert!(app.current_dialog().is_none());
    assert_eq!(
        app.current_notification().unwrap().body,
        "Your issue has been reported with ID: 42"
    );

    let created = api.created.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0.project, "Gate 3");
    assert_eq!(created[0].1, 0);
}

#[tokio::test]
async fn test_export_saves_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('e'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.title, "Export Successful!");
    assert!(notification.body.starts_with("Excel file has been saved: "));

    let saved: Vec<_> = std::fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(saved.len(), 1);
    let name = saved[0].to_string_lossy().into_owned();
    assert!(name.starts_with("issue_export_") && name.ends_with(".xlsx"));
}

#[tokio::test]
async fn test_print_and_rejected_reset() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = loaded_app(Arc::new(FakeApi::new(sample_issues())), dir.path()).await;

    press(&mut app, KeyCode::Char('o'));
    settle(&mut app, |app| app.current_notification().is_some()).await;
    assert_eq!(app.current_notification().unwrap().body, "Printed 3 issues to console");

    press(&mut app, KeyCode::Char('R'));
    assert!(matches!(app.current_dialog(), Some(DialogType::ResetConfirmation)));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, |app| {
        app.current_notification().is_some_and(|n| n.severity == Severity::Error)
    })
    .await;
    assert_eq!(app.current_notification().unwrap().body, "Reset disabled");
}

#[tokio::test]
async fn test_quit_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(Arc::new(FakeApi::new(Vec::new())), dir.path());

    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());

    app.handle_event(ctrl('c'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_successful_update_refreshes_after_delay() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(FakeApi::new(sample_issues()));
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;
    assert_eq!(api.list_calls(), 1);

    let started = Instant::now();
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, |app| app.current_notification().is_some()).await;
    assert_eq!(api.list_calls(), 1);

    settle(&mut app, |_| api.list_calls() == 2).await;
    assert!(started.elapsed() >= Duration::from_millis(1400));
    assert_eq!(app.filters().total(), 3);
}

#[tokio::test]
async fn test_rejected_update_shows_server_text_and_skips_refresh() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.update = Outcome::Rejected("Issue not found");
    let api = Arc::new(api);
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.body, "Issue not found");

    run_for(&mut app, Duration::from_millis(1800)).await;
    assert_eq!(api.list_calls(), 1);
    assert_eq!(api.updates.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_transport_failure_uses_generic_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.update = Outcome::Transport;
    let mut app = loaded_app(Arc::new(api), dir.path()).await;

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.body, "Failed to update issue");
}

#[tokio::test]
async fn test_failed_export_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.export = Outcome::Status(500);
    let mut app = loaded_app(Arc::new(api), dir.path()).await;

    press(&mut app, KeyCode::Char('e'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.body, "Failed to export data");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_history_failure_shows_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.history = Outcome::Transport;
    let mut app = loaded_app(Arc::new(api), dir.path()).await;

    press(&mut app, KeyCode::Char('v'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    assert_eq!(app.current_notification().unwrap().body, "Failed to load history");
    assert!(app.current_dialog().is_none());
}

#[tokio::test]
async fn test_rejected_submission_keeps_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.create = Outcome::Rejected("Project is closed");
    let api = Arc::new(api);
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;

    press(&mut app, KeyCode::Char('n'));
    fill_report_form(&mut app);
    app.handle_event(ctrl('s'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.title, "❌ Error");
    assert_eq!(notification.body, "Project is closed");
    assert!(app.current_dialog().is_none());
    assert_eq!(app.view(), View::ReportForm);
    assert_eq!(app.form().value("project"), "Gate 3");
    assert_eq!(app.form().value("description"), "Barrier stuck");
    assert!(api.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submission_connection_error_keeps_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut api = FakeApi::new(sample_issues());
    api.create = Outcome::Transport;
    let mut app = loaded_app(Arc::new(api), dir.path()).await;

    press(&mut app, KeyCode::Char('n'));
    fill_report_form(&mut app);
    app.handle_event(ctrl('s'));
    settle(&mut app, |app| app.current_notification().is_some()).await;

    let notification = app.current_notification().unwrap();
    assert_eq!(notification.title, "❌ Connection Error");
    assert_eq!(
        notification.body,
        "Failed to submit issue. Please check your connection and try again."
    );
    assert_eq!(app.view(), View::ReportForm);
    assert_eq!(app.form().value("name"), "Jane");
}

#[tokio::test]
async fn test_data_operations_are_not_guarded() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(FakeApi::new(sample_issues()));
    let mut app = loaded_app(Arc::clone(&api), dir.path()).await;

    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('o'));
    settle(&mut app, |_| api.print_calls.load(Ordering::SeqCst) == 2).await;
}
