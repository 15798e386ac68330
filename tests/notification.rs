use std::time::{Duration, Instant};
use techflow::notification::{Notification, Severity};

#[test]
fn test_errors_need_confirmation() {
    let error = Notification::error("Error", "Failed to load issues");
    assert_eq!(error.severity, Severity::Error);
    assert!(error.requires_confirmation());
    assert!(error.auto_dismiss_after().is_none());
    assert!(error.progress_at(Instant::now()).is_none());
    assert!(!error.is_expired_at(error.shown_at + Duration::from_secs(3600)));
}

#[test]
fn test_other_severities_auto_dismiss() {
    for notification in [
        Notification::success("Success!", "done"),
        Notification::warning("Careful", "almost"),
        Notification::info("No History", "nothing"),
    ] {
        assert!(!notification.requires_confirmation());
        assert_eq!(notification.auto_dismiss_after(), Some(Duration::from_secs(3)));
    }
}

#[test]
fn test_expiry_and_progress() {
    let notification = Notification::success("Success!", "Update completed successfully");
    let start = notification.shown_at;

    assert!(!notification.is_expired_at(start));
    assert_eq!(notification.progress_at(start), Some(1.0));

    let halfway = notification.progress_at(start + Duration::from_millis(1500)).unwrap();
    assert!((halfway - 0.5).abs() < 1e-9);

    assert!(notification.is_expired_at(start + Duration::from_secs(3)));
    assert_eq!(notification.progress_at(start + Duration::from_secs(10)), Some(0.0));
}
