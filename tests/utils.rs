use chrono::{TimeZone, Utc};
use techflow::utils::datetime::{export_filename, file_timestamp};
use techflow::utils::downloads::save_download;

#[test]
fn test_file_timestamp_is_filesystem_safe() {
    let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 1).unwrap();
    let stamp = file_timestamp(now);
    assert_eq!(stamp, "2025-12-31T23-59-01");
    assert!(!stamp.contains(':'));
}

#[test]
fn test_export_filename() {
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(export_filename(now), "issue_export_2024-01-02T03-04-05.xlsx");
}

#[tokio::test]
async fn test_save_download_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("downloads");

    let path = save_download(&target, "report.xlsx", b"xlsx-bytes").await.unwrap();
    assert_eq!(path, target.join("report.xlsx"));
    assert_eq!(std::fs::read(&path).unwrap(), b"xlsx-bytes");
}

#[tokio::test]
async fn test_save_download_uses_only_file_name() {
    let dir = tempfile::tempdir().unwrap();

    let path = save_download(dir.path(), "../../etc/evil.jpg", b"img").await.unwrap();
    assert_eq!(path, dir.path().join("evil.jpg"));
    assert!(path.exists());

    assert!(save_download(dir.path(), "..", b"img").await.is_err());
}
