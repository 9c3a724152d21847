use super::*;

fn temp_database_url(dir: &tempfile::TempDir, name: &str) -> String {
    let db_path = dir.path().join("nested").join(name);
    format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"))
}

#[tokio::test]
async fn health_check_succeeds_for_live_pool() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.health_check().await.expect("health check");
}

#[tokio::test]
async fn missing_preference_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let value = storage.get_preference("app_theme").await.expect("read");
    assert_eq!(value, None);
}

#[tokio::test]
async fn set_preference_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage
        .set_preference("app_theme", "light")
        .await
        .expect("first write");
    storage
        .set_preference("app_theme", "dark")
        .await
        .expect("second write");

    let value = storage.get_preference("app_theme").await.expect("read");
    assert_eq!(value.as_deref(), Some("dark"));

    let all = storage.list_preferences().await.expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].key, "app_theme");
}

#[tokio::test]
async fn delete_preference_reports_whether_row_existed() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage
        .set_preference("app_language", "hi")
        .await
        .expect("write");

    assert!(storage.delete_preference("app_language").await.expect("delete"));
    assert!(!storage.delete_preference("app_language").await.expect("delete"));
    assert_eq!(
        storage.get_preference("app_language").await.expect("read"),
        None
    );
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = temp_database_url(&dir, "prefs.db");

    let storage = Storage::new(&database_url).await.expect("db");
    drop(storage);

    assert!(dir.path().join("nested").join("prefs.db").exists());
}

#[tokio::test]
async fn preferences_survive_reopening_the_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = temp_database_url(&dir, "prefs.db");

    let storage = Storage::new(&database_url).await.expect("db");
    storage
        .set_preference("app_language", "hi")
        .await
        .expect("write");
    storage.pool().close().await;

    let reopened = Storage::new(&database_url).await.expect("reopen");
    assert_eq!(
        reopened
            .get_preference("app_language")
            .await
            .expect("read")
            .as_deref(),
        Some("hi")
    );
}

#[test]
fn memory_url_has_no_filesystem_path() {
    assert_eq!(sqlite_path("sqlite::memory:"), None);
    assert_eq!(
        sqlite_path("sqlite://./data/prefs.db?mode=rwc"),
        Some(PathBuf::from("./data/prefs.db"))
    );
}
