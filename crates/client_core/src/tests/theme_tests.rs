use super::*;
use storage::Storage;

async fn open_store(database_url: &str) -> Arc<PreferenceStore> {
    let storage = Storage::new(database_url).await.expect("db");
    Arc::new(PreferenceStore::open(Arc::new(storage)))
}

#[tokio::test]
async fn defaults_to_light_until_loaded() {
    let mut theme = ThemeStore::new(open_store("sqlite::memory:").await);
    assert_eq!(theme.state(), LoadState::Uninitialized);
    assert!(!theme.dark_mode());

    theme.load().await;
    assert_eq!(theme.state(), LoadState::Ready);
    assert!(!theme.dark_mode());
}

#[tokio::test]
async fn dark_mode_survives_store_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = format!(
        "sqlite://{}",
        dir.path().join("prefs.db").to_string_lossy().replace('\\', "/")
    );

    let mut theme = ThemeStore::new(open_store(&database_url).await);
    theme.load().await;
    let pending = theme.set_dark_mode(true);
    assert!(theme.dark_mode());
    assert!(pending.settled().await);
    drop(theme);

    let mut reloaded = ThemeStore::new(open_store(&database_url).await);
    reloaded.load().await;
    assert!(reloaded.dark_mode());
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn toggle_flips_current_mode() {
    let mut theme = ThemeStore::new(open_store("sqlite::memory:").await);
    theme.load().await;

    assert!(theme.toggle().settled().await);
    assert!(theme.dark_mode());
    assert!(theme.toggle().settled().await);
    assert!(!theme.dark_mode());
}
