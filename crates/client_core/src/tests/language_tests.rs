use super::*;
use storage::Storage;

async fn open_store() -> Arc<PreferenceStore> {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    Arc::new(PreferenceStore::open(Arc::new(storage)))
}

#[tokio::test]
async fn defaults_to_english() {
    let mut language = LanguageStore::new(open_store().await);
    assert_eq!(language.load().await, Language::En);
    assert_eq!(language.state(), LoadState::Ready);
    assert_eq!(language.t("common.next"), "Next");
}

#[tokio::test]
async fn switching_language_changes_lookups_and_persists() {
    let store = open_store().await;
    let mut language = LanguageStore::new(Arc::clone(&store));
    language.load().await;

    assert!(language.set_language(Language::Hi).settled().await);
    assert_eq!(language.text(TranslationKey::Next), "आगे");
    assert_eq!(language.t("settings.darkMode"), "डार्क मोड");

    let mut reloaded = LanguageStore::new(store);
    assert_eq!(reloaded.load().await, Language::Hi);
}

#[tokio::test]
async fn missing_path_returns_the_path() {
    let mut language = LanguageStore::new(open_store().await);
    language.load().await;

    assert_eq!(language.t("no.such.key"), "no.such.key");
    assert_eq!(language.t("orders"), "orders");
    assert_eq!(language.t(""), "");
}

#[tokio::test]
async fn configured_default_applies_when_nothing_stored() {
    let mut language = LanguageStore::with_default(open_store().await, Language::Hi);
    assert_eq!(language.load().await, Language::Hi);
}
