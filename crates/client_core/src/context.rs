use std::sync::Arc;

use anyhow::{Context, Result};
use shared::domain::Language;
use storage::Storage;

use crate::{
    language::LanguageStore,
    preferences::{PreferenceBackend, PreferenceStore, LANGUAGE_KEY, THEME_KEY},
    theme::ThemeStore,
};

/// Stores shared by every screen, constructed once at startup and passed to
/// consumers by reference.
pub struct AppContext {
    preferences: Arc<PreferenceStore>,
    pub theme: ThemeStore,
    pub language: LanguageStore,
}

impl AppContext {
    pub async fn open(database_url: &str, default_language: Language) -> Result<Self> {
        let storage = Storage::new(database_url)
            .await
            .context("failed to open preference storage")?;
        Ok(Self::bootstrap(Arc::new(storage), default_language).await)
    }

    /// Warms the preference cache and brings both stores to `Ready`.
    pub async fn bootstrap(
        backend: Arc<dyn PreferenceBackend>,
        default_language: Language,
    ) -> Self {
        let preferences = Arc::new(PreferenceStore::open(backend));
        preferences.load(&[THEME_KEY, LANGUAGE_KEY]).await;

        let mut theme = ThemeStore::new(Arc::clone(&preferences));
        let mut language = LanguageStore::with_default(Arc::clone(&preferences), default_language);
        theme.load().await;
        language.load().await;
        tracing::info!(
            dark_mode = theme.dark_mode(),
            language = %language.language(),
            "app context ready"
        );

        Self {
            preferences,
            theme,
            language,
        }
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Waits for queued preference writes; call before shutting down.
    pub async fn flush(&self) {
        self.preferences.flush().await;
    }
}
