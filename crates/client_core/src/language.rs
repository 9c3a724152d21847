use std::sync::Arc;

use shared::domain::Language;

use crate::{
    i18n::{self, TranslationKey},
    preferences::{
        LoadState, PendingWrite, PreferenceCell, PreferenceStore, PreferenceValue, LANGUAGE_KEY,
    },
};

impl PreferenceValue for Language {
    const KEY: &'static str = LANGUAGE_KEY;

    fn encode(self) -> &'static str {
        self.code()
    }

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Active UI language persisted under `app_language`, plus string lookup
/// against the active table.
pub struct LanguageStore {
    cell: PreferenceCell<Language>,
}

impl LanguageStore {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self::with_default(store, Language::En)
    }

    /// `default` applies until a stored language is loaded.
    pub fn with_default(store: Arc<PreferenceStore>, default: Language) -> Self {
        Self {
            cell: PreferenceCell::new(store, default),
        }
    }

    pub async fn load(&mut self) -> Language {
        self.cell.load().await
    }

    pub fn state(&self) -> LoadState {
        self.cell.state()
    }

    pub fn language(&self) -> Language {
        self.cell.get()
    }

    pub fn set_language(&mut self, language: Language) -> PendingWrite {
        tracing::debug!(%language, "language changed");
        self.cell.set(language)
    }

    pub fn text(&self, key: TranslationKey) -> &'static str {
        i18n::translate(self.language(), key)
    }

    pub fn t(&self, path: &str) -> String {
        i18n::lookup_path(self.language(), path)
    }
}

#[cfg(test)]
#[path = "tests/language_tests.rs"]
mod tests;
