use std::sync::Arc;

use shared::domain::ThemeMode;

use crate::preferences::{
    LoadState, PendingWrite, PreferenceCell, PreferenceStore, PreferenceValue, THEME_KEY,
};

impl PreferenceValue for ThemeMode {
    const KEY: &'static str = THEME_KEY;

    fn encode(self) -> &'static str {
        self.as_str()
    }

    fn decode(raw: &str) -> Option<Self> {
        ThemeMode::parse(raw)
    }
}

/// Dark-mode flag persisted under `app_theme`. Light until `load` resolves.
pub struct ThemeStore {
    cell: PreferenceCell<ThemeMode>,
}

impl ThemeStore {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self {
            cell: PreferenceCell::new(store, ThemeMode::Light),
        }
    }

    pub async fn load(&mut self) -> ThemeMode {
        self.cell.load().await
    }

    pub fn state(&self) -> LoadState {
        self.cell.state()
    }

    pub fn mode(&self) -> ThemeMode {
        self.cell.get()
    }

    pub fn dark_mode(&self) -> bool {
        self.cell.get().is_dark()
    }

    pub fn set_dark_mode(&mut self, dark: bool) -> PendingWrite {
        tracing::debug!(dark, "theme changed");
        self.cell.set(ThemeMode::from_dark(dark))
    }

    pub fn toggle(&mut self) -> PendingWrite {
        let dark = !self.dark_mode();
        self.set_dark_mode(dark)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
