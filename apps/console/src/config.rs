use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use shared::domain::Language;
use tracing::warn;

pub const SETTINGS_FILE: &str = "printbandhan.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub log_filter: String,
    pub otp_delay_ms: u64,
    pub default_language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/printbandhan.db".into(),
            log_filter: "info".into(),
            otp_delay_ms: 1500,
            default_language: Language::En,
        }
    }
}

impl Settings {
    pub fn otp_delay(&self) -> Duration {
        Duration::from_millis(self.otp_delay_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
    log_filter: Option<String>,
    otp_delay_ms: Option<u64>,
    default_language: Option<String>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then the settings file if present, then environment overrides.
pub fn load_settings_from(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if file.exists() {
        let raw = fs::read_to_string(file)
            .with_context(|| format!("failed to read settings file '{}'", file.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", file.display()))?;

        if let Some(v) = file_cfg.database_url {
            settings.database_url = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
        if let Some(v) = file_cfg.otp_delay_ms {
            settings.otp_delay_ms = v;
        }
        if let Some(v) = file_cfg.default_language {
            settings.default_language = v
                .parse()
                .with_context(|| format!("invalid default_language in '{}'", file.display()))?;
        }
    }

    if let Some(v) = env("PRINTBANDHAN_DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__DATABASE_URL") {
        settings.database_url = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__OTP_DELAY_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.otp_delay_ms = parsed,
            Err(_) => warn!(value = %v, "ignoring invalid APP__OTP_DELAY_MS"),
        }
    }
    if let Some(v) = env("APP__DEFAULT_LANGUAGE") {
        match v.parse::<Language>() {
            Ok(parsed) => settings.default_language = parsed,
            Err(err) => warn!(%err, "ignoring APP__DEFAULT_LANGUAGE"),
        }
    }

    settings.database_url = normalize_database_url(&settings.database_url);
    Ok(settings)
}

/// Accepts bare file paths and `sqlite:` URLs and returns a `sqlite://` URL.
pub fn normalize_database_url(raw_database_url: &str) -> String {
    let raw_database_url = raw_database_url.trim();

    if raw_database_url.is_empty() {
        return Settings::default().database_url;
    }

    if raw_database_url.starts_with("sqlite::memory:") || raw_database_url.contains("://") {
        return raw_database_url.to_string();
    }

    if let Some(path) = raw_database_url.strip_prefix("sqlite:") {
        return format!("sqlite://{}", path.replace('\\', "/"));
    }

    format!("sqlite://{}", raw_database_url.replace('\\', "/"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
