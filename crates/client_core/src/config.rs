use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "x_sentiment.toml";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub backend_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
        }
    }
}

impl ClientSettings {
    pub fn with_backend_url(mut self, backend_url: impl Into<String>) -> Result<Self> {
        self.backend_url = validate_backend_url(&backend_url.into())?;
        Ok(self)
    }
}

/// Defaults, then `x_sentiment.toml` in the working directory, then the
/// `SENTIMENT_BACKEND_URL` / `APP__BACKEND_URL` environment variables.
pub fn load_settings() -> Result<ClientSettings> {
    load_settings_with(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_with(
    file: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(file) {
        settings = toml::from_str::<ClientSettings>(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", file.display()))?;
    }

    if let Some(v) = env("SENTIMENT_BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Some(v) = env("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    settings.backend_url = validate_backend_url(&settings.backend_url)?;
    Ok(settings)
}

fn validate_backend_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed =
        Url::parse(trimmed).with_context(|| format!("invalid backend url '{trimmed}'"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(anyhow!(
            "unsupported backend url scheme '{other}' (expected http or https)"
        )),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
