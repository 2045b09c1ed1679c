use std::{collections::HashMap, fs, path::PathBuf};

use tracing::warn;

const SETTINGS_FILE: &str = "order_detail.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    /// `document.cookie`-style string the CSRF token is read from.
    pub cookie: String,
    pub page_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".into(),
            cookie: String::new(),
            page_path: PathBuf::from("order_page.toml"),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings.base_url = normalize_base_url(&settings.base_url);
    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, file = SETTINGS_FILE, "ignoring malformed settings file");
            return;
        }
    };
    if let Some(v) = file_cfg.get("base_url") {
        settings.base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("cookie") {
        settings.cookie = v.clone();
    }
    if let Some(v) = file_cfg.get("page_path") {
        settings.page_path = PathBuf::from(v);
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ORDER_DETAIL_BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = lookup("APP__BASE_URL") {
        settings.base_url = v;
    }

    if let Some(v) = lookup("ORDER_DETAIL_COOKIE") {
        settings.cookie = v;
    }
    if let Some(v) = lookup("APP__COOKIE") {
        settings.cookie = v;
    }

    if let Some(v) = lookup("APP__PAGE_PATH") {
        settings.page_path = PathBuf::from(v);
    }
}

/// Trailing slash keeps any path prefix when endpoint paths are appended.
pub fn normalize_base_url(raw_base_url: &str) -> String {
    let raw_base_url = raw_base_url.trim();
    if raw_base_url.is_empty() {
        return Settings::default().base_url;
    }
    if raw_base_url.ends_with('/') {
        raw_base_url.to_string()
    } else {
        format!("{raw_base_url}/")
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
