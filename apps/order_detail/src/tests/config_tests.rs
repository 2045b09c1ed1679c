use super::{apply_env_overrides, apply_file_overrides, normalize_base_url, Settings};

use std::{collections::HashMap, path::PathBuf};

#[test]
fn normalizes_base_url_with_trailing_slash() {
    assert_eq!(
        normalize_base_url("https://shop.test/store"),
        "https://shop.test/store/"
    );
    assert_eq!(normalize_base_url(" https://shop.test/ "), "https://shop.test/");
}

#[test]
fn empty_base_url_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), Settings::default().base_url);
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
base_url = "https://shop.test"
cookie = "csrftoken=abc"
page_path = "pages/1024.toml"
"#,
    );

    assert_eq!(settings.base_url, "https://shop.test");
    assert_eq!(settings.cookie, "csrftoken=abc");
    assert_eq!(settings.page_path, PathBuf::from("pages/1024.toml"));
}

#[test]
fn malformed_file_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "base_url = [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_plain_names() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("ORDER_DETAIL_BASE_URL", "https://plain.test"),
        ("APP__BASE_URL", "https://app.test"),
        ("ORDER_DETAIL_COOKIE", "csrftoken=plain"),
        ("APP__PAGE_PATH", "/tmp/page.toml"),
    ]);
    let mut settings = Settings::default();

    apply_env_overrides(&mut settings, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.base_url, "https://app.test");
    assert_eq!(settings.cookie, "csrftoken=plain");
    assert_eq!(settings.page_path, PathBuf::from("/tmp/page.toml"));
}
