//! CSRF token lookup for state-changing requests.

use std::borrow::Cow;

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_COOKIE: &str = "csrftoken";

pub trait CsrfTokenProvider: Send + Sync {
    fn csrf_token(&self) -> Option<String>;
}

/// Reads a cookie value out of a `document.cookie`-style string.
///
/// The first `name=` entry wins. Values are percent-decoded; `+` is kept as-is.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(Cow::into_owned)
}

/// Token sourced from a cookie string, looked up on every request.
#[derive(Debug, Clone)]
pub struct CookieTokenProvider {
    cookies: String,
    name: String,
}

impl CookieTokenProvider {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self::with_cookie_name(cookies, CSRF_COOKIE)
    }

    pub fn with_cookie_name(cookies: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
            name: name.into(),
        }
    }
}

impl CsrfTokenProvider for CookieTokenProvider {
    fn csrf_token(&self) -> Option<String> {
        get_cookie(&self.cookies, &self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider(pub Option<String>);

impl CsrfTokenProvider for StaticTokenProvider {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}
