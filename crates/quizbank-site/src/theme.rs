//! Light/dark theme preference, kept in a cookie.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Cookie holding the preference.
pub const THEME_COOKIE: &str = "app-theme";

/// One year, in seconds.
const COOKIE_MAX_AGE: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the preference from a request's `Cookie` headers. Anything
    /// other than `dark` means light.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let dark = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| name == THEME_COOKIE && value == "dark");
        if dark { Self::Dark } else { Self::Light }
    }

    /// `Set-Cookie` value storing this theme.
    pub fn set_cookie(&self) -> String {
        format!(
            "{THEME_COOKIE}={}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax",
            self.as_str()
        )
    }

    /// Class for the `<html>` element.
    pub fn html_class(&self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        map
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::from_headers(&HeaderMap::new()), Theme::Light);
    }

    #[test]
    fn test_reads_dark_among_other_cookies() {
        assert_eq!(
            Theme::from_headers(&headers("session=abc; app-theme=dark")),
            Theme::Dark
        );
        assert_eq!(
            Theme::from_headers(&headers("app-theme=purple")),
            Theme::Light
        );
    }

    #[test]
    fn test_toggle_and_cookie() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.set_cookie().starts_with("app-theme=dark; Path=/"));
        assert_eq!(Theme::Dark.html_class(), "dark");
    }
}
