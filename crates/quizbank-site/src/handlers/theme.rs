//! Theme toggle.

use axum::Form;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect};
use serde::Deserialize;

use crate::theme::Theme;

#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub return_to: String,
}

/// Only same-site paths are followed.
fn safe_return(target: &str) -> &str {
    if target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') {
        target
    } else {
        "/"
    }
}

/// `POST /theme`: flip the theme cookie and go back.
pub async fn toggle(headers: HeaderMap, Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let next = Theme::from_headers(&headers).toggled();
    (
        [(SET_COOKIE, next.set_cookie())],
        Redirect::to(safe_return(&form.return_to)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return() {
        assert_eq!(safe_return("/t/rust?q=x"), "/t/rust?q=x");
        assert_eq!(safe_return(""), "/");
        assert_eq!(safe_return("//evil.example"), "/");
        assert_eq!(safe_return("https://evil.example"), "/");
        assert_eq!(safe_return("/\\evil.example"), "/");
    }
}
