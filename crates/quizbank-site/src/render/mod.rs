//! Server-side HTML rendering.
//!
//! Every page goes through [`layout`], which adds the stylesheet, the
//! theme toggle and the client script. All text from the data files is
//! escaped here; only rendered answer markdown is inserted raw.

pub mod admin;
pub mod components;
pub mod home;
pub mod search;
pub mod topic;

use std::borrow::Cow;

use crate::assets::{SCRIPT_PATH, STYLESHEET_PATH};
use crate::theme::Theme;

/// What every page needs besides its body.
#[derive(Debug, Clone, Copy)]
pub struct Shell<'a> {
    pub theme: Theme,
    /// Document title.
    pub title: &'a str,
    /// Path (with query) the theme toggle returns to.
    pub return_to: &'a str,
}

/// Escape text content.
pub fn esc(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape a double-quoted attribute value.
pub fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Wrap `body` in the document skeleton.
pub fn layout(shell: &Shell<'_>, body: &str) -> String {
    let toggle_label = match shell.theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="{class}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{STYLESHEET_PATH}">
</head>
<body>
<form class="theme-toggle" method="post" action="/theme">
<input type="hidden" name="return_to" value="{return_to}">
<button type="submit" title="Toggle theme">{toggle_label}</button>
</form>
{body}
<script src="{SCRIPT_PATH}"></script>
</body>
</html>
"#,
        class = shell.theme.html_class(),
        title = esc(shell.title),
        return_to = attr(shell.return_to),
    )
}

/// The 404 page.
pub fn not_found_page() -> String {
    error_page("404", "This page could not be found.")
}

/// A minimal error page.
pub fn error_page(heading: &str, message: &str) -> String {
    let shell = Shell {
        theme: Theme::default(),
        title: heading,
        return_to: "/",
    };
    let body = format!(
        r#"<main>
<h1>{}</h1>
<p class="muted">{}</p>
<p><a href="/">&larr; Back to topics</a></p>
</main>"#,
        esc(heading),
        esc(message)
    );
    layout(&shell, &body)
}
