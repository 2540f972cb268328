//! Answer markdown to HTML.
//!
//! Answers are GitHub-flavoured markdown. Single newlines are significant
//! (rendered as `<br />`), and fenced code blocks get a header with the
//! language name and a copy button. Raw HTML in an answer is shown as
//! text, never passed through, and link targets are limited to safe
//! protocols.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Label shown on code blocks without a language.
const PLAIN_CODE_LABEL: &str = "text";

const SAFE_PROTOCOLS: &[&str] = &["http", "https", "mailto", "irc", "ircs", "xmpp"];

fn gfm_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Render answer markdown to an HTML fragment.
///
/// # Example
///
/// ```
/// use quizbank_content::render_markdown;
///
/// let html = render_markdown("line one\nline two");
/// assert!(html.contains("line one<br />"));
/// ```
pub fn render_markdown(source: &str) -> String {
    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in Parser::new_ext(source, gfm_options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((language, String::new()));
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((language, body)) = code.take() {
                    events.push(Event::Html(CowStr::from(code_block_html(&language, &body))));
                }
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, body)) = code.as_mut() {
                    body.push_str(&text);
                }
            }
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
            Event::Start(Tag::HtmlBlock) => events.push(Event::Start(Tag::Paragraph)),
            Event::End(TagEnd::HtmlBlock) => events.push(Event::End(TagEnd::Paragraph)),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Link {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => events.push(Event::Start(Tag::Image {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            })),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Keep relative URLs and those with a whitelisted protocol; anything else
/// (`javascript:`, `data:`) becomes an empty target.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme_end = url.find(':');
    let path_start = url.find(['/', '?', '#']);
    let is_relative = match (scheme_end, path_start) {
        (None, _) => true,
        (Some(colon), Some(path)) => path < colon,
        (Some(_), None) => false,
    };
    let allowed = is_relative
        || scheme_end.is_some_and(|colon| {
            SAFE_PROTOCOLS
                .iter()
                .any(|p| url[..colon].eq_ignore_ascii_case(p))
        });
    if allowed { url } else { CowStr::from("") }
}

fn code_block_html(language: &str, body: &str) -> String {
    let label = if language.is_empty() {
        PLAIN_CODE_LABEL
    } else {
        language
    };
    let label = html_escape::encode_text(label);
    let code = html_escape::encode_text(body.strip_suffix('\n').unwrap_or(body));
    let class = if language.is_empty() {
        String::new()
    } else {
        format!(
            " class=\"language-{}\"",
            html_escape::encode_double_quoted_attribute(language)
        )
    };

    format!(
        "<div class=\"code-block\">\
         <div class=\"code-header\"><span class=\"code-lang\">{label}</span>\
         <button type=\"button\" class=\"copy-code\">Copy code</button></div>\
         <pre><code{class}>{code}</code></pre></div>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(render_markdown("Hello"), "<p>Hello</p>\n");
    }

    #[test]
    fn test_soft_breaks_become_hard() {
        let html = render_markdown("first\nsecond");
        assert!(html.contains("first<br />\nsecond"), "{html}");
    }

    #[test]
    fn test_fenced_code_block_chrome() {
        let html = render_markdown("```rust\nfn main() { let x = a < b; }\n```\n");
        assert!(html.contains("<span class=\"code-lang\">rust</span>"));
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("a &lt; b"));
        assert!(html.contains("Copy code"));
        assert!(html.contains("}</code>"), "trailing newline trimmed: {html}");
    }

    #[test]
    fn test_code_block_without_language() {
        let html = render_markdown("```\nplain\n```\n");
        assert!(html.contains("<span class=\"code-lang\">text</span>"));
        assert!(html.contains("<pre><code>plain</code></pre>"));
    }

    #[test]
    fn test_indented_code_block() {
        let html = render_markdown("para\n\n    indented\n");
        assert!(html.contains("<pre><code>indented</code></pre>"));
    }

    #[test]
    fn test_gfm_table_and_strikethrough() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_inline_code_escaped() {
        let html = render_markdown("use `Vec<T>` here");
        assert!(html.contains("<code>Vec&lt;T&gt;</code>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown(
            "Use a <div> wrapper.\n\n<script>alert(1)</script>\n\n<img src=x onerror=alert(2)>",
        );
        assert!(html.contains("Use a &lt;div&gt; wrapper."), "{html}");
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{html}");
        assert!(html.contains("&lt;img src=x onerror=alert(2)&gt;"), "{html}");
        assert!(!html.contains("<script"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<div>"));
    }

    #[test]
    fn test_unsafe_link_targets_dropped() {
        let html = render_markdown("[a](javascript:alert(1)) [b](https://x.dev/p) [c](/t/rust#q)");
        assert!(!html.contains("javascript:"), "{html}");
        assert!(html.contains("href=\"https://x.dev/p\""));
        assert!(html.contains("href=\"/t/rust#q\""));
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(render_markdown(""), "");
    }
}
