//! Fragments shared by the topic and search pages.

use std::fmt::Write;

use quizbank_content::{Difficulty, Question};
use quizbank_query::{DifficultyFilter, Filter, Page, TagFilter};

use super::{attr, esc};

/// Query string for `filter` at `page`, including the leading `?`.
///
/// Unrestricted criteria are left out; page 1 is left out too.
pub fn query_string(filter: &Filter, page: usize) -> String {
    let mut params = Vec::new();
    if !filter.query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(&filter.query)));
    }
    if let DifficultyFilter::Only(d) = filter.difficulty {
        params.push(format!("difficulty={d}"));
    }
    if let TagFilter::Only(tag) = &filter.tag {
        params.push(format!("tag={}", urlencoding::encode(tag)));
    }
    if page > 1 {
        params.push(format!("page={page}"));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

pub fn difficulty_badge(difficulty: Difficulty) -> String {
    format!(r#"<span class="badge badge-difficulty">{difficulty}</span>"#)
}

pub fn tag_badges(question: &Question) -> String {
    question
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="badge">{}</span>"#, esc(tag)))
        .collect()
}

/// Button copying `text` to the clipboard.
pub fn copy_button(text: &str) -> String {
    format!(
        r#"<button type="button" class="btn" data-copy="{}" aria-label="Copy answer to clipboard">Copy</button>"#,
        attr(text)
    )
}

/// The filter form. Submitting it drops the page parameter, which
/// returns the reader to page 1.
pub fn filter_form(action: &str, placeholder: &str, filter: &Filter, tags: &[String]) -> String {
    let mut html = format!(
        r#"<form class="filters" method="get" action="{}">
<input type="search" name="q" value="{}" placeholder="{}">
<select name="difficulty">
<option value="All">All Difficulties</option>
"#,
        attr(action),
        attr(&filter.query),
        attr(placeholder)
    );
    for d in Difficulty::ALL {
        let selected = if filter.difficulty == DifficultyFilter::Only(d) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(html, r#"<option value="{d}"{selected}>{d}</option>"#);
    }
    html.push_str("</select>\n<select name=\"tag\">\n<option value=\"All\">All Tags</option>\n");
    for tag in tags {
        let selected = match &filter.tag {
            TagFilter::Only(t) if t == tag => " selected",
            _ => "",
        };
        let _ = writeln!(
            html,
            r#"<option value="{}"{selected}>{}</option>"#,
            attr(tag),
            esc(tag)
        );
    }
    html.push_str("</select>\n<button type=\"submit\" class=\"btn\">Filter</button>\n</form>\n");
    html
}

/// Previous/next controls, or nothing when everything fits on one page.
/// Links keep the active filters.
pub fn pager<T>(path: &str, filter: &Filter, page: &Page<'_, T>) -> String {
    if !page.show_controls() {
        return String::new();
    }
    let previous = if page.has_previous() {
        format!(
            r#"<a class="btn" rel="prev" href="{}{}">&larr; Previous</a>"#,
            attr(path),
            attr(&query_string(filter, page.number - 1))
        )
    } else {
        r#"<button class="btn" disabled>&larr; Previous</button>"#.to_string()
    };
    let next = if page.has_next() {
        format!(
            r#"<a class="btn" rel="next" href="{}{}">Next &rarr;</a>"#,
            attr(path),
            attr(&query_string(filter, page.number + 1))
        )
    } else {
        r#"<button class="btn" disabled>Next &rarr;</button>"#.to_string()
    };
    format!(
        r#"<nav class="pager">{previous}<span class="muted">Page {} of {}</span>{next}</nav>
"#,
        page.number, page.total_pages
    )
}
