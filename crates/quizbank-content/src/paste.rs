//! Clipboard HTML to Markdown.
//!
//! Rich text pasted into the answer editor is converted with `htmd`
//! (ATX headings, fenced code, `---` rules, `-` bullets) plus handlers for
//! the GitHub-flavoured parts `htmd` leaves out: pipe tables, `~~`
//! strikethrough and task-list checkboxes. `<pre>` blocks become a fenced
//! block holding the element's text content, labelled with the language
//! from a `language-<name>` class on the `<pre>` (or, failing that, on a
//! nested `<code>`).

use std::rc::Rc;
use std::sync::LazyLock;

use htmd::options::{
    BulletListMarker, CodeBlockFence, CodeBlockStyle, HeadingStyle, HrStyle, Options,
};
use htmd::{Element, HtmlToMarkdown};
use log::debug;
use markup5ever_rcdom::{Node, NodeData};
use quizbank_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::toolbar::{TextEdit, clamp_selection, splice};

static LANGUAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"language-(\w+)").expect("valid regex"));

/// What the browser put on the clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipboard {
    /// `text/html` flavour, if any.
    #[serde(default)]
    pub html: Option<String>,
    /// `text/plain` flavour.
    #[serde(default)]
    pub text: String,
}

/// HTML to Markdown converter for the answer editor.
pub struct PasteConverter {
    converter: HtmlToMarkdown,
}

impl Default for PasteConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasteConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasteConverter").finish_non_exhaustive()
    }
}

impl PasteConverter {
    pub fn new() -> Self {
        let converter = HtmlToMarkdown::builder()
            .options(Options {
                heading_style: HeadingStyle::Atx,
                hr_style: HrStyle::Dashes,
                bullet_list_marker: BulletListMarker::Dash,
                code_block_style: CodeBlockStyle::Fenced,
                code_block_fence: CodeBlockFence::Backticks,
                ..Default::default()
            })
            .add_handler(vec!["pre"], pre_handler)
            .add_handler(vec!["del", "s", "strike"], strikethrough_handler)
            .add_handler(vec!["input"], checkbox_handler)
            .add_handler(vec!["table"], table_handler)
            .add_handler(vec!["tr"], row_handler)
            .add_handler(vec!["th", "td"], cell_handler)
            .build();
        Self { converter }
    }

    /// Convert an HTML fragment to Markdown.
    pub fn convert(&self, html: &str) -> Result<String> {
        let markdown = self
            .converter
            .convert(html)
            .map_err(|e| Error::conversion(e.to_string()))?;
        debug!(
            "Converted {} bytes of pasted HTML to {} bytes of markdown",
            html.len(),
            markdown.len()
        );
        Ok(markdown.trim().to_string())
    }

    /// Apply a paste to `value`, replacing the selection `start..end`.
    ///
    /// HTML is converted to Markdown; without HTML the plain text is
    /// inserted as-is. The returned selection is a collapsed cursor just
    /// after the inserted text.
    pub fn paste(
        &self,
        value: &str,
        start: usize,
        end: usize,
        clipboard: &Clipboard,
    ) -> Result<TextEdit> {
        let inserted = match clipboard.html.as_deref() {
            Some(html) if !html.is_empty() => self.convert(html)?,
            _ => clipboard.text.clone(),
        };
        let (start, end) = clamp_selection(value, start, end);
        let cursor = start + inserted.chars().count();

        Ok(TextEdit {
            value: splice(value, start, end, &inserted),
            selection_start: cursor,
            selection_end: cursor,
        })
    }
}

// ============================================================================
// Element handlers
// ============================================================================

fn pre_handler(element: Element) -> Option<String> {
    let node = element.node;
    let language = class_language(node)
        .or_else(|| find_descendant(node, "code").and_then(|code| class_language(&code)))
        .unwrap_or_default();
    let mut text = String::new();
    text_content(node, &mut text);
    let text = text.strip_suffix('\n').unwrap_or(&text);
    Some(format!("\n\n```{language}\n{text}\n```\n\n"))
}

fn strikethrough_handler(element: Element) -> Option<String> {
    let content = element.content;
    let inner = content.trim();
    if inner.is_empty() {
        return None;
    }
    let leading = &content[..content.len() - content.trim_start().len()];
    let trailing = &content[content.trim_end().len()..];
    Some(format!("{leading}~~{inner}~~{trailing}"))
}

fn checkbox_handler(element: Element) -> Option<String> {
    let is_checkbox = element
        .attrs
        .iter()
        .any(|a| &*a.name.local == "type" && a.value.eq_ignore_ascii_case("checkbox"));
    if !is_checkbox {
        return Some(element.content.to_string());
    }
    let checked = element.attrs.iter().any(|a| &*a.name.local == "checked");
    Some(if checked { "[x] " } else { "[ ] " }.to_string())
}

fn table_handler(element: Element) -> Option<String> {
    let rows: Vec<&str> = element
        .content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if rows.is_empty() {
        return None;
    }
    Some(format!("\n\n{}\n\n", rows.join("\n")))
}

fn row_handler(element: Element) -> Option<String> {
    let row = element.content.trim();
    if !is_heading_row(element.node) {
        return Some(format!("\n{row}\n"));
    }
    let columns = element
        .node
        .children
        .borrow()
        .iter()
        .filter(|c| is_cell(c))
        .count()
        .max(1);
    Some(format!("\n{row}\n|{}\n", " --- |".repeat(columns)))
}

fn cell_handler(element: Element) -> Option<String> {
    let content = element.content.replace('\n', " ");
    let content = content.trim().replace('|', "\\|");
    if cell_index(element.node) == 0 {
        Some(format!("| {content} |"))
    } else {
        Some(format!(" {content} |"))
    }
}

// ============================================================================
// DOM helpers
// ============================================================================

fn tag_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn is_cell(node: &Node) -> bool {
    matches!(tag_name(node), Some("th" | "td"))
}

fn parent(node: &Node) -> Option<Rc<Node>> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

fn class_language(node: &Node) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    let attrs = attrs.borrow();
    let class = attrs.iter().find(|a| &*a.name.local == "class")?;
    LANGUAGE_CLASS
        .captures(&class.value)
        .map(|c| c[1].to_string())
}

fn find_descendant(node: &Node, tag: &str) -> Option<Rc<Node>> {
    node.children.borrow().iter().find_map(|child| {
        if tag_name(child) == Some(tag) {
            Some(Rc::clone(child))
        } else {
            find_descendant(child, tag)
        }
    })
}

fn text_content(node: &Node, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        text_content(child, out);
    }
}

fn cell_index(cell: &Rc<Node>) -> usize {
    let Some(row) = parent(cell) else {
        return 0;
    };
    row.children
        .borrow()
        .iter()
        .take_while(|c| !Rc::ptr_eq(*c, cell))
        .filter(|c| is_cell(c))
        .count()
}

/// A row is the header row when it sits in `<thead>`, or when it is the
/// first row of a table that has no `<thead>`.
fn is_heading_row(row: &Rc<Node>) -> bool {
    let Some(section) = parent(row) else {
        return false;
    };
    match tag_name(&section) {
        Some("thead") => true,
        Some("table") => is_first_row(&section, row),
        Some("tbody" | "tfoot") => parent(&section).is_some_and(|table| is_first_row(&table, row)),
        _ => false,
    }
}

fn is_first_row(table: &Node, row: &Rc<Node>) -> bool {
    let children = table.children.borrow();
    if children.iter().any(|c| tag_name(c) == Some("thead")) {
        return false;
    }
    let first = children.iter().find_map(|c| match tag_name(c) {
        Some("tr") => Some(Rc::clone(c)),
        Some("tbody" | "tfoot") => {
            let rows = c.children.borrow();
            rows.iter().find(|r| tag_name(r) == Some("tr")).cloned()
        }
        _ => None,
    });
    first.is_some_and(|first| Rc::ptr_eq(&first, row))
}
