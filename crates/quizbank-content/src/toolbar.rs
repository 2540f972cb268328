//! Markdown toolbar actions.
//!
//! Each action wraps the current selection of the answer text in a
//! markdown prefix/suffix pair. Offsets are counted in characters
//! (Unicode scalar values) and are clamped to the text.

use serde::{Deserialize, Serialize};

/// Text after an edit, with the selection to restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub value: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkdownAction {
    Bold,
    Italic,
    Heading,
    List,
    InlineCode,
    CodeBlock,
    Link,
}

impl MarkdownAction {
    /// All actions in toolbar order.
    pub const ALL: [MarkdownAction; 7] = [
        MarkdownAction::Bold,
        MarkdownAction::Italic,
        MarkdownAction::Heading,
        MarkdownAction::List,
        MarkdownAction::InlineCode,
        MarkdownAction::CodeBlock,
        MarkdownAction::Link,
    ];

    /// Markdown inserted before and after the selection.
    pub fn wrappers(&self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Heading => ("## ", ""),
            Self::List => ("- ", ""),
            Self::InlineCode => ("`", "`"),
            Self::CodeBlock => ("```\n", "\n```"),
            Self::Link => ("[", "](url)"),
        }
    }

    /// Button tooltip.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Heading => "Heading 2",
            Self::List => "List",
            Self::InlineCode => "Inline Code",
            Self::CodeBlock => "Code Block",
            Self::Link => "Link",
        }
    }

    /// Wrap `value[start..end]` and shift the selection past the prefix.
    pub fn apply(&self, value: &str, start: usize, end: usize) -> TextEdit {
        let (prefix, suffix) = self.wrappers();
        let (start, end) = clamp_selection(value, start, end);
        let selected: String = value.chars().skip(start).take(end - start).collect();
        let replacement = format!("{prefix}{selected}{suffix}");
        let shift = prefix.chars().count();

        TextEdit {
            value: splice(value, start, end, &replacement),
            selection_start: start + shift,
            selection_end: end + shift,
        }
    }
}

/// Clamp a selection to `value` and order its ends.
pub fn clamp_selection(value: &str, start: usize, end: usize) -> (usize, usize) {
    let len = value.chars().count();
    let start = start.min(len);
    let end = end.min(len);
    if start <= end { (start, end) } else { (end, start) }
}

/// Replace the characters `start..end` of `value` with `insert`.
///
/// `start` and `end` must already be clamped.
pub fn splice(value: &str, start: usize, end: usize, insert: &str) -> String {
    let byte_at = |n: usize| {
        value
            .char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(value.len())
    };
    let (a, b) = (byte_at(start), byte_at(end));
    let mut out = String::with_capacity(value.len() - (b - a) + insert.len());
    out.push_str(&value[..a]);
    out.push_str(insert);
    out.push_str(&value[b..]);
    out
}
