//! The admin editor page.

use std::fmt::Write;

use quizbank_content::{Difficulty, EditorSession, MarkdownAction, Question, Topic, render_markdown};

use super::{Shell, attr, esc, layout};

/// Generic message shown when a save fails.
pub const SAVE_FAILED: &str = "Failed to save data";

/// Outcome banner shown after a redirect back to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    SaveFailed,
    Unchanged,
}

impl Notice {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::SaveFailed => "failed",
            Self::Unchanged => "unchanged",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "saved" => Some(Self::Saved),
            "failed" => Some(Self::SaveFailed),
            "unchanged" => Some(Self::Unchanged),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Saved => "Changes saved successfully!".to_string(),
            Self::SaveFailed => format!("Failed to save changes: {SAVE_FAILED}"),
            Self::Unchanged => "No unsaved changes to save.".to_string(),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::SaveFailed => "notice notice-error",
            _ => "notice",
        }
    }
}

/// Path of a question's form endpoint.
pub fn question_path(id: &str) -> String {
    format!("/admin/questions/{}", urlencoding::encode(id))
}

pub fn admin_page(
    shell: &Shell<'_>,
    topics: &[Topic],
    session: Option<&EditorSession>,
    notice: Option<Notice>,
) -> String {
    let selected = session.map(EditorSession::slug);
    let mut options = String::new();
    for topic in topics {
        let mark = if Some(topic.slug.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            options,
            r#"<option value="{}"{mark}>{}</option>"#,
            attr(&topic.slug),
            esc(&topic.name)
        );
    }

    let banner = notice
        .map(|n| format!("<p class=\"{}\" role=\"alert\">{}</p>\n", n.class(), esc(&n.message())))
        .unwrap_or_default();

    let draft = match session {
        Some(session) => format!(
            "<form method=\"post\" action=\"/admin/save\" data-draft>\n{}{}</form>\n",
            action_bar(session),
            questions_html(session)
        ),
        None => "<p class=\"empty\">No topic selected.</p>\n".to_string(),
    };

    let body = format!(
        r#"<main>
<header>
<a href="/">&larr; Back to site</a>
<h1>Admin Panel</h1>
<form method="get" action="/admin" class="filters">
<select name="topic">
{options}</select>
<button type="submit" class="btn">Open</button>
<a class="btn" href="/admin/backup" title="Download JSON backup">Backup</a>
</form>
</header>
{banner}{draft}</main>"#
    );
    layout(shell, &body)
}

fn questions_html(session: &EditorSession) -> String {
    session
        .draft()
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| question_editor(i + 1, q, session.is_previewing(&q.id)))
        .collect()
}

fn question_editor(number: usize, question: &Question, previewing: bool) -> String {
    let id = &question.id;
    let field = format!("answer-{number}");

    let mut difficulty = String::new();
    for d in Difficulty::ALL {
        let mark = if d == question.difficulty {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(difficulty, r#"<option value="{d}"{mark}>{d}</option>"#);
    }

    let answer = if previewing {
        format!(
            "<div class=\"answer\">{}</div>\n",
            render_markdown(&question.a)
        )
    } else {
        let buttons: String = MarkdownAction::ALL
            .iter()
            .map(|action| {
                format!(
                    r#"<button type="button" class="btn" data-action="{}" data-target="{field}" title="{}">{}</button>"#,
                    action_param(*action),
                    action.title(),
                    action.title()
                )
            })
            .collect();
        format!(
            r#"<div class="toolbar">{buttons}</div>
<textarea id="{field}" name="{name}" rows="10" data-paste>{}</textarea>
"#,
            esc(&question.a),
            name = attr(&field_name("a", id)),
        )
    };
    let preview_label = if previewing { "Edit" } else { "Preview" };

    format!(
        r#"<section class="card">
<div class="card-title"><span class="index">{number}</span>
<button type="submit" class="btn btn-danger" formaction="{delete}" data-confirm="Are you sure you want to delete this question?" title="Delete Question">Delete</button></div>
<div class="field"><label>Question</label>
<textarea name="{q_name}" rows="3">{q}</textarea></div>
<div class="field"><label>Difficulty</label>
<select name="{difficulty_name}">
{difficulty}</select></div>
<div class="field"><label>Tags (comma separated)</label>
<input type="text" name="{tags_name}" value="{tags}"></div>
<div class="field"><label>Answer (Markdown)</label>
{answer}</div>
<div class="meta">
<button type="submit" class="btn" formaction="/admin/apply" name="preview" value="{preview}">{preview_label}</button>
</div>
</section>
"#,
        delete = attr(&format!("{}/delete", question_path(id))),
        q_name = attr(&field_name("q", id)),
        difficulty_name = attr(&field_name("difficulty", id)),
        tags_name = attr(&field_name("tags", id)),
        preview = attr(id),
        q = esc(&question.q),
        tags = attr(&question.tags.join(", ")),
    )
}

/// Form field name of one question's field, such as `q[<id>]`.
fn field_name(field: &str, id: &str) -> String {
    format!("{field}[{id}]")
}

fn action_param(action: MarkdownAction) -> &'static str {
    match action {
        MarkdownAction::Bold => "bold",
        MarkdownAction::Italic => "italic",
        MarkdownAction::Heading => "heading",
        MarkdownAction::List => "list",
        MarkdownAction::InlineCode => "inline_code",
        MarkdownAction::CodeBlock => "code_block",
        MarkdownAction::Link => "link",
    }
}

/// Save comes first so pressing Enter in a field saves rather than
/// deleting the first question.
fn action_bar(session: &EditorSession) -> String {
    let unsaved = session.has_unsaved_changes();
    let status = if unsaved { "Unsaved changes" } else { "" };
    let disabled = if unsaved { "" } else { " disabled" };
    format!(
        r#"<div class="admin-bar">
<span class="muted" data-status>{status}</span>
<button type="submit" class="btn btn-primary" data-save{disabled}>Save Changes</button>
<button type="submit" class="btn" formaction="/admin/questions">Add Question</button>
</div>
"#
    )
}
