//! Admin editor and save API.
//!
//! The editor keeps one shared draft in [`SiteState::editor`]. The editor
//! page is a single form; each of its buttons posts every question's fields
//! to its own action, which applies them to the draft before acting and
//! redirects back to `/admin`. Nothing touches disk until `POST /admin/save`.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use quizbank_content::{
    Clipboard, Difficulty, EditorSession, MarkdownAction, PasteConverter, Question, QuestionUpdate,
    TextEdit, TopicData, TopicSource, parse_tags,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{SiteError, SiteResult};
use crate::render::Shell;
use crate::render::admin::{Notice, SAVE_FAILED, admin_page};
use crate::state::SiteState;
use crate::theme::Theme;

const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Default, Deserialize)]
pub struct AdminParams {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
}

/// `GET /admin`: show the draft, opening the requested (or first) topic.
pub async fn editor(
    State(state): State<SiteState>,
    Query(params): Query<AdminParams>,
    uri: Uri,
    headers: HeaderMap,
) -> Html<String> {
    let store = state.store();
    let topics = store.topics_or_empty().await;
    let mut editor = state.editor().lock().await;

    let current = editor.as_ref().map(|s| s.slug().to_string());
    let wanted = params
        .topic
        .filter(|t| !t.is_empty())
        .or_else(|| current.clone())
        .or_else(|| topics.first().map(|t| t.slug.clone()));

    if let Some(slug) = wanted
        && current.as_deref() != Some(slug.as_str())
    {
        *editor = open_session(store, &slug).await;
    }

    let shell = Shell {
        theme: Theme::from_headers(&headers),
        title: "Admin Panel",
        return_to: uri.path_and_query().map_or(ADMIN_PATH, |pq| pq.as_str()),
    };
    let notice = params.notice.as_deref().and_then(Notice::from_param);
    Html(admin_page(&shell, &topics, editor.as_ref(), notice))
}

async fn open_session(store: &dyn TopicSource, slug: &str) -> Option<EditorSession> {
    match EditorSession::open(store, slug).await {
        Ok(session) => {
            info!(slug, questions = session.draft().questions.len(), "opened topic for editing");
            Some(session)
        }
        Err(e) => {
            warn!("Failed to load data for {slug}: {e}");
            None
        }
    }
}

// ============================================================================
// Draft form
// ============================================================================

/// Fields posted for one question. A field is absent when the page did not
/// render it (the answer while its preview is shown).
#[derive(Debug, Default)]
struct QuestionFields {
    q: Option<String>,
    difficulty: Option<String>,
    tags: Option<String>,
    a: Option<String>,
}

impl QuestionFields {
    fn updates(&self, current: &Question) -> SiteResult<Vec<QuestionUpdate>> {
        let mut updates = Vec::new();
        if let Some(q) = &self.q
            && *q != current.q
        {
            updates.push(QuestionUpdate::Question(q.clone()));
        }
        if let Some(raw) = &self.difficulty {
            let difficulty: Difficulty = raw
                .parse()
                .map_err(|_| SiteError::bad_request(format!("unknown difficulty: {raw}")))?;
            if difficulty != current.difficulty {
                updates.push(QuestionUpdate::Difficulty(difficulty));
            }
        }
        if let Some(raw) = &self.tags {
            let tags = parse_tags(raw);
            if tags != current.tags {
                updates.push(QuestionUpdate::Tags(tags));
            }
        }
        if let Some(a) = &self.a
            && *a != current.a
        {
            updates.push(QuestionUpdate::Answer(a.clone()));
        }
        Ok(updates)
    }
}

/// The editor form: every question's fields, keyed `q[<id>]`,
/// `difficulty[<id>]`, `tags[<id>]` and `a[<id>]`, plus an optional
/// `preview=<id>` naming the question whose preview flips.
///
/// Every button on the editor page submits this form, so edits typed but
/// not yet applied reach the draft before the button's own action runs.
#[derive(Debug, Default)]
pub struct DraftForm {
    questions: HashMap<String, QuestionFields>,
    preview: Option<String>,
}

impl DraftForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            if key == "preview" {
                form.preview = Some(value);
                continue;
            }
            let Some((field, id)) = key
                .split_once('[')
                .and_then(|(field, rest)| Some((field, rest.strip_suffix(']')?)))
            else {
                continue;
            };
            // Browsers submit textarea line breaks as CRLF.
            let value = value.replace("\r\n", "\n");
            let fields = form.questions.entry(id.to_string()).or_default();
            match field {
                "q" => fields.q = Some(value),
                "difficulty" => fields.difficulty = Some(value),
                "tags" => fields.tags = Some(value),
                "a" => fields.a = Some(value),
                _ => {}
            }
        }
        form
    }

    /// Copy the posted fields into the draft. Nothing is changed when any
    /// field is invalid. Fields for questions no longer in the draft are
    /// ignored.
    pub fn apply(self, session: &mut EditorSession) -> SiteResult<()> {
        let mut pending = Vec::new();
        for (id, fields) in &self.questions {
            if let Some(current) = session.draft().question(id) {
                pending.push((id, fields.updates(current)?));
            }
        }
        for (id, updates) in pending {
            for update in updates {
                session.update_question(id, update);
            }
        }
        if let Some(id) = &self.preview {
            session.toggle_preview(id);
        }
        Ok(())
    }
}

// ============================================================================
// Draft actions
// ============================================================================

/// `POST /admin/apply`: apply the form (and a preview toggle) to the draft.
pub async fn apply(
    State(state): State<SiteState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> SiteResult<Redirect> {
    if let Some(session) = state.editor().lock().await.as_mut() {
        DraftForm::from_pairs(pairs).apply(session)?;
    }
    Ok(Redirect::to(ADMIN_PATH))
}

/// `POST /admin/questions`: append a placeholder question.
pub async fn add_question(
    State(state): State<SiteState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> SiteResult<Redirect> {
    if let Some(session) = state.editor().lock().await.as_mut() {
        DraftForm::from_pairs(pairs).apply(session)?;
        let id = session.add_question();
        info!(slug = session.slug(), id = %id, "added question");
    }
    Ok(Redirect::to(ADMIN_PATH))
}

/// `POST /admin/questions/{id}/delete`
pub async fn delete_question(
    State(state): State<SiteState>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> SiteResult<Redirect> {
    if let Some(session) = state.editor().lock().await.as_mut() {
        DraftForm::from_pairs(pairs).apply(session)?;
        if session.delete_question(&id) {
            info!(slug = session.slug(), id = %id, "deleted question");
        }
    }
    Ok(Redirect::to(ADMIN_PATH))
}

/// `POST /admin/save`: apply the form, write the draft and drop the
/// affected cached pages.
pub async fn save(
    State(state): State<SiteState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> SiteResult<Redirect> {
    let mut editor = state.editor().lock().await;
    let Some(session) = editor.as_mut() else {
        return Ok(Redirect::to(ADMIN_PATH));
    };
    DraftForm::from_pairs(pairs).apply(session)?;

    let notice = if !session.has_unsaved_changes() {
        Notice::Unchanged
    } else {
        match session.save(state.store()).await {
            Ok(()) => {
                state.invalidate_topic(session.slug());
                Notice::Saved
            }
            Err(_) => Notice::SaveFailed,
        }
    };
    Ok(Redirect::to(&format!("{ADMIN_PATH}?notice={}", notice.as_param())))
}

/// `GET /admin/backup`: the draft as a JSON download.
pub async fn backup(State(state): State<SiteState>) -> SiteResult<Response> {
    let editor = state.editor().lock().await;
    let session = editor
        .as_ref()
        .ok_or_else(|| SiteError::not_found("no topic open"))?;
    let json = session.backup_json()?;
    let disposition = format!("attachment; filename=\"{}\"", session.backup_file_name());
    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        json,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
pub struct ToolbarRequest {
    pub action: MarkdownAction,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub selection_start: usize,
    #[serde(default)]
    pub selection_end: usize,
}

/// `POST /admin/toolbar`: wrap the selection in markdown.
pub async fn toolbar(Json(req): Json<ToolbarRequest>) -> Json<TextEdit> {
    Json(
        req.action
            .apply(&req.value, req.selection_start, req.selection_end),
    )
}

#[derive(Debug, Deserialize)]
pub struct PasteRequest {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub selection_start: usize,
    #[serde(default)]
    pub selection_end: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasteResponse {
    pub value: String,
    pub cursor: usize,
}

/// `POST /admin/paste`: convert clipboard HTML and splice it in. If the
/// HTML cannot be converted the plain text is used instead.
pub async fn paste(Json(req): Json<PasteRequest>) -> SiteResult<Json<PasteResponse>> {
    let edit = convert_paste(req)?;
    Ok(Json(PasteResponse {
        value: edit.value,
        cursor: edit.selection_end,
    }))
}

fn convert_paste(req: PasteRequest) -> quizbank_core::Result<TextEdit> {
    let converter = PasteConverter::new();
    let clipboard = Clipboard {
        html: req.html,
        text: req.text,
    };
    match converter.paste(&req.value, req.selection_start, req.selection_end, &clipboard) {
        Ok(edit) => Ok(edit),
        Err(e) => {
            warn!("Falling back to plain text paste: {e}");
            let plain = Clipboard {
                html: None,
                text: clipboard.text,
            };
            converter.paste(&req.value, req.selection_start, req.selection_end, &plain)
        }
    }
}

/// Body of `PUT /api/topics/{slug}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `PUT /api/topics/{slug}`: overwrite a topic file wholesale.
pub async fn save_topic(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    Json(data): Json<TopicData>,
) -> (StatusCode, Json<SaveResponse>) {
    match state.store().save_topic(&slug, &data).await {
        Ok(()) => {
            state.invalidate_topic(&slug);
            (
                StatusCode::OK,
                Json(SaveResponse {
                    success: true,
                    error: None,
                }),
            )
        }
        Err(e) => {
            warn!("Error saving topic data for {slug}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SaveResponse {
                    success: false,
                    error: Some(SAVE_FAILED.to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(
            "go",
            TopicData {
                slug: "go".into(),
                questions: vec![Question {
                    id: "g1".into(),
                    q: "What is a goroutine?".into(),
                    a: "A green thread.".into(),
                    difficulty: Difficulty::Medium,
                    tags: vec!["concurrency".into()],
                }],
            },
        )
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_draft_form_applies_changed_fields() {
        let mut s = session();
        let form = DraftForm::from_pairs(pairs(&[
            ("q[g1]", "What is a channel?"),
            ("difficulty[g1]", "Hard"),
            ("tags[g1]", "concurrency, , sync"),
            ("a[g1]", "line one\r\nline two"),
        ]));
        form.apply(&mut s).unwrap();

        let q = s.draft().question("g1").unwrap();
        assert_eq!(q.q, "What is a channel?");
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert_eq!(q.tags, vec!["concurrency", "sync"]);
        assert_eq!(q.a, "line one\nline two");
        assert!(s.has_unsaved_changes());
    }

    #[test]
    fn test_draft_form_unchanged_fields_leave_draft_clean() {
        let mut s = session();
        let form = DraftForm::from_pairs(pairs(&[
            ("q[g1]", "What is a goroutine?"),
            ("difficulty[g1]", "Medium"),
            ("tags[g1]", "concurrency"),
            ("a[g1]", "A green thread."),
        ]));
        form.apply(&mut s).unwrap();
        assert!(!s.has_unsaved_changes());
    }

    #[test]
    fn test_draft_form_bad_difficulty_changes_nothing() {
        let mut s = session();
        let form = DraftForm::from_pairs(pairs(&[
            ("q[g1]", "Changed"),
            ("difficulty[g1]", "Extreme"),
        ]));
        assert!(form.apply(&mut s).is_err());
        assert_eq!(s.draft().question("g1").unwrap().q, "What is a goroutine?");
        assert!(!s.has_unsaved_changes());
    }

    #[test]
    fn test_draft_form_preview_and_unknown_keys() {
        let mut s = session();
        let form = DraftForm::from_pairs(pairs(&[
            ("preview", "g1"),
            ("q[gone]", "ignored"),
            ("nonsense", "x"),
            ("q[g1", "malformed"),
        ]));
        form.apply(&mut s).unwrap();
        assert!(s.is_previewing("g1"));
        assert!(!s.has_unsaved_changes());
    }
}
