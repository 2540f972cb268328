//! The admin draft of one topic.
//!
//! An [`EditorSession`] holds a working copy of a topic's questions. Edits
//! only touch the draft and raise the unsaved flag; [`EditorSession::save`]
//! writes the whole draft back through a [`TopicSource`].

use std::collections::HashSet;

use log::{info, warn};
use quizbank_core::Result;

use crate::model::{Difficulty, Question, TopicData};
use crate::store::TopicSource;

/// Question text given to freshly added questions.
pub const NEW_QUESTION_TEXT: &str = "New Question";
/// Answer text given to freshly added questions.
pub const NEW_ANSWER_TEXT: &str = "Answer here (Markdown supported)...";

/// Split comma-separated tag input, trimming and dropping empties.
///
/// ```
/// use quizbank_content::parse_tags;
///
/// assert_eq!(parse_tags(" async, ,memory "), vec!["async", "memory"]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// A single-field change to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionUpdate {
    Question(String),
    Answer(String),
    Difficulty(Difficulty),
    Tags(Vec<String>),
}

/// Working copy of one topic in the admin editor.
#[derive(Debug, Clone)]
pub struct EditorSession {
    slug: String,
    draft: TopicData,
    unsaved: bool,
    previews: HashSet<String>,
}

impl EditorSession {
    /// Start editing `data`, stored under `slug`.
    pub fn new(slug: impl Into<String>, data: TopicData) -> Self {
        Self {
            slug: slug.into(),
            draft: data,
            unsaved: false,
            previews: HashSet::new(),
        }
    }

    /// Load `slug` from `source` and start editing it.
    pub async fn open(source: &dyn TopicSource, slug: &str) -> Result<Self> {
        let data = source.load_topic(slug).await?;
        Ok(Self::new(slug, data))
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn draft(&self) -> &TopicData {
        &self.draft
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Append a placeholder question; returns its id.
    ///
    /// Ids are the current time in milliseconds. Two adds within the same
    /// millisecond produce the same id; no dedup is attempted.
    pub fn add_question(&mut self) -> String {
        let id = chrono::Utc::now().timestamp_millis().to_string();
        self.add_question_with_id(id.clone());
        id
    }

    /// Append a placeholder question with a caller-chosen id.
    pub fn add_question_with_id(&mut self, id: impl Into<String>) {
        self.draft.questions.push(Question {
            id: id.into(),
            q: NEW_QUESTION_TEXT.to_string(),
            a: NEW_ANSWER_TEXT.to_string(),
            difficulty: Difficulty::Easy,
            tags: Vec::new(),
        });
        self.unsaved = true;
    }

    /// Remove every question with `id`. Returns false if none matched.
    pub fn delete_question(&mut self, id: &str) -> bool {
        let before = self.draft.questions.len();
        self.draft.questions.retain(|q| q.id != id);
        self.previews.remove(id);
        let removed = self.draft.questions.len() != before;
        if removed {
            self.unsaved = true;
        }
        removed
    }

    /// Apply `update` to every question with `id`. Returns false if none
    /// matched.
    pub fn update_question(&mut self, id: &str, update: QuestionUpdate) -> bool {
        let mut matched = false;
        for question in self.draft.questions.iter_mut().filter(|q| q.id == id) {
            matched = true;
            match &update {
                QuestionUpdate::Question(text) => question.q = text.clone(),
                QuestionUpdate::Answer(text) => question.a = text.clone(),
                QuestionUpdate::Difficulty(d) => question.difficulty = *d,
                QuestionUpdate::Tags(tags) => question.tags = tags.clone(),
            }
        }
        if matched {
            self.unsaved = true;
        }
        matched
    }

    /// Flip the markdown preview of a question; returns the new state.
    pub fn toggle_preview(&mut self, id: &str) -> bool {
        if self.previews.remove(id) {
            false
        } else {
            self.previews.insert(id.to_string());
            true
        }
    }

    pub fn is_previewing(&self, id: &str) -> bool {
        self.previews.contains(id)
    }

    /// The draft as pretty JSON, for the backup download.
    pub fn backup_json(&self) -> Result<String> {
        quizbank_core::util::files::to_pretty_json(&self.draft)
    }

    /// File name offered for the backup download.
    pub fn backup_file_name(&self) -> String {
        format!("{}.json", self.slug)
    }

    /// Write the draft through `source`. The unsaved flag is only cleared
    /// on success.
    pub async fn save(&mut self, source: &dyn TopicSource) -> Result<()> {
        match source.save_topic(&self.slug, &self.draft).await {
            Ok(()) => {
                self.unsaved = false;
                info!("Saved draft of {}", self.slug);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to save data for {}: {e}", self.slug);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;
    use tempfile::TempDir;

    fn session() -> EditorSession {
        EditorSession::new(
            "rust",
            TopicData {
                slug: "rust".into(),
                questions: vec![Question {
                    id: "1".into(),
                    q: "What is a lifetime?".into(),
                    a: "A region of code.".into(),
                    difficulty: Difficulty::Medium,
                    tags: vec!["borrowing".into()],
                }],
            },
        )
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,c"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_new_session_is_clean() {
        let s = session();
        assert!(!s.has_unsaved_changes());
        assert_eq!(s.slug(), "rust");
        assert_eq!(s.draft().questions.len(), 1);
    }

    #[test]
    fn test_add_question_defaults() {
        let mut s = session();
        let id = s.add_question();
        let q = s.draft().question(&id).unwrap();
        assert_eq!(q.q, NEW_QUESTION_TEXT);
        assert_eq!(q.a, NEW_ANSWER_TEXT);
        assert_eq!(q.difficulty, Difficulty::Easy);
        assert!(q.tags.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(s.has_unsaved_changes());
        assert_eq!(s.draft().questions.last().unwrap().id, id);
    }

    #[test]
    fn test_update_question_fields() {
        let mut s = session();
        assert!(s.update_question("1", QuestionUpdate::Question("Q?".into())));
        assert!(s.update_question("1", QuestionUpdate::Answer("**A**".into())));
        assert!(s.update_question("1", QuestionUpdate::Difficulty(Difficulty::Hard)));
        assert!(s.update_question("1", QuestionUpdate::Tags(parse_tags("x, y"))));

        let q = s.draft().question("1").unwrap();
        assert_eq!(q.q, "Q?");
        assert_eq!(q.a, "**A**");
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert_eq!(q.tags, vec!["x", "y"]);
        assert!(s.has_unsaved_changes());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut s = session();
        assert!(!s.update_question("nope", QuestionUpdate::Question("x".into())));
        assert!(!s.has_unsaved_changes());
    }

    #[test]
    fn test_duplicate_ids_all_updated_and_deleted() {
        let mut s = session();
        s.add_question_with_id("1");
        assert!(s.update_question("1", QuestionUpdate::Answer("same".into())));
        assert!(s.draft().questions.iter().all(|q| q.a == "same"));
        assert!(s.delete_question("1"));
        assert!(s.draft().questions.is_empty());
    }

    #[test]
    fn test_delete_question() {
        let mut s = session();
        assert!(!s.delete_question("missing"));
        assert!(!s.has_unsaved_changes());
        assert!(s.delete_question("1"));
        assert!(s.draft().questions.is_empty());
        assert!(s.has_unsaved_changes());
    }

    #[test]
    fn test_toggle_preview() {
        let mut s = session();
        assert!(!s.is_previewing("1"));
        assert!(s.toggle_preview("1"));
        assert!(s.is_previewing("1"));
        assert!(!s.toggle_preview("1"));
        assert!(!s.is_previewing("1"));
    }

    #[test]
    fn test_backup_json() {
        let s = session();
        let json = s.backup_json().unwrap();
        assert!(json.starts_with("{\n  \"slug\": \"rust\""));
        assert_eq!(s.backup_file_name(), "rust.json");
    }

    #[tokio::test]
    async fn test_save_clears_flag() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        let mut s = session();
        s.add_question_with_id("2");

        s.save(&store).await.unwrap();

        assert!(!s.has_unsaved_changes());
        let back = store.load_topic("rust").await.unwrap();
        assert_eq!(back.questions.len(), 2);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_flag() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("missing"));
        let mut s = session();
        s.add_question_with_id("2");

        assert!(s.save(&store).await.is_err());
        assert!(s.has_unsaved_changes());
    }

    #[tokio::test]
    async fn test_open_loads_draft() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path());
        store
            .save_topic("go", &TopicData::empty("go"))
            .await
            .unwrap();

        let s = EditorSession::open(&store, "go").await.unwrap();
        assert_eq!(s.slug(), "go");
        assert!(s.draft().questions.is_empty());
        assert!(EditorSession::open(&store, "nope").await.is_err());
    }
}
