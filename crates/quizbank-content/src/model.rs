//! Serializable topic and question types.
//!
//! These mirror the on-disk JSON exactly: `topics.json` is an array of
//! [`Topic`], and each `<slug>.json` is one [`TopicData`].

use std::fmt;
use std::str::FromStr;

use quizbank_core::Error;
use serde::{Deserialize, Serialize};

/// A named category grouping related questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier, also the data file stem.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Theming tag such as `"sky"` or `"rose"`.
    pub color: String,
}

/// Ordinal classification of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The label used on disk and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(Error::invalid_data(format!("unknown difficulty: {other}"))),
        }
    }
}

/// One question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its topic by convention only.
    pub id: String,
    /// Question text.
    pub q: String,
    /// Answer text (markdown).
    pub a: String,
    pub difficulty: Difficulty,
    /// Display-ordered labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Question {
    /// True if `tag` is one of this question's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Contents of one `<slug>.json` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicData {
    pub slug: String,
    /// Display order is file order.
    pub questions: Vec<Question>,
}

impl TopicData {
    /// A topic with no questions.
    pub fn empty(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            questions: Vec::new(),
        }
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// A question paired with the topic it belongs to, for site-wide search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuestion {
    pub topic: Topic,
    pub question: Question,
}

/// A topic with its question count, as shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    #[serde(flatten)]
    pub topic: Topic,
    pub count: usize,
}
