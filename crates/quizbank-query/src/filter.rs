//! Record filtering.
//!
//! A record is kept when all three criteria hold:
//!
//! - the query is empty, or appears (case-insensitively) in the question
//!   text, the answer text, any tag, or the topic name when the record
//!   carries one;
//! - the difficulty filter is `All` or equals the record's difficulty;
//! - the tag filter is `All` or is one of the record's tags.
//!
//! Matching is plain substring containment. The query is used verbatim:
//! it is not trimmed or split into words.

use std::fmt;
use std::str::FromStr;

use quizbank_content::{Difficulty, Question, TopicQuestion};
use quizbank_core::Error;

/// Parameter value meaning "no restriction".
pub const ALL: &str = "All";

/// Anything the query engine can filter.
pub trait Searchable {
    /// The question record.
    fn question(&self) -> &Question;

    /// Name of the owning topic, for site-wide search.
    fn topic_name(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Question {
    fn question(&self) -> &Question {
        self
    }
}

impl Searchable for TopicQuestion {
    fn question(&self) -> &Question {
        &self.question
    }

    fn topic_name(&self) -> Option<&str> {
        Some(&self.topic.name)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn question(&self) -> &Question {
        (**self).question()
    }

    fn topic_name(&self) -> Option<&str> {
        (**self).topic_name()
    }
}

/// Difficulty criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => *d == difficulty,
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(d) => d.fmt(f),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = Error;

    /// `""` and `"All"` mean no restriction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | ALL => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

/// Tag criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Only(String),
}

impl TagFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => question.has_tag(tag),
        }
    }

    /// Parse a request parameter; `""` and `"All"` mean no restriction.
    pub fn from_param(s: &str) -> Self {
        match s {
            "" | ALL => Self::All,
            tag => Self::Only(tag.to_string()),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(tag) => f.write_str(tag),
        }
    }
}

/// The three filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub query: String,
    pub difficulty: DifficultyFilter,
    pub tag: TagFilter,
}

impl Filter {
    /// True when no criterion restricts anything.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.difficulty == DifficultyFilter::All
            && self.tag == TagFilter::All
    }

    /// Test one record.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        let needle = self.query.to_lowercase();
        self.matches_lowered(record, &needle)
    }

    fn matches_lowered<R: Searchable + ?Sized>(&self, record: &R, needle: &str) -> bool {
        let question = record.question();
        self.difficulty.matches(question.difficulty)
            && self.tag.matches(question)
            && text_matches(record, needle)
    }
}

fn text_matches<R: Searchable + ?Sized>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    let question = record.question();

    contains(&question.q)
        || contains(&question.a)
        || question.tags.iter().any(|t| contains(t))
        || record.topic_name().is_some_and(contains)
}

/// Keep the records matching `filter`, in their original order.
pub fn filter<'a, R: Searchable>(records: &'a [R], filter: &Filter) -> Vec<&'a R> {
    let needle = filter.query.to_lowercase();
    records
        .iter()
        .filter(|r| filter.matches_lowered(*r, &needle))
        .collect()
}
