//! Topic and question content for Quizbank.
//!
//! This crate owns everything that touches a question record: the data
//! model, the flat-file store, markdown rendering of answers, and the
//! editing helpers used by the admin surface.
//!
//! # Modules
//!
//! - [`model`]: Serializable topic and question types
//! - [`store`]: `TopicSource` trait and the JSON file store
//! - [`markdown`]: Answer markdown to HTML
//! - [`paste`]: Clipboard HTML to Markdown
//! - [`toolbar`]: Markdown toolbar actions
//! - [`editor`]: Admin draft session

#![doc = include_str!("../README.md")]

pub mod editor;
pub mod markdown;
pub mod model;
pub mod paste;
pub mod store;
pub mod toolbar;

pub use editor::{EditorSession, QuestionUpdate, parse_tags};
pub use markdown::render_markdown;
pub use model::{Difficulty, Question, Topic, TopicData, TopicQuestion, TopicSummary};
pub use paste::{Clipboard, PasteConverter};
pub use store::{JsonStore, TopicSource, validate_slug};
pub use toolbar::{MarkdownAction, TextEdit};
