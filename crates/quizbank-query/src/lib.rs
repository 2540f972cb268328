//! Search, filtering, and pagination over question records.
//!
//! The pipeline is always the same: [`filter()`] keeps matching records in
//! their original order, then [`paginate()`] slices one page out of the
//! matches. [`FilterState`] ties the two together and owns the rule that
//! any filter change sends the reader back to page 1.
//!
//! # Example
//!
//! ```
//! use quizbank_content::{Difficulty, Question};
//! use quizbank_query::{DifficultyFilter, FilterState};
//!
//! let questions = vec![Question {
//!     id: "1".into(),
//!     q: "Explain recursion".into(),
//!     a: "Recursion is a function calling itself.".into(),
//!     difficulty: Difficulty::Easy,
//!     tags: vec!["functions".into()],
//! }];
//!
//! let mut state = FilterState::new();
//! state.set_query("RECURSION");
//! state.set_difficulty(DifficultyFilter::Only(Difficulty::Easy));
//!
//! let result = state.apply(&questions);
//! assert_eq!(result.page().items.len(), 1);
//! ```

#![doc = include_str!("../README.md")]

pub mod facets;
pub mod filter;
pub mod paginate;
pub mod state;

pub use facets::available_tags;
pub use filter::{DifficultyFilter, Filter, Searchable, TagFilter, filter};
pub use paginate::{PAGE_SIZE, Page, paginate};
pub use state::{FilterState, QueryResult};
