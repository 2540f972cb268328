//! Request handlers, grouped by surface.

pub mod admin;
pub mod data;
pub mod pages;
pub mod static_files;
pub mod theme;

use serde::Deserialize;

use quizbank_query::{DifficultyFilter, Filter, FilterState, TagFilter};

use crate::error::{SiteError, SiteResult};

/// Filter and page parameters of the topic and search pages.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tag: String,
    /// Kept as text so a malformed page number falls back to page 1.
    #[serde(default)]
    pub page: Option<String>,
}

impl FilterParams {
    pub fn filter_state(&self) -> SiteResult<FilterState> {
        let difficulty: DifficultyFilter = self
            .difficulty
            .parse()
            .map_err(|_| SiteError::bad_request(format!("unknown difficulty: {}", self.difficulty)))?;
        let filter = Filter {
            query: self.q.clone(),
            difficulty,
            tag: TagFilter::from_param(&self.tag),
        };
        let page = self
            .page
            .as_deref()
            .and_then(|p| p.parse::<usize>().ok())
            .unwrap_or(1);
        Ok(FilterState::from_parts(filter, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_content::Difficulty;

    #[test]
    fn test_filter_params_defaults() {
        let state = FilterParams::default().filter_state().unwrap();
        assert_eq!(state.page(), 1);
        assert!(state.filter().is_empty());
    }

    #[test]
    fn test_filter_params_parse() {
        let params = FilterParams {
            q: "Tokio".into(),
            difficulty: "Hard".into(),
            tag: "async".into(),
            page: Some("3".into()),
        };
        let state = params.filter_state().unwrap();
        assert_eq!(state.page(), 3);
        assert_eq!(state.filter().difficulty, DifficultyFilter::Only(Difficulty::Hard));
        assert_eq!(state.filter().tag, TagFilter::Only("async".into()));
    }

    #[test]
    fn test_bad_page_falls_back_and_bad_difficulty_rejected() {
        let params = FilterParams {
            page: Some("two".into()),
            ..Default::default()
        };
        assert_eq!(params.filter_state().unwrap().page(), 1);

        let params = FilterParams {
            difficulty: "Extreme".into(),
            ..Default::default()
        };
        assert!(params.filter_state().is_err());
    }
}
