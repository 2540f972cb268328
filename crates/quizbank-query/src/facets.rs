//! Values offered in the filter dropdowns.

use std::collections::BTreeSet;

use crate::filter::Searchable;

/// Every tag used by `records`, sorted and de-duplicated.
pub fn available_tags<R: Searchable>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.question().tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_content::{Difficulty, Question};

    fn tagged(id: &str, tags: &[&str]) -> Question {
        Question {
            id: id.into(),
            q: String::new(),
            a: String::new(),
            difficulty: Difficulty::Easy,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_sorted_unique() {
        let records = vec![
            tagged("1", &["memory", "async"]),
            tagged("2", &["async", "closures"]),
            tagged("3", &[]),
        ];
        assert_eq!(available_tags(&records), vec!["async", "closures", "memory"]);
    }

    #[test]
    fn test_no_records() {
        let records: Vec<Question> = Vec::new();
        assert!(available_tags(&records).is_empty());
    }
}
