//! Site-wide search results.

use quizbank_content::TopicQuestion;
use quizbank_query::{Filter, QueryResult};

use super::components::{difficulty_badge, filter_form, pager, tag_badges};
use super::{Shell, esc, layout};
use crate::palette;

pub const SEARCH_PATH: &str = "/search";

/// Empty-state line for a query with no hits.
pub fn no_results(query: &str) -> String {
    format!("No questions found for \"{query}\"")
}

pub fn search_page(
    shell: &Shell<'_>,
    filter: &Filter,
    tags: &[String],
    result: &QueryResult<'_, TopicQuestion>,
) -> String {
    let page = result.page();
    let controls = pager(SEARCH_PATH, filter, &page);

    let list = if page.items.is_empty() {
        let message = if filter.query.is_empty() {
            "No questions found.".to_string()
        } else {
            no_results(&filter.query)
        };
        format!("<p class=\"empty\">{}</p>\n", esc(&message))
    } else {
        page.items
            .iter()
            .enumerate()
            .map(|(i, r)| result_card(page.first_index() + i + 1, r))
            .collect()
    };

    let body = format!(
        r#"<main>
<header class="page-header">
<a href="/">&larr; Back to topics</a>
<h1>Search Questions</h1>
</header>
{form}<p class="muted">{summary}</p>
{controls}{list}{controls}</main>"#,
        form = filter_form(
            SEARCH_PATH,
            "Search questions, answers, or tags...",
            filter,
            tags
        ),
        summary = result.summary(),
    );
    layout(shell, &body)
}

fn result_card(number: usize, record: &TopicQuestion) -> String {
    let question = &record.question;
    format!(
        r#"<article class="card">
<div class="card-title"><a class="{badge}" href="/t/{slug}">{topic}</a>{difficulty}</div>
<h3><span class="index">{number}.</span>{q}</h3>
<p>{a}</p>
<div class="meta">{tags}</div>
</article>
"#,
        badge = palette::badge_class(&record.topic.color),
        slug = super::attr(&urlencoding::encode(&record.topic.slug)),
        topic = esc(&record.topic.name),
        difficulty = difficulty_badge(question.difficulty),
        q = esc(&question.q),
        a = esc(&question.a),
        tags = tag_badges(question),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use quizbank_content::{Difficulty, Question, Topic};
    use quizbank_query::FilterState;

    fn records() -> Vec<TopicQuestion> {
        vec![TopicQuestion {
            topic: Topic {
                slug: "go".into(),
                name: "Go".into(),
                color: "sky".into(),
            },
            question: Question {
                id: "1".into(),
                q: "What is a goroutine?".into(),
                a: "A lightweight thread.".into(),
                difficulty: Difficulty::Easy,
                tags: vec!["concurrency".into()],
            },
        }]
    }

    fn shell() -> Shell<'static> {
        Shell {
            theme: Theme::Light,
            title: "Search",
            return_to: "/search",
        }
    }

    #[test]
    fn test_result_card_has_topic_badge() {
        let records = records();
        let state = FilterState::new();
        let result = state.apply(&records);
        let html = search_page(&shell(), state.filter(), &[], &result);
        assert!(html.contains(r#"<a class="badge badge-sky" href="/t/go">Go</a>"#));
        assert!(html.contains("<span class=\"index\">1.</span>What is a goroutine?"));
    }

    #[test]
    fn test_no_results_message_escapes_query() {
        let records = records();
        let mut state = FilterState::new();
        state.set_query("<zzz>");
        let result = state.apply(&records);
        let html = search_page(&shell(), state.filter(), &[], &result);
        assert!(html.contains("No questions found for \"&lt;zzz&gt;\""));
    }
}
