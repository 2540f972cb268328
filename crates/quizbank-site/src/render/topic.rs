//! One topic's question list.

use quizbank_content::{Question, Topic, render_markdown};
use quizbank_query::{Filter, QueryResult};

use super::components::{copy_button, difficulty_badge, filter_form, pager, tag_badges};
use super::{Shell, esc, layout};
use crate::palette;

pub const EMPTY_STATE: &str = "No questions found matching your criteria.";

pub fn topic_page(
    shell: &Shell<'_>,
    topic: &Topic,
    filter: &Filter,
    tags: &[String],
    result: &QueryResult<'_, Question>,
) -> String {
    let path = format!("/t/{}", urlencoding::encode(&topic.slug));
    let page = result.page();
    let controls = pager(&path, filter, &page);

    let list = if page.items.is_empty() {
        format!("<p class=\"empty\">{EMPTY_STATE}</p>\n")
    } else {
        page.items
            .iter()
            .enumerate()
            .map(|(i, q)| question_card(page.first_index() + i + 1, q))
            .collect()
    };

    let body = format!(
        r#"<main>
<header class="page-header">
<a href="/">&larr; Back to topics</a>
<h1>{name} Interview Questions</h1>
<span class="{strip} strip-inline"></span>
</header>
{form}<p class="muted">{summary}</p>
{controls}{list}{controls}</main>"#,
        name = esc(&topic.name),
        strip = palette::strip_class(&topic.color),
        form = filter_form(&path, &format!("Search in {}...", topic.name), filter, tags),
        summary = result.summary(),
    );
    layout(shell, &body)
}

fn question_card(number: usize, question: &Question) -> String {
    format!(
        r#"<article class="card" id="q-{id}">
<h3><span class="index">{number}.</span>{q}</h3>
<div class="answer">
{answer}<div class="meta">{difficulty}{tags}<span class="spacer">{copy}</span></div>
</div>
</article>
"#,
        id = super::attr(&question.id),
        q = esc(&question.q),
        answer = render_markdown(&question.a),
        difficulty = difficulty_badge(question.difficulty),
        tags = tag_badges(question),
        copy = copy_button(&question.a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use quizbank_content::Difficulty;
    use quizbank_query::FilterState;

    fn topic() -> Topic {
        Topic {
            slug: "rust".into(),
            name: "Rust".into(),
            color: "orange".into(),
        }
    }

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: i.to_string(),
                q: format!("Question <{i}>"),
                a: format!("**Answer** {i}"),
                difficulty: Difficulty::Medium,
                tags: vec!["ownership".into()],
            })
            .collect()
    }

    fn shell() -> Shell<'static> {
        Shell {
            theme: Theme::Light,
            title: "Rust",
            return_to: "/t/rust",
        }
    }

    #[test]
    fn test_renders_markdown_and_numbering() {
        let records = questions(150);
        let state = FilterState::from_parts(Filter::default(), 2);
        let result = state.apply(&records);
        let html = topic_page(&shell(), &topic(), state.filter(), &[], &result);

        assert!(html.contains("Rust Interview Questions"));
        assert!(html.contains("<span class=\"index\">101.</span>Question &lt;100&gt;"));
        assert!(html.contains("<strong>Answer</strong> 149"));
        assert!(html.contains("Showing 50 of 150 questions"));
        assert_eq!(html.matches("Page 2 of 2").count(), 2);
    }

    #[test]
    fn test_empty_state() {
        let records = questions(3);
        let mut state = FilterState::new();
        state.set_query("nothing matches this");
        let result = state.apply(&records);
        let html = topic_page(&shell(), &topic(), state.filter(), &[], &result);
        assert!(html.contains(EMPTY_STATE));
        assert!(html.contains("(filtered from 3)"));
        assert!(!html.contains("class=\"pager\""));
    }
}
