//! The topic index page.

use quizbank_content::TopicSummary;

use super::{Shell, attr, esc, layout};
use crate::palette;
use crate::settings::SiteSettings;

pub fn home_page(shell: &Shell<'_>, settings: &SiteSettings, topics: &[TopicSummary]) -> String {
    let cards: String = topics.iter().map(topic_card).collect();
    let grid = if topics.is_empty() {
        r#"<p class="empty">No topics available.</p>"#.to_string()
    } else {
        format!("<div class=\"grid\">\n{cards}</div>")
    };
    let body = format!(
        r#"<main>
<header>
<h1>{title}</h1>
<p class="muted">{tagline}</p>
</header>
{grid}
<p style="text-align:center;margin-top:3rem"><a class="btn" href="/search">Search all questions</a></p>
</main>"#,
        title = esc(&settings.title),
        tagline = esc(&settings.tagline),
    );
    layout(shell, &body)
}

fn topic_card(summary: &TopicSummary) -> String {
    let topic = &summary.topic;
    format!(
        r#"<a class="card" href="/t/{slug}">
<div class="{strip}"></div>
<div class="card-title"><h3>{name}</h3><span class="{badge}">{count} Questions</span></div>
<p class="muted">Practice {name} interview questions</p>
</a>
"#,
        slug = attr(&urlencoding::encode(&topic.slug)),
        strip = palette::strip_class(&topic.color),
        badge = palette::badge_class(&topic.color),
        name = esc(&topic.name),
        count = summary.count,
    )
}
