//! Public HTML pages: home, topic, search.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Html;
use quizbank_query::available_tags;
use tracing::info;

use super::FilterParams;
use crate::error::{SiteError, SiteResult};
use crate::render::Shell;
use crate::render::home::home_page;
use crate::render::search::{SEARCH_PATH, search_page};
use crate::render::topic::topic_page;
use crate::state::SiteState;
use crate::theme::Theme;

fn return_to(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

/// `GET /`
pub async fn home(State(state): State<SiteState>, headers: HeaderMap) -> Html<String> {
    let theme = Theme::from_headers(&headers);
    if let Some(html) = state.cache().get("/", theme) {
        return Html(html);
    }

    let topics = state.store().topic_summaries().await;
    let shell = Shell {
        theme,
        title: &state.settings().title,
        return_to: "/",
    };
    let html = home_page(&shell, state.settings(), &topics);
    state.cache().insert("/", theme, html.clone());
    Html(html)
}

/// `GET /t/{slug}`
pub async fn topic(
    State(state): State<SiteState>,
    Path(slug): Path<String>,
    Query(params): Query<FilterParams>,
    uri: Uri,
    headers: HeaderMap,
) -> SiteResult<Html<String>> {
    let theme = Theme::from_headers(&headers);
    let path = format!("/t/{slug}");
    let cacheable = uri.query().is_none();
    if cacheable && let Some(html) = state.cache().get(&path, theme) {
        return Ok(Html(html));
    }

    let store = state.store();
    let (Some(data), Some(topic)) = (store.topic_or_none(&slug).await, store.find_topic(&slug).await)
    else {
        return Err(SiteError::not_found(format!("topic {slug}")));
    };
    info!("Loaded {} questions for topic: {}", data.questions.len(), slug);

    let filter_state = params.filter_state()?;
    let tags = available_tags(&data.questions);
    let result = filter_state.apply(&data.questions);
    let title = format!("{} Interview Questions", topic.name);
    let shell = Shell {
        theme,
        title: &title,
        return_to: return_to(&uri),
    };
    let html = topic_page(&shell, &topic, filter_state.filter(), &tags, &result);

    if cacheable {
        state.cache().insert(&path, theme, html.clone());
    }
    Ok(Html(html))
}

/// `GET /search`
pub async fn search(
    State(state): State<SiteState>,
    Query(params): Query<FilterParams>,
    uri: Uri,
    headers: HeaderMap,
) -> SiteResult<Html<String>> {
    let theme = Theme::from_headers(&headers);
    let cacheable = uri.query().is_none();
    if cacheable && let Some(html) = state.cache().get(SEARCH_PATH, theme) {
        return Ok(Html(html));
    }

    let filter_state = params.filter_state()?;
    let records = state.store().all_questions().await;
    let tags = available_tags(&records);
    let result = filter_state.apply(&records);
    let shell = Shell {
        theme,
        title: "Search Questions",
        return_to: return_to(&uri),
    };
    let html = search_page(&shell, filter_state.filter(), &tags, &result);

    if cacheable {
        state.cache().insert(SEARCH_PATH, theme, html.clone());
    }
    Ok(Html(html))
}
