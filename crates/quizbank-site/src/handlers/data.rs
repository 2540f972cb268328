//! The JSON data files, served as the client-side fetch interface.

use axum::Json;
use axum::extract::{Path, State};
use quizbank_content::{Topic, TopicData};

use crate::error::{SiteError, SiteResult};
use crate::state::SiteState;

/// `GET /data/topics.json`
pub async fn topics(State(state): State<SiteState>) -> SiteResult<Json<Vec<Topic>>> {
    Ok(Json(state.store().list_topics().await?))
}

/// `GET /data/{slug}.json`
pub async fn topic(
    State(state): State<SiteState>,
    Path(file): Path<String>,
) -> SiteResult<Json<TopicData>> {
    let slug = file
        .strip_suffix(".json")
        .ok_or_else(|| SiteError::not_found(file.clone()))?;
    // Refused slugs and unparseable files are reported as missing.
    let data = state
        .store()
        .load_topic(slug)
        .await
        .map_err(|e| match e {
            quizbank_core::Error::InvalidData(_) | quizbank_core::Error::Json(_) => {
                SiteError::not_found(file.clone())
            }
            other => SiteError::from(other),
        })?;
    Ok(Json(data))
}
