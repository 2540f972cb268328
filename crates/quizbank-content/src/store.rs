//! Topic storage.
//!
//! [`TopicSource`] is what the site and CLI talk to. [`JsonStore`] is the
//! flat-file implementation: `topics.json` holds the topic index and each
//! topic's questions live in `<slug>.json` next to it.
//!
//! Reads come in two flavours. The required trait methods return
//! `Result` so callers that care (the CLI `health` command, tests) can see
//! what went wrong. The provided `*_or_*` methods log the failure and hand
//! back an empty or absent value, which is what page rendering wants.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, error, info, warn};
use quizbank_core::util::files;
use quizbank_core::{Error, Result};

use crate::model::{Topic, TopicData, TopicQuestion, TopicSummary};

/// File name of the topic index.
pub const TOPICS_FILE: &str = "topics.json";

/// Check that `slug` is safe to use as a file stem.
///
/// Any slug is accepted (`node.js`, `c++`) unless it could leave the data
/// directory or collide with the topic index: empty, all dots, or holding a
/// path separator or NUL.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::invalid_data("empty topic slug"));
    }
    if slug.contains(['/', '\\', '\0']) || slug.chars().all(|c| c == '.') {
        return Err(Error::invalid_data(format!("invalid topic slug: {slug}")));
    }
    if format!("{slug}.json") == TOPICS_FILE {
        return Err(Error::invalid_data("slug collides with the topic index"));
    }
    Ok(())
}

/// Read/overwrite access to topics and their questions.
#[async_trait]
pub trait TopicSource: Send + Sync {
    /// Load the topic index.
    async fn list_topics(&self) -> Result<Vec<Topic>>;

    /// Load one topic's questions.
    async fn load_topic(&self, slug: &str) -> Result<TopicData>;

    /// Replace one topic's questions wholesale.
    async fn save_topic(&self, slug: &str, data: &TopicData) -> Result<()>;

    /// Topic index, or empty (logged) on any failure.
    async fn topics_or_empty(&self) -> Vec<Topic> {
        match self.list_topics().await {
            Ok(topics) => topics,
            Err(e) => {
                error!("Error fetching topics: {e}");
                Vec::new()
            }
        }
    }

    /// One topic's data, or `None` (logged) on any failure.
    async fn topic_or_none(&self, slug: &str) -> Option<TopicData> {
        match self.load_topic(slug).await {
            Ok(data) => Some(data),
            Err(e) => {
                error!("Error fetching topic data for {slug}: {e}");
                None
            }
        }
    }

    /// Find a topic in the index by slug.
    async fn find_topic(&self, slug: &str) -> Option<Topic> {
        self.topics_or_empty()
            .await
            .into_iter()
            .find(|t| t.slug == slug)
    }

    /// Every topic with its question count. A topic whose file cannot be
    /// read is reported with a count of 0.
    async fn topic_summaries(&self) -> Vec<TopicSummary> {
        let mut summaries = Vec::new();
        for topic in self.topics_or_empty().await {
            let count = match self.load_topic(&topic.slug).await {
                Ok(data) => data.questions.len(),
                Err(e) => {
                    error!("Error fetching data for topic {}: {e}", topic.slug);
                    0
                }
            };
            summaries.push(TopicSummary { topic, count });
        }
        summaries
    }

    /// All questions of all topics, in index order then file order.
    /// Topics whose file cannot be read are skipped.
    async fn all_questions(&self) -> Vec<TopicQuestion> {
        let mut all = Vec::new();
        for topic in self.topics_or_empty().await {
            let data = match self.load_topic(&topic.slug).await {
                Ok(data) => data,
                Err(e) => {
                    warn!("Skipping topic {} in search: {e}", topic.slug);
                    continue;
                }
            };
            all.extend(data.questions.into_iter().map(|question| TopicQuestion {
                topic: topic.clone(),
                question,
            }));
        }
        all
    }
}

/// Flat JSON file store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Create a store over `data_dir`. Nothing is read until first use.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The directory this store reads and writes.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the topic index.
    pub fn topics_path(&self) -> PathBuf {
        self.data_dir.join(TOPICS_FILE)
    }

    /// Path of a topic's data file.
    pub fn topic_path(&self, slug: &str) -> Result<PathBuf> {
        validate_slug(slug)?;
        Ok(self.data_dir.join(format!("{slug}.json")))
    }
}

#[async_trait]
impl TopicSource for JsonStore {
    async fn list_topics(&self) -> Result<Vec<Topic>> {
        let path = self.topics_path();
        let topics: Vec<Topic> = files::read_json(&path).await?;
        debug!("Read {} topics from {}", topics.len(), path.display());
        Ok(topics)
    }

    async fn load_topic(&self, slug: &str) -> Result<TopicData> {
        let path = self.topic_path(slug)?;
        files::read_json(&path).await
    }

    async fn save_topic(&self, slug: &str, data: &TopicData) -> Result<()> {
        let path = self.topic_path(slug)?;
        if data.slug != slug {
            warn!(
                "Saving data with slug '{}' into {}.json",
                data.slug, slug
            );
        }
        files::write_json_pretty(&path, data).await?;
        info!(
            "Saved {} questions for topic {slug}",
            data.questions.len()
        );
        Ok(())
    }
}
