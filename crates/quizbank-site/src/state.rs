//! Shared state handed to every handler.

use std::sync::Arc;

use quizbank_content::{EditorSession, TopicSource};
use tokio::sync::Mutex;

use crate::cache::PageCache;
use crate::render::search::SEARCH_PATH;
use crate::settings::SiteSettings;

/// Cheap-to-clone handle on the store, settings, page cache and the
/// admin draft.
#[derive(Clone)]
pub struct SiteState {
    inner: Arc<Inner>,
}

struct Inner {
    store: Arc<dyn TopicSource>,
    settings: SiteSettings,
    cache: PageCache,
    editor: Mutex<Option<EditorSession>>,
}

impl SiteState {
    pub fn new(store: Arc<dyn TopicSource>, settings: SiteSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                settings,
                cache: PageCache::new(),
                editor: Mutex::new(None),
            }),
        }
    }

    pub fn store(&self) -> &dyn TopicSource {
        self.inner.store.as_ref()
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.inner.settings
    }

    pub fn cache(&self) -> &PageCache {
        &self.inner.cache
    }

    /// The admin draft. There is one per process; concurrent admins share
    /// it and the last save wins.
    pub fn editor(&self) -> &Mutex<Option<EditorSession>> {
        &self.inner.editor
    }

    /// Drop cached copies of the pages showing `slug`.
    pub fn invalidate_topic(&self, slug: &str) {
        self.cache().invalidate(&format!("/t/{slug}"));
        self.cache().invalidate("/");
        self.cache().invalidate(SEARCH_PATH);
    }
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("settings", &self.inner.settings)
            .field("cached_pages", &self.inner.cache.len())
            .finish_non_exhaustive()
    }
}
