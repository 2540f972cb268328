//! Rendered page cache.
//!
//! Unfiltered pages are cached per path and theme until a save
//! invalidates them. Requests with query parameters bypass the cache.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::theme::Theme;

/// HTML of rendered pages keyed by request path and theme.
#[derive(Debug, Default)]
pub struct PageCache {
    pages: RwLock<HashMap<(String, Theme), String>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str, theme: Theme) -> Option<String> {
        let pages = self.pages.read().unwrap_or_else(|e| e.into_inner());
        pages.get(&(path.to_string(), theme)).cloned()
    }

    pub fn insert(&self, path: &str, theme: Theme, html: String) {
        let mut pages = self.pages.write().unwrap_or_else(|e| e.into_inner());
        pages.insert((path.to_string(), theme), html);
    }

    /// Drop every cached variant of `path`.
    pub fn invalidate(&self, path: &str) {
        let mut pages = self.pages.write().unwrap_or_else(|e| e.into_inner());
        pages.retain(|(p, _), _| p != path);
        debug!(path, "invalidated cached page");
    }

    pub fn len(&self) -> usize {
        self.pages.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
