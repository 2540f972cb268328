//! Site-wide display settings.

/// Default page title.
pub const DEFAULT_TITLE: &str = "Interview Questions & Answers";
/// Default tagline under the title.
pub const DEFAULT_TAGLINE: &str = "Practice technical interview questions by topic";

/// Presentation knobs passed down from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub title: String,
    pub tagline: String,
    /// Mount the `/admin` and `/api` routes.
    pub admin_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            admin_enabled: true,
        }
    }
}
