//! Core traits for Quizbank configuration abstraction.
//!
//! [`ConfigProvider`] is the seam between the binary's configuration file
//! and the crates that need to know where the topic files live.

use std::path::PathBuf;

use crate::Result;

/// Content type key for the directory holding `topics.json` and the
/// per-topic files.
pub const DATA_CONTENT_TYPE: &str = "data";

/// Trait for application configuration.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use quizbank_core::traits::ConfigProvider;
/// use quizbank_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "interview-site"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self, content_type: &str) -> Result<PathBuf> {
///         Ok(self.root.join(content_type))
///     }
/// }
///
/// let config = SiteConfig { root: PathBuf::from("/srv/site") };
/// assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/site/data"));
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Path for a specific content type, e.g. `"data"`.
    fn content_path(&self, content_type: &str) -> Result<PathBuf>;

    /// Directory containing `topics.json` and `<slug>.json` files.
    fn data_dir(&self) -> Result<PathBuf> {
        self.content_path(DATA_CONTENT_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self, content_type: &str) -> Result<PathBuf> {
            Ok(self.base.join(content_type))
        }
    }

    fn test_config() -> TestConfig {
        TestConfig {
            name: "test-project".into(),
            base: PathBuf::from("/srv/test"),
        }
    }

    #[test]
    fn test_config_provider_project_name() {
        assert_eq!(test_config().project_name(), "test-project");
    }

    #[test]
    fn test_config_provider_base_path() {
        assert_eq!(test_config().base_path().unwrap(), PathBuf::from("/srv/test"));
    }

    #[test]
    fn test_config_provider_content_path() {
        let path = test_config().content_path("uploads").unwrap();
        assert_eq!(path, PathBuf::from("/srv/test/uploads"));
    }

    #[test]
    fn test_config_provider_data_dir_default() {
        assert_eq!(
            test_config().data_dir().unwrap(),
            PathBuf::from("/srv/test/data")
        );
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
