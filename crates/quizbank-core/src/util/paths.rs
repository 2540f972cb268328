//! Path resolution for configured directories.

use std::path::{Path, PathBuf};

/// Replace a leading `~` with the home directory. Paths without one, or
/// hosts with no home directory, come back unchanged.
///
/// # Example
///
/// ```
/// use quizbank_core::util::paths::expand_tilde;
///
/// assert!(!expand_tilde("~/quizbank/data").starts_with("~"));
/// assert_eq!(expand_tilde("/srv/data").to_str(), Some("/srv/data"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Resolve a configured path: expand `~`, then anchor relative paths at
/// `base`.
///
/// ```
/// use std::path::Path;
/// use quizbank_core::util::paths::resolve_under;
///
/// let base = Path::new("/srv/quizbank");
/// assert_eq!(resolve_under(base, "data"), Path::new("/srv/quizbank/data"));
/// assert_eq!(resolve_under(base, "/var/qa"), Path::new("/var/qa"));
/// ```
pub fn resolve_under<P: AsRef<Path>>(base: &Path, path: P) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
