//! Async file utilities for the Quizbank crates.
//!
//! Provides the read and overwrite primitives the JSON content store is
//! built on. Writes are plain overwrites: no temp file, no backup, no lock.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::{Error, Result};

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Read and deserialize a JSON file.
///
/// # Example
///
/// ```no_run
/// # use quizbank_core::util::files::read_json;
/// # use std::path::Path;
/// # async fn example() -> quizbank_core::Result<()> {
/// let value: serde_json::Value = read_json(Path::new("data/topics.json")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path).await?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize a value as JSON pretty-printed with a 2-space indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Overwrite `path` with `value` as pretty-printed JSON.
///
/// The parent directory must already exist.
pub async fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value)?;
    fs::write(path, json)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
