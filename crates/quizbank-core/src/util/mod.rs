//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async file reading and JSON helpers
//! - [`paths`]: Tilde expansion and base-relative resolution

pub mod files;
pub mod paths;
