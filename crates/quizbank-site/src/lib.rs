//! HTTP server for the Quizbank site.
//!
//! Serves the topic index, topic pages, site-wide search, the raw JSON data
//! files, and (unless disabled) the admin editor. Pages are rendered on the
//! server; the only client script drives copy buttons, the markdown
//! toolbar and paste conversion.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use quizbank_content::JsonStore;
//! use quizbank_site::{SiteSettings, SiteState, build_router};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let state = SiteState::new(Arc::new(JsonStore::new("data")), SiteSettings::default());
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod cache;
pub mod error;
pub mod handlers;
pub mod palette;
pub mod render;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;
pub mod theme;

pub use cache::PageCache;
pub use error::{SiteError, SiteResult};
pub use routes::build_router;
pub use server::serve;
pub use settings::SiteSettings;
pub use state::SiteState;
pub use theme::Theme;
