//! Configuration for the `quizbank` binary.
//!
//! Provides the [`QuizbankConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `QUIZBANK_CONFIG` environment variable
//! 3. XDG default: `~/.config/quizbank/config.toml`
//! 4. Built-in defaults

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use confyg::{Confygery, env};
use quizbank_core::traits::ConfigProvider;
use quizbank_core::util::paths::{expand_tilde, resolve_under};
use quizbank_core::{Error, Result};
use quizbank_site::SiteSettings;
use quizbank_site::settings::{DEFAULT_TAGLINE, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides and exported variables.
pub const ENV_PREFIX: &str = "QUIZBANK";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizbankConfig {
    /// Project name, used for default paths.
    pub project_name: String,

    /// Base path for all project data.
    pub base_path: Option<String>,

    /// Where the topic files live.
    pub data: DataConfig,

    /// Listener settings.
    pub server: ServerConfig,

    /// Site presentation.
    pub site: SiteConfig,
}

/// Topic data location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `topics.json`. Relative paths are taken from
    /// `base_path`; defaults to `<base_path>/data`.
    pub path: Option<String>,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host name or IP address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    /// Mount the admin editor and save API.
    pub admin_enabled: bool,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            project_name: "quizbank".to_string(),
            base_path: None,
            data: DataConfig::default(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            admin_enabled: true,
        }
    }
}

impl SiteConfig {
    /// Settings handed to the site router.
    pub fn settings(&self) -> SiteSettings {
        SiteSettings {
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            admin_enabled: self.admin_enabled,
        }
    }
}

impl ServerConfig {
    /// Resolve the listen address, with optional overrides from the
    /// command line.
    ///
    /// The host is an IP address or a name such as `localhost`; a name
    /// binds to the first address it resolves to.
    pub async fn socket_addr(&self, host: Option<&str>, port: Option<u16>) -> Result<SocketAddr> {
        let host = host.unwrap_or(&self.host);
        let port = port.unwrap_or(self.port);
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, port));
        }
        tokio::net::lookup_host((host, port))
            .await
            .map_err(|e| Error::config(format!("invalid server host '{host}': {e}")))?
            .next()
            .ok_or_else(|| Error::config(format!("server host '{host}' did not resolve")))
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl QuizbankConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A missing config file is not an error; the defaults apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        env_opts.add_section("data");
        env_opts.add_section("server");
        env_opts.add_section("site");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        log::debug!("loaded config for {}", config.project_name);
        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(expand_tilde(path));
        }

        if let Ok(path) = std::env::var("QUIZBANK_CONFIG") {
            return Some(expand_tilde(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quizbank").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Flatten this config into `QUIZBANK_*` environment variable pairs.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value: toml::Value =
            toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, ENV_PREFIX, &mut vars);
        Ok(vars)
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for QuizbankConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self, content_type: &str) -> Result<PathBuf> {
        let base = self.base_path()?;
        Ok(match &self.data.path {
            Some(p) => resolve_under(&base, p),
            None => base.join(content_type),
        })
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                let env_key = format!("{}_{}", prefix, key.to_uppercase());
                flatten_toml_value(val, &env_key, out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        toml::Value::Integer(i) => out.push((prefix.to_string(), i.to_string())),
        toml::Value::Float(f) => out.push((prefix.to_string(), f.to_string())),
        toml::Value::Boolean(b) => out.push((prefix.to_string(), b.to_string())),
        toml::Value::Datetime(dt) => out.push((prefix.to_string(), dt.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
