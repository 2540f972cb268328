//! Handlers for `quizbank config {path,get,set,init,export}`.
//!
//! Each action renders its output to a string so the dispatcher is the only
//! place that prints. `set` edits the file as a raw TOML tree, then checks
//! the result still deserializes as a [`QuizbankConfig`] before writing.

use std::path::{Path, PathBuf};

use quizbank_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::QuizbankConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Run a config subcommand and print its output.
///
/// Takes the raw `--config` path rather than a loaded config because
/// `path` and `init` work before any file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    let output = run_config_action(config_path, action)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn run_config_action(config_path: Option<&str>, action: ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Path => config_file_path(config_path),
        ConfigAction::Get { key } => config_get(config_path, &key),
        ConfigAction::Set { key, value } => config_set(config_path, &key, &value),
        ConfigAction::Init { file, force } => config_init(file.as_deref(), force),
        ConfigAction::Export { docker_env } => {
            config_export(&QuizbankConfig::load(config_path)?, docker_env)
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

fn resolved_path(config_path: Option<&str>) -> Result<PathBuf> {
    QuizbankConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
}

fn config_file_path(config_path: Option<&str>) -> Result<String> {
    let path = resolved_path(config_path)?;
    if !path.exists() {
        log::warn!("{} does not exist; run `quizbank config init`", path.display());
    }
    Ok(path.display().to_string())
}

fn config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = QuizbankConfig::load(config_path)?;
    let tree = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    lookup(&tree, key)
        .map(display_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

fn config_set(config_path: Option<&str>, key: &str, raw: &str) -> Result<String> {
    let path = resolved_path(config_path)?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `quizbank config init` first.",
            path.display()
        )));
    }

    let mut tree = read_tree(&path)?;
    assign(&mut tree, key, parse_value(raw))?;
    tree.clone()
        .try_into::<QuizbankConfig>()
        .map_err(|e| Error::config(format!("Invalid value for {key}: {e}")))?;

    let text = toml::to_string_pretty(&tree).map_err(|e| Error::config(e.to_string()))?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(format!("Set {key} = {raw} in {}", path.display()))
}

fn config_init(file: Option<&str>, force: bool) -> Result<String> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => QuizbankConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let text = QuizbankConfig::default().to_toml_string()?;
    std::fs::write(&path, text).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(format!("Config file created at {}", path.display()))
}

fn config_export(config: &QuizbankConfig, docker_env: bool) -> Result<String> {
    let flag = if docker_env { "--env " } else { "" };
    let lines: Vec<String> = config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{flag}{key}={value}"))
        .collect();
    Ok(lines.join("\n"))
}

// ============================================================================
// TOML tree helpers
// ============================================================================

fn read_tree(path: &Path) -> Result<toml::Value> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
    toml::from_str(&text)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Follow a dotted key such as `server.port`.
fn lookup<'a>(tree: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(tree, |node, part| node.as_table()?.get(part))
}

/// Store `value` at a dotted key, creating missing tables on the way.
fn assign(tree: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let mut parts: Vec<&str> = key.split('.').collect();
    let last = parts
        .pop()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Error::config("Empty key path"))?;

    let mut table = tree
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    for part in parts {
        table = table
            .entry(part)
            .or_insert(toml::Value::Table(toml::map::Map::new()))
            .as_table_mut()
            .ok_or_else(|| Error::config(format!("'{part}' is not a table")))?;
    }
    table.insert(last.to_string(), value);
    Ok(())
}

/// Read a command-line value as a TOML literal, falling back to a plain
/// string (`8080` is an integer, `true` a boolean, `0.0.0.0` a string).
fn parse_value(raw: &str) -> toml::Value {
    toml::from_str::<toml::Table>(&format!("v = {raw}"))
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(table) => {
            toml::to_string_pretty(table).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn written_default() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, QuizbankConfig::default().to_toml_string().unwrap()).unwrap();
        (dir, path)
    }

    // ------------------------------------------------------------------------
    // path / get
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_path_explicit() {
        let out = config_file_path(Some("/explicit/config.toml")).unwrap();
        assert_eq!(out, "/explicit/config.toml");
    }

    #[test]
    fn test_config_get_keys() {
        let (_dir, path) = written_default();
        let path = path.to_str().unwrap();
        assert_eq!(config_get(Some(path), "project_name").unwrap(), "quizbank");
        assert_eq!(config_get(Some(path), "server.port").unwrap(), "3000");
        assert_eq!(config_get(Some(path), "site.admin_enabled").unwrap(), "true");
        assert!(
            config_get(Some(path), "server")
                .unwrap()
                .contains("port = 3000")
        );
    }

    #[test]
    fn test_config_get_missing_key() {
        let (_dir, path) = written_default();
        let err = config_get(Some(path.to_str().unwrap()), "server.missing").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // set
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_set_values() {
        let (_dir, path) = written_default();
        let p = path.to_str().unwrap();

        config_set(Some(p), "server.port", "8080").unwrap();
        config_set(Some(p), "site.admin_enabled", "false").unwrap();
        config_set(Some(p), "data.path", "/srv/questions").unwrap();

        let config = QuizbankConfig::load(Some(p)).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.site.admin_enabled);
        assert_eq!(config.data.path.as_deref(), Some("/srv/questions"));
    }

    #[test]
    fn test_config_set_rejects_wrong_type() {
        let (_dir, path) = written_default();
        let p = path.to_str().unwrap();
        let err = config_set(Some(p), "server.port", "not-a-port").unwrap_err();
        assert!(err.to_string().contains("server.port"));

        // File is left untouched.
        let config = QuizbankConfig::load(Some(p)).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_config_set_missing_file() {
        let err = config_set(Some("/nonexistent/config.toml"), "site.title", "x").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // init / export
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizbank").join("config.toml");

        let out = config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert!(out.starts_with("Config file created at"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("project_name"));
        assert!(content.contains("[site]"));
    }

    #[test]
    fn test_config_init_respects_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();
        let p = path.to_str().unwrap();

        let err = config_init(Some(p), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        config_init(Some(p), true).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("project_name"));
    }

    #[test]
    fn test_config_export_formats() {
        let config = QuizbankConfig::default();
        let plain = config_export(&config, false).unwrap();
        assert!(plain.lines().any(|l| l == "QUIZBANK_SERVER_PORT=3000"));

        let docker = config_export(&config, true).unwrap();
        assert!(docker.lines().all(|l| l.starts_with("--env QUIZBANK_")));
    }

    // ------------------------------------------------------------------------
    // Tree helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_lookup() {
        let tree: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        assert_eq!(
            lookup(&tree, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
        assert!(lookup(&tree, "server.host").is_none());
        assert!(lookup(&tree, "server.port.deeper").is_none());
    }

    #[test]
    fn test_assign_creates_and_overwrites() {
        let mut tree = toml::Value::Table(toml::map::Map::new());
        assign(&mut tree, "site.title", toml::Value::String("Prep".into())).unwrap();
        assert_eq!(
            lookup(&tree, "site.title"),
            Some(&toml::Value::String("Prep".into()))
        );

        assign(&mut tree, "site.title", toml::Value::String("Other".into())).unwrap();
        assert_eq!(
            lookup(&tree, "site.title"),
            Some(&toml::Value::String("Other".into()))
        );

        assert!(assign(&mut tree, "site.title.x", toml::Value::Integer(1)).is_err());
        assert!(assign(&mut tree, "", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("8080"), toml::Value::Integer(8080));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(
            parse_value("0.0.0.0"),
            toml::Value::String("0.0.0.0".into())
        );
        assert_eq!(
            parse_value("Interview Prep"),
            toml::Value::String("Interview Prep".into())
        );
        assert_eq!(
            parse_value("\"quoted\""),
            toml::Value::String("quoted".into())
        );
    }
}
