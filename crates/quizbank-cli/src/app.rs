//! The `quizbank` application.
//!
//! [`QuizbankCli`] owns the loaded configuration and dispatches parsed
//! [`CliArgs`] to the site server, the query engine, or the config
//! handlers.

use std::sync::Arc;

use quizbank_content::{JsonStore, TopicSource};
use quizbank_core::traits::ConfigProvider;
use quizbank_core::{Error, Result};
use quizbank_query::{DifficultyFilter, Filter, FilterState, QueryResult, Searchable, TagFilter};
use quizbank_site::SiteState;
use quizbank_site::render::topic::EMPTY_STATE;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{BaseCommand, CliArgs};
use crate::config::QuizbankConfig;
use crate::config_handlers;

// ============================================================================
// Search options
// ============================================================================

/// Inputs to `quizbank search`.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    /// Restrict to one topic; site-wide when `None`.
    pub topic: Option<String>,
    pub difficulty: String,
    pub tag: Option<String>,
    pub page: usize,
}

impl SearchOptions {
    fn filter_state(&self) -> Result<FilterState> {
        let difficulty: DifficultyFilter = self.difficulty.parse()?;
        let filter = Filter {
            query: self.query.clone(),
            difficulty,
            tag: TagFilter::from_param(self.tag.as_deref().unwrap_or_default()),
        };
        Ok(FilterState::from_parts(filter, self.page))
    }
}

// ============================================================================
// QuizbankCli
// ============================================================================

pub struct QuizbankCli {
    name: String,
    config: Arc<QuizbankConfig>,
    version: String,
}

impl QuizbankCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = QuizbankConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: QuizbankConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn config(&self) -> &QuizbankConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        let output = match args.command {
            Some(BaseCommand::Version) => format!("{} {}", self.name, self.version),
            Some(BaseCommand::Health) => self.health().await?,
            Some(BaseCommand::Serve { port, host }) => {
                self.serve(host.as_deref(), port).await?;
                String::new()
            }
            Some(BaseCommand::Topics) => self.topics().await?,
            Some(BaseCommand::Search {
                query,
                topic,
                difficulty,
                tag,
                page,
            }) => {
                self.search(&SearchOptions {
                    query,
                    topic,
                    difficulty,
                    tag,
                    page,
                })
                .await?
            }
            Some(BaseCommand::Config(config_cmd)) => {
                return config_handlers::handle_config_command(
                    args.config.as_deref(),
                    config_cmd.command,
                );
            }
            None => format!("{} {}: use --help for usage", self.name, self.version),
        };

        if !output.is_empty() {
            println!("{output}");
        }
        Ok(())
    }

    fn store(&self) -> Result<JsonStore> {
        Ok(JsonStore::new(self.config.data_dir()?))
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    async fn serve(&self, host: Option<&str>, port: Option<u16>) -> Result<()> {
        let addr = self.config.server.socket_addr(host, port).await?;
        let store = self.store()?;
        info!(data_dir = %store.data_dir().display(), "serving {}", self.name);

        let state = SiteState::new(Arc::new(store), self.config.site.settings());
        quizbank_site::serve(state, addr).await.map_err(Error::io)
    }

    /// The topic index must parse; individual topic files are not checked.
    async fn health(&self) -> Result<String> {
        let store = self.store()?;
        let topics = store.list_topics().await?;
        Ok(format!(
            "{}: healthy ({} topics in {})",
            self.name,
            topics.len(),
            store.data_dir().display()
        ))
    }

    async fn topics(&self) -> Result<String> {
        let summaries = self.store()?.topic_summaries().await;
        if summaries.is_empty() {
            return Ok("No topics available.".to_string());
        }
        let width = summaries
            .iter()
            .map(|s| s.topic.slug.len())
            .max()
            .unwrap_or_default();
        let lines: Vec<String> = summaries
            .iter()
            .map(|s| {
                format!(
                    "{:width$}  {} ({} questions)",
                    s.topic.slug, s.topic.name, s.count
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Run the query engine over one topic or every topic.
    pub async fn search(&self, options: &SearchOptions) -> Result<String> {
        let state = options.filter_state()?;
        let store = self.store()?;
        match &options.topic {
            Some(slug) => {
                let data = store.load_topic(slug).await?;
                Ok(render_results(&state.apply(&data.questions)))
            }
            None => {
                let all = store.all_questions().await;
                Ok(render_results(&state.apply(&all)))
            }
        }
    }
}

/// One numbered line per question on the page, then the summary and the
/// page position.
fn render_results<R: Searchable>(result: &QueryResult<'_, R>) -> String {
    if result.matched() == 0 {
        return EMPTY_STATE.to_string();
    }

    let page = result.page();
    let mut out = String::new();
    for (i, record) in page.items.iter().enumerate() {
        let question = record.question();
        let number = page.first_index() + i + 1;
        out.push_str(&format!("{number}. [{}] ", question.difficulty));
        if let Some(topic) = record.topic_name() {
            out.push_str(&format!("({topic}) "));
        }
        out.push_str(&question.q);
        out.push('\n');
        if !question.tags.is_empty() {
            out.push_str(&format!("   tags: {}\n", question.tags.join(", ")));
        }
    }
    out.push('\n');
    out.push_str(&result.summary());
    out.push('\n');
    out.push_str(&format!("Page {} of {}", page.number, page.total_pages));
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use clap::Parser;
    use tempfile::TempDir;

    fn question_json(id: usize, difficulty: &str, tags: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "id": id.to_string(),
            "q": format!("Question {id} about borrowing"),
            "a": "Answer",
            "difficulty": difficulty,
            "tags": tags,
        })
    }

    /// A data dir with `rust` (150 questions) and `go` (2 questions).
    fn seeded() -> (TempDir, QuizbankCli) {
        let dir = TempDir::new().unwrap();
        let topics = serde_json::json!([
            {"slug": "rust", "name": "Rust", "color": "orange"},
            {"slug": "go", "name": "Go", "color": "sky"},
        ]);
        std::fs::write(dir.path().join("topics.json"), topics.to_string()).unwrap();

        let rust: Vec<_> = (1..=150)
            .map(|i| {
                let difficulty = if i % 3 == 0 { "Hard" } else { "Easy" };
                question_json(i, difficulty, &["ownership"])
            })
            .collect();
        let rust = serde_json::json!({"slug": "rust", "questions": rust});
        std::fs::write(dir.path().join("rust.json"), rust.to_string()).unwrap();

        let go = serde_json::json!({"slug": "go", "questions": [
            question_json(1, "Medium", &["goroutines"]),
            {"id": "2", "q": "What is a channel?", "a": "A pipe", "difficulty": "Easy", "tags": []},
        ]});
        std::fs::write(dir.path().join("go.json"), go.to_string()).unwrap();

        let config = QuizbankConfig {
            data: DataConfig {
                path: Some(dir.path().to_string_lossy().into_owned()),
            },
            ..Default::default()
        };
        (dir, QuizbankCli::new("quizbank", config))
    }

    fn options(query: &str) -> SearchOptions {
        SearchOptions {
            query: query.to_string(),
            difficulty: "All".to_string(),
            page: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_quizbank_cli_new() {
        let cli = QuizbankCli::new("quizbank", QuizbankConfig::default());
        assert_eq!(cli.name, "quizbank");
        assert_eq!(cli.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(cli.config().project_name(), "quizbank");
    }

    #[test]
    fn test_quizbank_cli_from_args_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n[server]\nport = 9090\n").unwrap();

        let args = CliArgs::parse_from(["quizbank", "--config", path.to_str().unwrap()]);
        let cli = QuizbankCli::from_args("quizbank", &args).unwrap();
        assert_eq!(cli.config().project_name(), "from-file");
        assert_eq!(cli.config().server.port, 9090);
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        let cli = QuizbankCli::new("quizbank", QuizbankConfig::default());
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[tokio::test]
    async fn test_health_and_topics() {
        let (_dir, cli) = seeded();
        let health = cli.health().await.unwrap();
        assert!(health.starts_with("quizbank: healthy (2 topics"));

        let topics = cli.topics().await.unwrap();
        let lines: Vec<&str> = topics.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("rust"));
        assert!(lines[0].ends_with("Rust (150 questions)"));
        assert!(lines[1].ends_with("Go (2 questions)"));
    }

    #[tokio::test]
    async fn test_health_fails_without_index() {
        let dir = TempDir::new().unwrap();
        let config = QuizbankConfig {
            data: DataConfig {
                path: Some(dir.path().to_string_lossy().into_owned()),
            },
            ..Default::default()
        };
        let cli = QuizbankCli::new("quizbank", config);
        assert!(cli.health().await.is_err());
        assert_eq!(cli.topics().await.unwrap(), "No topics available.");
    }

    #[tokio::test]
    async fn test_search_site_wide_pages() {
        let (_dir, cli) = seeded();

        let first = cli.search(&options("borrowing")).await.unwrap();
        assert!(first.starts_with("1. [Easy] (Rust) Question 1 about borrowing"));
        assert!(first.contains("Showing 100 of 151 questions (filtered from 152)"));
        assert!(first.ends_with("Page 1 of 2"));

        let second = cli
            .search(&SearchOptions {
                page: 2,
                ..options("borrowing")
            })
            .await
            .unwrap();
        assert!(second.starts_with("101. "));
        assert!(second.contains("(Go) Question 1 about borrowing"));
        assert!(second.contains("Showing 51 of 151 questions"));
        assert!(second.ends_with("Page 2 of 2"));
    }

    #[tokio::test]
    async fn test_search_page_is_clamped() {
        let (_dir, cli) = seeded();
        let out = cli
            .search(&SearchOptions {
                page: 99,
                ..options("")
            })
            .await
            .unwrap();
        assert!(out.ends_with("Page 2 of 2"));
    }

    #[tokio::test]
    async fn test_search_within_topic_with_filters() {
        let (_dir, cli) = seeded();
        let out = cli
            .search(&SearchOptions {
                topic: Some("rust".into()),
                difficulty: "Hard".into(),
                tag: Some("ownership".into()),
                ..options("")
            })
            .await
            .unwrap();
        assert!(out.starts_with("1. [Hard] Question 3 about borrowing"));
        assert!(out.contains("   tags: ownership"));
        assert!(out.contains("Showing 50 of 50 questions (filtered from 150)"));
        assert!(out.ends_with("Page 1 of 1"));
    }

    #[tokio::test]
    async fn test_search_no_matches_and_errors() {
        let (_dir, cli) = seeded();
        assert_eq!(cli.search(&options("zebra")).await.unwrap(), EMPTY_STATE);

        let bad_difficulty = SearchOptions {
            difficulty: "Impossible".into(),
            ..options("")
        };
        assert!(cli.search(&bad_difficulty).await.is_err());

        let missing_topic = SearchOptions {
            topic: Some("python".into()),
            ..options("")
        };
        assert!(cli.search(&missing_topic).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_run_commands() {
        let (_dir, cli) = seeded();
        for argv in [
            vec!["quizbank", "version"],
            vec!["quizbank", "health"],
            vec!["quizbank", "topics"],
            vec!["quizbank", "search", "channel", "--topic", "go"],
            vec!["quizbank"],
        ] {
            let args = CliArgs::parse_from(argv);
            assert!(cli.run(args).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_run_config_dispatch() {
        let cli = QuizbankCli::new("quizbank", QuizbankConfig::default());
        let args = CliArgs::parse_from(["quizbank", "config", "path"]);
        assert!(cli.run(args).await.is_ok());
    }
}
