//! CLI argument parsing and command definitions.
//!
//! `quizbank [--config PATH] [-v|-q] <command>`: run the website, list
//! topics, query questions from the terminal, and manage the config file.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quizbank", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "QUIZBANK_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Run the website.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides `server.host`).
        #[arg(long)]
        host: Option<String>,
    },

    /// List topics with their question counts.
    Topics,

    /// Search questions, across all topics or within one.
    Search {
        /// Case-insensitive text to look for.
        query: String,

        /// Restrict to one topic slug.
        #[arg(short, long)]
        topic: Option<String>,

        /// Easy, Medium, Hard or All.
        #[arg(short, long, default_value = "All")]
        difficulty: String,

        /// Exact tag to require.
        #[arg(long)]
        tag: Option<String>,

        /// 1-based result page.
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Print version information.
    Version,

    /// Check that the topic index is readable.
    Health,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "server.port").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "site.title").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
