//! The `quizbank` command-line application.
//!
//! # Key Abstractions
//!
//! - [`QuizbankCli`]: loads [`QuizbankConfig`] and dispatches commands
//! - [`CliArgs`]: clap-derived arguments and subcommands

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;

pub use app::{QuizbankCli, SearchOptions};
pub use cli::{BaseCommand, CliArgs, ConfigAction, ConfigCommand};
pub use config::QuizbankConfig;
