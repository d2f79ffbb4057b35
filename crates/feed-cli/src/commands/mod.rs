//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod print;
pub mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feed_core::config::Config;
use feed_core::post::{default_posts, load_feed};
use feed_core::Feed;
use std::path::{Path, PathBuf};

/// feedview - a social feed in the terminal
#[derive(Debug, Parser)]
#[command(name = "feedview")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FEEDVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Feed file (JSON or TOML) to show instead of the built-in posts
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the feed in the terminal UI (default)
    View(view::ViewArgs),

    /// Print the feed to stdout
    Print(print::PrintArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the screen, so it only logs when asked to
    let is_tui = matches!(cli.command, None | Some(Commands::View(_)));
    if !is_tui || cli.verbose > 0 {
        setup_logging(cli.verbose);
    }

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let context = CommandContext {
        config_path: cli.config,
        feed_path: cli.feed,
    };

    // Dispatch to command handler
    match cli.command {
        None => view::execute(view::ViewArgs::default(), &context),
        Some(Commands::View(args)) => view::execute(args, &context),
        Some(Commands::Print(args)) => print::execute(args, &context),
        Some(Commands::Config(cmd)) => config::execute(cmd, &context),
    }
}

/// Global options shared by the commands
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config_path: Option<PathBuf>,
    pub feed_path: Option<PathBuf>,
}

impl CommandContext {
    /// Resolve the configuration
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.config_path.as_deref()).context("Failed to load configuration")
    }

    /// Build the feed from `--feed`, the configured path, or the built-in posts
    pub fn feed(&self, config: &Config) -> Result<Feed> {
        let path: Option<&Path> = self.feed_path.as_deref().or(config.feed.path.as_deref());
        let posts = match path {
            Some(path) => load_feed(path).with_context(|| format!("Failed to load feed {}", path.display()))?,
            None => default_posts(),
        };
        Feed::new(posts).context("Invalid feed")
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
