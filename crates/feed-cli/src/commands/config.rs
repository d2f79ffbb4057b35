//! Config command
//!
//! Inspect feedview configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use feed_core::config::Config;

use super::CommandContext;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print where the configuration file is looked up
    Path,

    /// Print the default configuration
    Default,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, context: &CommandContext) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(context, json),
        ConfigCommand::Path => show_path(context),
        ConfigCommand::Default => {
            print!("{}", Config::default().to_toml()?);
            Ok(())
        }
    }
}

fn show_config(context: &CommandContext, as_json: bool) -> Result<()> {
    let config = context.config()?;

    if as_json {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{}", json);
    } else {
        print!("{}", config.to_toml()?);
    }

    Ok(())
}

fn show_path(context: &CommandContext) -> Result<()> {
    match context.config_path.clone().or_else(Config::default_path) {
        Some(path) => {
            let status = if path.exists() {
                "found".green()
            } else {
                "not found, using defaults".yellow()
            };
            println!("{} ({})", path.display(), status);
        }
        None => println!("{}", "No configuration directory available".yellow()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_show_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntheme = \"mono\"\n").unwrap();

        let context = CommandContext {
            config_path: Some(path),
            feed_path: None,
        };
        assert_eq!(context.config().unwrap().ui.theme, "mono");
        assert!(show_config(&context, true).is_ok());
    }
}
