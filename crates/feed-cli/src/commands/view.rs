//! View command
//!
//! Open the feed in the terminal UI.

use anyhow::Result;
use clap::Args;
use feed_ui::App;

use super::CommandContext;

/// Arguments for the view command
#[derive(Debug, Default, Args)]
pub struct ViewArgs {
    /// Hide the profile sidebar
    #[arg(long)]
    pub no_sidebar: bool,
}

/// Execute the view command
pub fn execute(args: ViewArgs, context: &CommandContext) -> Result<()> {
    let mut config = context.config()?;
    if args.no_sidebar {
        config.ui.show_sidebar = false;
    }

    let feed = context.feed(&config)?;
    tracing::info!("Opening feed with {} posts", feed.len());

    let mut app = App::new(feed, &config);
    app.run()?;

    let comments = app.feed().comment_count();
    tracing::debug!("Session ended with {} comments (not persisted)", comments);
    Ok(())
}
