//! feedview - a social feed in the terminal
//!
//! Shows a list of posts, each with its own comment form and thread.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the feed
//! feedview
//!
//! # Print the feed without the TUI
//! feedview print
//!
//! # Use your own posts
//! feedview --feed posts.json
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
