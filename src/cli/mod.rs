//! Command-line interface for the MindEase client.
//!
//! The CLI plays the role the app's UI screens play on-device: it collects
//! input, calls the client, and renders the sentinel-shaped results.

use clap::{Parser, Subcommand};

use crate::constants::{APP_DESCRIPTION, APP_NAME};

/// A mood journaling client for the MindEase backend
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Backend account username
    #[clap(short, long, global = true)]
    pub username: Option<String>,

    /// Backend account password (prompted interactively if omitted)
    #[clap(short, long, global = true)]
    pub password: Option<String>,

    /// Print verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new account (does not log in)
    Register {
        /// Display name for the new account
        #[clap(short, long, default_value = "New user")]
        nickname: String,
    },

    /// Write a new diary entry
    Write {
        /// The entry text
        content: String,

        /// Mood score for the entry (1-10)
        #[clap(short, long, default_value_t = 5)]
        mood: i32,

        /// Entry category, e.g. work, life, study
        #[clap(short, long, default_value = "life")]
        category: String,
    },

    /// List your active diary entries
    List,

    /// List entries currently in the trash
    Trash,

    /// Show mood statistics and the weekly summary
    Stats,

    /// Move an entry to the trash
    Delete {
        /// Id of the entry to trash
        id: i64,
    },

    /// Restore an entry from the trash
    Restore {
        /// Id of the entry to restore
        id: i64,
    },

    /// Permanently delete a trashed entry (cannot be undone)
    Purge {
        /// Id of the entry to purge
        id: i64,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
