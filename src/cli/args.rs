// src/cli/args.rs
use crate::constants::BASE_URL_ENV;
use crate::domain::Category;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Base URL of the note service
    #[arg(short, long, value_name = "URL", env = BASE_URL_ENV, global = true)]
    pub url: Option<String>,

    /// Path to config file (default: <config dir>/notedesk/config.toml)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, optionally filtered by title and category
    List {
        /// Case-insensitive title substring
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Only show notes of this category (Work, Personal, Others)
        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<Category>,

        /// Output notes as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Open the list as an HTML dashboard in the browser
        #[arg(long)]
        html: bool,
    },

    /// Show a single note
    View {
        #[arg(value_name = "NOTE_ID", value_parser = NonEmptyStringValueParser::new())]
        note_id: String,

        /// Output note as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Open the note in the browser
        #[arg(long)]
        html: bool,
    },

    /// Create a note
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        description: String,

        #[arg(short, long, value_name = "CATEGORY", default_value_t = Category::Others)]
        category: Category,
    },

    /// Update fields of an existing note
    Update {
        #[arg(value_name = "NOTE_ID", value_parser = NonEmptyStringValueParser::new())]
        note_id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long, value_name = "CATEGORY")]
        category: Option<Category>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID", value_parser = NonEmptyStringValueParser::new())]
        note_id: String,
    },
}
