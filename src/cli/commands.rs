//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(about = "Terminal note keeper with JSON storage and CSV exchange", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Notes file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        title: String,
        content: String,
    },

    /// List all notes
    List,

    /// Show a single note
    Show { id: i64 },

    /// Edit a note (omitted or empty fields are left unchanged)
    Edit {
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete { id: i64 },

    /// Export all notes to a CSV file
    Export { path: PathBuf },

    /// Import notes from a CSV file
    Import { path: PathBuf },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
