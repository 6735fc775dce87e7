//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Emotion journal: record entries and track their sentiment", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Score a new entry and save it
    Add {
        /// Entry date (YYYY-MM-DD); today is used if missing or unparseable
        #[arg(short, long)]
        date: Option<String>,

        /// Override today's date (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,

        /// Entry text (read from stdin when omitted)
        text: Vec<String>,
    },

    /// Score text without saving it
    Analyze {
        /// Text to analyze (read from stdin when omitted)
        text: Vec<String>,
    },

    /// List saved entries with their emotion and compound score
    List {
        /// Show only the N most recent entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the 7-day mood trend and 30-day emotion distribution
    Dashboard {
        /// Override today's date (YYYY-MM-DD)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },

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
