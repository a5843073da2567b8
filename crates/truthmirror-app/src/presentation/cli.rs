//! Command-line interface for the `truthmirror` binary.
//!
//! Configuration comes from `TRUTHMIRROR_*` environment variables
//! (see `truthmirror_infrastructure::config`).

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const ENVIRONMENT_HELP: &str = "\
Environment variables:
  TRUTHMIRROR_API_BASE_URL         Backend API (default http://localhost:8080/api)
  TRUTHMIRROR_TRANSCRIBE_URL       Speech-to-text endpoint
  TRUTHMIRROR_ACCESS_TOKEN         Bearer token for the backend
  TRUTHMIRROR_HTTP_TIMEOUT_SECS    Request timeout (default 30)
  TRUTHMIRROR_MOOD_RANGE           Daily feed range (default 1m)
  TRUTHMIRROR_LOG_DIR              Log directory
  TRUTHMIRROR_ENTRY_LENGTH_POLICY  as-shipped | bounded
  RUST_LOG                         Log filter override";

/// TruthMirror - mood journal companion
#[derive(Debug, Parser)]
#[command(name = "truthmirror")]
#[command(version)]
#[command(about = "Mood journal companion: streaks, themes, journal entries and playlists")]
#[command(after_help = ENVIRONMENT_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Refresh the streak; print theme, banner and copy
    Mood,
    /// Positive-streak statistics over the daily feed
    Stats {
        /// Feed range such as 1w, 1m or 3m
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        range: Option<String>,
    },
    /// Heatmap values and statistics
    Calendar {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        range: Option<String>,
    },
    /// Today's entry, analyzed mood and playlists
    Today,
    /// Save and analyze a journal entry
    Submit {
        /// Entry text; words are joined by single spaces
        #[arg(required = true, trailing_var_arg = true)]
        content: Vec<String>,
    },
    /// Run the local entry checks without saving
    Check {
        #[arg(required = true, trailing_var_arg = true)]
        content: Vec<String>,
    },
    /// The 20 most recent entries
    History,
    /// Playlists for an emotion label
    Playlists {
        #[arg(required = true, trailing_var_arg = true)]
        emotion: Vec<String>,
    },
    /// Transcribe a recorded voice note
    Transcribe {
        /// WAV file to upload
        path: PathBuf,
    },
    /// Forward a client log line
    Log {
        level: String,
        target: String,
        /// Structured fields as a JSON object
        #[arg(long)]
        fields: Option<String>,
        #[arg(required = true, trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Version and build profile
    Version,
}

/// Positional words joined by single spaces, so quoting is optional
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
