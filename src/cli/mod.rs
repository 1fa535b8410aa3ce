// src/cli/mod.rs
use crate::models::SizeUnit;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "size-value")]
#[command(about = "Parse, format and convert byte sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Size config file (defaults to $SIZE_VALUE_CONFIG, ./size-value.yaml, then the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a size string such as 512k or 100b
    Parse {
        text: Option<String>,

        /// Used when no text is given
        #[arg(short, long)]
        default: Option<String>,

        #[arg(short, long)]
        json: bool,
    },

    /// Format a magnitude in a unit
    Format {
        #[arg(allow_negative_numbers = true)]
        size: i64,

        #[arg(short, long, default_value = "single")]
        unit: SizeUnit,
    },

    /// Convert a size string to another unit
    Convert {
        text: String,

        #[arg(short, long)]
        to: SizeUnit,

        /// Print the fractional magnitude instead of the truncated one
        #[arg(short, long)]
        frac: bool,
    },

    /// Show named sizes from the config file
    Config {
        #[arg(short, long)]
        key: Option<String>,

        #[arg(short, long)]
        json: bool,

        /// Write an example config if the file does not exist
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions (bash when no shell is given)
    Completion {
        shell: Option<Shell>,
    },
}
