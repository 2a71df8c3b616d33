use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use tally_core::VERSION;

/// Tally - small console record keepers and calculators
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "TALLY_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Directory where exports are written
    #[arg(long, global = true, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_name = "FORMAT", value_parser = ["plain", "pretty"])]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Quiet mode (no menus or banners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage contacts
    Contacts {
        /// Start without the sample contacts
        #[arg(long)]
        empty: bool,
    },

    /// Query the library catalog
    Library,

    /// Manage notes
    Notes,

    /// Manage a to-do list
    Tasks,

    /// Body-mass index calculator with history
    Bmi,

    /// Temperature converter
    Temperature,

    /// Number guessing game
    Guess {
        /// Fixed secret number
        #[arg(long, hide = true)]
        secret: Option<i64>,
    },

    /// Word statistics over a text
    Text {
        /// Analyze this file instead of the sample text
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// List transformations over integers
    Numbers {
        /// Numbers to process (defaults to 1..=10)
        #[arg(value_name = "N", allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Threshold for the "greater than" sum
        #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
        threshold: i64,
    },

    /// Four-function calculator
    Calc {
        /// First operand
        #[arg(allow_negative_numbers = true)]
        a: Option<f64>,

        /// Operator: + - * /
        op: Option<String>,

        /// Second operand
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },

    /// Register a user
    Register {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        age: Option<i64>,
    },

    /// Print a time-of-day greeting
    Greet {
        /// Name to greet
        name: Option<String>,

        /// Hour of day (0-23), defaults to the local time
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Contacts { .. } => "contacts",
            Self::Library => "library",
            Self::Notes => "notes",
            Self::Tasks => "tasks",
            Self::Bmi => "bmi",
            Self::Temperature => "temperature",
            Self::Guess { .. } => "guess",
            Self::Text { .. } => "text",
            Self::Numbers { .. } => "numbers",
            Self::Calc { .. } => "calc",
            Self::Register { .. } => "register",
            Self::Greet { .. } => "greet",
            Self::Completions { .. } => "completions",
        }
    }
}
