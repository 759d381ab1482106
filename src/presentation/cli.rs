//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --locale, --verbose) are inherited by all subcommands
//! - Running without a subcommand on a terminal starts the interactive prompts

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Locale;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Zodiac - Chinese zodiac signs and parent-child compatibility
#[derive(Parser, Debug)]
#[command(name = "zodiac")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'zodiac' without arguments for interactive prompts.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Display language for names and labels
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the sign for a birth year
    Sign {
        /// Gregorian birth year
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Score a child's sign against a parent's sign
    Match {
        /// Child's birth year
        #[arg(long, allow_negative_numbers = true)]
        child: i32,

        /// Parent's birth year
        #[arg(long, allow_negative_numbers = true)]
        parent: i32,
    },

    /// Score a child against both parents
    Family {
        /// Child's birth year
        #[arg(long, allow_negative_numbers = true)]
        child: i32,

        /// Father's birth year
        #[arg(long, allow_negative_numbers = true)]
        father: i32,

        /// Mother's birth year
        #[arg(long, allow_negative_numbers = true)]
        mother: Option<i32>,
    },

    /// Print the full compatibility matrix
    Matrix,

    /// Validate free-text year input (exit 1 when invalid)
    Validate {
        /// Raw input, e.g. "1996"
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Audit the built-in score and narrative tables
    Check,

    /// Show version information
    Version,
}
