use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stacks & Queues - stack/queue exercises from the command line
#[derive(Parser)]
#[command(name = "stacks-and-queues")]
#[command(about = "Stack and queue exercises: rotation, string reversal, balanced brackets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every exercise over the demo inputs
    Demo {
        /// Path to a demo configuration file (defaults to the built-in inputs)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Save the configuration in use to a file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rotate a list of integers K times
    Rotate {
        /// Rotation direction (left, right)
        #[arg(short, long, default_value = "right")]
        direction: String,
        /// Number of single-element steps
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        steps: isize,
        /// Items to rotate
        #[arg(allow_negative_numbers = true)]
        items: Vec<i64>,
    },
    /// Reverse a string using a stack
    Reverse {
        /// Text to reverse
        #[arg(default_value = "")]
        text: String,
    },
    /// Check whether a string of brackets is balanced
    Balanced {
        /// Bracket sequence to check
        text: String,
    },
    /// Validate a demo configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
