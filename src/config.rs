use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the binary reports a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Player one's win count on its own
    #[default]
    Count,
    /// The full tally as JSON
    Json,
}

/// Configuration for a batch run
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "pokerhands",
    version,
    about = "Count the rounds player one wins across a file of ten card deals"
)]
pub struct RunConfig {
    /// Deal file to read; stdin when unset
    #[arg(env = "POKER_HANDS_INPUT")]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        short,
        env = "POKER_HANDS_OUTPUT",
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Count
    )]
    pub output: OutputFormat,
}

impl RunConfig {
    /// Read the command line, falling back to `POKER_HANDS_*` variables.
    pub fn new() -> Self {
        Self::parse()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: OutputFormat::Count,
        }
    }
}
