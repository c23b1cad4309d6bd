//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// apidocx - OpenAPI to Word documentation
///
/// Reads an OpenAPI document and writes a .docx file with endpoint
/// summaries, parameter lists and synthesized request/response examples.
#[derive(Parser, Debug)]
#[command(
    name = "apidocx",
    version,
    author,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to the OpenAPI document (JSON; .yaml/.yml also accepted)
    #[arg(short, long, value_name = "INPUT")]
    pub input: PathBuf,

    /// Path of the .docx file to write (parent directories are created)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Enable verbose logging (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, env = "APIDOCX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}
