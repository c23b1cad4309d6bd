//! Terminal output for conversion results
//!
//! Status lines go to stdout and are suppressed entirely with `--quiet`.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// Output writer for user-facing status lines
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self::with_writer(use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        debug!("Output success: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "✓".green().bold(), message))
        } else {
            self.writeln(&format!("SUCCESS: {}", message))
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        debug!("Output warning: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "⚠".yellow().bold(), message))
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }
}
