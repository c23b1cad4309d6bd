//! apidocx CLI - turn OpenAPI documents into Word files
//!
//! This is the main entry point: it parses arguments, loads configuration,
//! sets up logging and runs a single conversion.

mod cli;
mod config;
mod error;
mod logging;
mod output;

use apidocx_core::convert_file;
use cli::Cli;
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    let result = Config::load_with_file(cli.config.as_deref()).and_then(|config| {
        control::set_override(cli.use_color() && config.output.color);

        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }

        run(&cli, &config)
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip_all, fields(input = %cli.input.display(), output = %cli.output.display()))]
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let timer = Timer::with_details("convert", &cli.input.display().to_string());
    let _entered = timer.span().enter();

    let mut output = OutputWriter::new(cli.use_color() && config.output.color, cli.quiet);
    let language = config.document.language;

    tracing::info!(
        language = %language,
        verbosity = cli.verbosity_level(),
        "Converting OpenAPI document"
    );

    let summary = convert_file(&cli.input, &cli.output, language)?;

    if summary.operations == 0 {
        output.warning(&format!(
            "No operations found in {}; the document only has front matter",
            cli.input.display()
        ))?;
    }

    output.success(&format!(
        "Wrote {} ({} operations, {} bytes)",
        cli.output.display(),
        summary.operations,
        summary.bytes
    ))?;

    Ok(())
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);

    logging_config.apply_file_settings(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
