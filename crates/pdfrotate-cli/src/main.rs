//! rotate - Rotate every page of a PDF document.
//!
//! Exit codes: 0 on success, 1 when processing fails, 2 when the arguments
//! or paths are rejected before processing.

mod cli;

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use pdfrotate::config::Config;
use pdfrotate::error::PdfRotateError;
use pdfrotate::output::{OutputFormatter, display_rotation_report};
use pdfrotate::rotate::rotate_with_config;
use pdfrotate::validation::Validator;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match prepare(&cli) {
        Ok(config) => config,
        Err(err) if err.is_validation() => usage_error(&err),
        Err(err) => return report_failure(&err, &OutputFormatter::default()),
    };

    run(&config)
}

/// Build the configuration and check the paths it names.
fn prepare(cli: &Cli) -> Result<Config, PdfRotateError> {
    let config = cli.to_config()?;
    Validator::new().validate_config(&config)?;
    Ok(config)
}

/// Main application logic.
fn run(config: &Config) -> ExitCode {
    let formatter = OutputFormatter::from_config(config);

    tracing::debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        rotation = config.rotation(),
        "starting rotation"
    );

    match rotate_with_config(config) {
        Ok(report) => {
            if config.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        return report_failure(&PdfRotateError::other(err.to_string()), &formatter);
                    }
                }
            } else {
                display_rotation_report(&formatter, &report);
            }
            ExitCode::SUCCESS
        }
        Err(err) => report_failure(&err, &formatter),
    }
}

/// Report a validation failure through clap and exit with status 2.
fn usage_error(err: &PdfRotateError) -> ! {
    Cli::command()
        .error(clap::error::ErrorKind::ValueValidation, format!("Error: {err}"))
        .exit()
}

/// Print a runtime failure on stdout and return exit status 1.
fn report_failure(err: &PdfRotateError, formatter: &OutputFormatter) -> ExitCode {
    tracing::debug!(error = ?err, "rotation failed");
    formatter.error(&failure_message(err));
    ExitCode::from(err.exit_code() as u8)
}

/// User-facing message for a runtime failure, by category.
fn failure_message(err: &PdfRotateError) -> String {
    match err {
        PdfRotateError::MalformedPdf { .. } => {
            "Error: Unable to read the PDF (invalid or corrupted file?).".to_string()
        }
        PdfRotateError::EmptyDocument { .. } | PdfRotateError::EncryptedPdf { .. } => {
            format!("Error: {err}")
        }
        _ if err.is_permission_denied() => format!("Error: Permission denied - {err}"),
        _ if err.io_source().is_some() => format!("Error: File system error - {err}"),
        _ => format!("Unexpected error: {err}"),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
