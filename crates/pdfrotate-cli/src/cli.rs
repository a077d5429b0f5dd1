//! CLI argument parsing for the `rotate` command.
//!
//! This module defines the command-line interface structure using `clap`
//! and converts parsed arguments into a [`Config`].

use clap::Parser;
use std::path::PathBuf;

use pdfrotate::config::{Config, RotationDegrees, RotationDirection};
use pdfrotate::error::{PdfRotateError, Result};

/// Rotate every page of a PDF file by 90, 180, or 270 degrees, clockwise or
/// counterclockwise.
///
/// The original file is never modified; the rotated document is written to
/// a new file.
#[derive(Parser, Debug)]
#[command(name = "rotate")]
#[command(version)]
#[command(
    about = "Rotate every page of a PDF file by 90, 180, or 270 degrees, clockwise or counterclockwise.",
    long_about = None
)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the input PDF file
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Path to the output rotated PDF file
    ///
    /// Optional; defaults to the input path with an '_out' suffix,
    /// e.g. scan.pdf becomes scan_out.pdf.
    #[arg(value_name = "OUTPUT")]
    pub output_path: Option<PathBuf>,

    /// Degrees to rotate
    #[arg(long, value_name = "DEGREES", default_value = "90")]
    #[arg(value_parser = ["90", "180", "270"])]
    pub degrees: String,

    /// Direction: 0 for counterclockwise, 1 for clockwise
    #[arg(long, value_name = "DIRECTION", default_value = "0")]
    #[arg(value_parser = ["0", "1"])]
    pub direction: String,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output - show run details and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Compress streams in the output PDF
    #[arg(long)]
    pub compress: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if the degrees or direction values are invalid or
    /// the resulting configuration is contradictory.
    pub fn to_config(&self) -> Result<Config> {
        let degrees: RotationDegrees = self.degrees.parse()?;

        let flag: u8 = self.direction.trim().parse().map_err(|_| {
            PdfRotateError::invalid_config(format!("Invalid direction: {}", self.direction))
        })?;
        let direction = RotationDirection::from_flag(flag)?;

        let mut config = Config::new(&self.input_path, self.output_path.clone());
        config.degrees = degrees;
        config.direction = direction;
        config.quiet = self.quiet;
        config.verbose = self.verbose;
        config.json = self.json;
        config.compress = self.compress;

        config.validate()?;

        Ok(config)
    }
}
