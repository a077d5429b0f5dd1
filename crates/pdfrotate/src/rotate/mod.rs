//! PDF rotation operations.
//!
//! Loads a document, adds a relative angle to every page's rotation and
//! writes the result to a new file. The input file is never modified.
//!
//! # Examples
//!
//! ```no_run
//! use pdfrotate::rotate::rotate_pdf;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 90 degrees counterclockwise
//! let pages = rotate_pdf(Path::new("scan.pdf"), Path::new("scan_out.pdf"), -90)?;
//! println!("Rotated {pages} pages");
//! # Ok(())
//! # }
//! ```

pub mod pages;

pub use pages::{PageRotator, normalize_rotation};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{Config, RotationDirection};
use crate::error::Result;
use crate::io::{PdfReader, PdfWriter, WriteOptions};

/// Summary of a completed rotation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationReport {
    /// Source document.
    pub input: PathBuf,

    /// Written document.
    pub output: PathBuf,

    /// Number of pages rotated.
    pub page_count: usize,

    /// Requested magnitude in degrees.
    pub degrees: u16,

    /// Requested direction.
    pub direction: RotationDirection,

    /// Signed angle applied to every page.
    pub rotation: i64,

    /// Size of the written file in bytes.
    pub output_size: u64,
}

/// Rotate every page of `input` by `rotation` degrees and write the result
/// to `output`.
///
/// Positive angles turn clockwise, negative angles counterclockwise. Each
/// page ends up with a rotation of `(current + rotation) mod 360`.
///
/// # Returns
///
/// The number of pages processed.
///
/// # Errors
///
/// - [`PdfRotateError::MalformedPdf`](crate::PdfRotateError::MalformedPdf)
///   if the input cannot be parsed
/// - [`PdfRotateError::EmptyDocument`](crate::PdfRotateError::EmptyDocument)
///   if it has no pages; nothing is written in that case
/// - filesystem errors from writing `output`, carrying the original
///   [`std::io::Error`]
pub fn rotate_pdf(input: &Path, output: &Path, rotation: i64) -> Result<usize> {
    rotate_file(input, output, rotation, WriteOptions::default()).map(|(pages, _)| pages)
}

/// Run a rotation described by a [`Config`].
///
/// # Errors
///
/// Same as [`rotate_pdf`].
pub fn rotate_with_config(config: &Config) -> Result<RotationReport> {
    let options = WriteOptions {
        compress: config.compress,
        ..Default::default()
    };
    let rotation = config.rotation();

    let (page_count, output_size) = rotate_file(&config.input, &config.output, rotation, options)?;

    Ok(RotationReport {
        input: config.input.clone(),
        output: config.output.clone(),
        page_count,
        degrees: config.degrees.as_degrees(),
        direction: config.direction,
        rotation,
        output_size,
    })
}

fn rotate_file(
    input: &Path,
    output: &Path,
    rotation: i64,
    options: WriteOptions,
) -> Result<(usize, u64)> {
    let mut loaded = PdfReader::new().load(input)?;

    let rotator = PageRotator::with_source(input);
    let page_count = rotator.rotate_all_pages(&mut loaded.document, rotation)?;

    let stats = PdfWriter::with_options(options).save_with_stats(&mut loaded.document, output)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        pages = page_count,
        rotation,
        "rotation complete"
    );

    Ok((page_count, stats.file_size))
}
