//! pdfrotate - Rotate every page of a PDF document.
//!
//! This library adds a relative rotation (a multiple of 90 degrees by
//! convention) to the `/Rotate` value of every page and writes the result
//! to a new file. It provides:
//!
//! - The rotation operation and its modulo-360 arithmetic
//! - Typed configuration for degrees and direction
//! - Path validation that prevents overwriting the source
//! - PDF loading and atomic writing
//!
//! # Examples
//!
//! ## Rotate a file
//!
//! ```no_run
//! use pdfrotate::rotate_pdf;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pages = rotate_pdf(Path::new("scan.pdf"), Path::new("scan_out.pdf"), 90)?;
//! println!("Rotated {pages} pages clockwise");
//! # Ok(())
//! # }
//! ```
//!
//! ## Using a configuration
//!
//! ```no_run
//! use pdfrotate::config::{Config, RotationDegrees, RotationDirection};
//! use pdfrotate::rotate::rotate_with_config;
//! use pdfrotate::validation::Validator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = Config::new("scan.pdf", None);
//! config.degrees = RotationDegrees::Deg180;
//! config.direction = RotationDirection::Clockwise;
//!
//! Validator::new().validate_config(&config)?;
//! let report = rotate_with_config(&config)?;
//! println!("Wrote {}", report.output.display());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod output;
pub mod rotate;
pub mod utils;
pub mod validation;


// Re-export commonly used types
pub use config::Config;
pub use error::{PdfRotateError, Result};
pub use rotate::{RotationReport, rotate_pdf, rotate_with_config};
