//! Input and output path validation.
//!
//! These checks run before any document is loaded:
//! - the input exists and is a regular file
//! - the output does not resolve to the input
//!
//! # Examples
//!
//! ```no_run
//! use pdfrotate::config::Config;
//! use pdfrotate::validation::Validator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("scan.pdf", None);
//! Validator::new().validate_config(&config)?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PdfRotateError, Result};

/// Filesystem checks for a rotation run.
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Run all checks for a configuration.
    ///
    /// # Errors
    ///
    /// Returns the first failing check from [`Config::validate`],
    /// [`Validator::validate_input`] or [`Validator::validate_output`].
    pub fn validate_config(&self, config: &Config) -> Result<()> {
        config.validate()?;
        self.validate_input(&config.input)?;
        self.validate_output(&config.input, &config.output)
    }

    /// Check that the input exists and is a regular file.
    ///
    /// A path whose existence cannot be determined, for example behind an
    /// unreadable directory, is reported as missing.
    ///
    /// # Errors
    ///
    /// Returns [`PdfRotateError::FileNotFound`] or [`PdfRotateError::NotAFile`].
    pub fn validate_input(&self, path: &Path) -> Result<()> {
        let exists = path.try_exists().unwrap_or_else(|e| {
            tracing::debug!(path = %path.display(), error = %e, "cannot stat input");
            false
        });
        if !exists {
            return Err(PdfRotateError::file_not_found(path.to_path_buf()));
        }

        if !path.is_file() {
            return Err(PdfRotateError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }

    /// Check that writing `output` cannot overwrite `input`.
    ///
    /// Paths are compared in absolute form, and additionally in canonical
    /// form when the output already exists, which catches symlinks and
    /// `..` segments.
    ///
    /// # Errors
    ///
    /// Returns [`PdfRotateError::SameInputOutput`] on a collision.
    pub fn validate_output(&self, input: &Path, output: &Path) -> Result<()> {
        if resolve(input)? == resolve(output)? {
            return Err(PdfRotateError::same_input_output(output.to_path_buf()));
        }

        if let (Ok(input), Ok(output)) = (input.canonicalize(), output.canonicalize()) {
            if input == output {
                return Err(PdfRotateError::same_input_output(output));
            }
        }

        Ok(())
    }
}

fn resolve(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
