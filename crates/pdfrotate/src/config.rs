//! Configuration module for pdfrotate.
//!
//! This module turns command-line arguments into a validated configuration
//! that drives a rotation run. It handles:
//! - Parsing of the rotation magnitude and direction
//! - Derivation of the default output path
//! - Validation of argument combinations

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfRotateError, Result};

/// Suffix appended to the input file stem when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_out";

/// Magnitude of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u16")]
pub enum RotationDegrees {
    /// Quarter turn.
    #[default]
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turn.
    Deg270,
}

impl RotationDegrees {
    /// Parse rotation from degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the degrees value is not 90, 180, or 270.
    pub fn from_degrees(degrees: u16) -> Result<Self> {
        match degrees {
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(PdfRotateError::invalid_config(format!(
                "Invalid rotation: {degrees}. Must be 90, 180, or 270"
            ))),
        }
    }

    /// Get rotation as degrees.
    pub fn as_degrees(&self) -> u16 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl From<RotationDegrees> for u16 {
    fn from(degrees: RotationDegrees) -> Self {
        degrees.as_degrees()
    }
}

impl FromStr for RotationDegrees {
    type Err = PdfRotateError;

    fn from_str(s: &str) -> Result<Self> {
        let degrees: u16 = s.trim().parse().map_err(|_| {
            PdfRotateError::invalid_config(format!("Invalid rotation degrees: {s}"))
        })?;
        Self::from_degrees(degrees)
    }
}

impl fmt::Display for RotationDegrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_degrees())
    }
}

/// Direction of a rotation request.
///
/// On the command line the direction is a flag: `0` is counterclockwise
/// and `1` is clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationDirection {
    /// Rotate against the clock; the signed angle is negative.
    #[default]
    Counterclockwise,
    /// Rotate with the clock; the signed angle is positive.
    Clockwise,
}

impl RotationDirection {
    /// Parse a direction from its numeric flag.
    ///
    /// # Errors
    ///
    /// Returns an error for any flag other than 0 or 1.
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            0 => Ok(Self::Counterclockwise),
            1 => Ok(Self::Clockwise),
            _ => Err(PdfRotateError::invalid_config(format!(
                "Invalid direction: {flag}. Must be 0 (counterclockwise) or 1 (clockwise)"
            ))),
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Counterclockwise => "counterclockwise",
            Self::Clockwise => "clockwise",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Combine a magnitude and a direction into a signed angle.
///
/// Counterclockwise rotations are negative.
///
/// # Examples
///
/// ```
/// use pdfrotate::config::{signed_rotation, RotationDegrees, RotationDirection};
///
/// assert_eq!(signed_rotation(RotationDegrees::Deg90, RotationDirection::Counterclockwise), -90);
/// assert_eq!(signed_rotation(RotationDegrees::Deg270, RotationDirection::Clockwise), 270);
/// ```
pub fn signed_rotation(degrees: RotationDegrees, direction: RotationDirection) -> i64 {
    let magnitude = i64::from(degrees.as_degrees());
    match direction {
        RotationDirection::Counterclockwise => -magnitude,
        RotationDirection::Clockwise => magnitude,
    }
}

/// Derive `<stem>_out<ext>` next to the input file.
///
/// # Examples
///
/// ```
/// use pdfrotate::config::default_output_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     default_output_path(Path::new("docs/scan.pdf")),
///     PathBuf::from("docs/scan_out.pdf")
/// );
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();

    let mut file_name = stem;
    file_name.push(DEFAULT_OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    input.with_file_name(file_name)
}

/// Validated configuration for one rotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Input PDF path.
    pub input: PathBuf,

    /// Output PDF path.
    pub output: PathBuf,

    /// Magnitude of the rotation.
    pub degrees: RotationDegrees,

    /// Direction of the rotation.
    pub direction: RotationDirection,

    /// Suppress non-error output.
    pub quiet: bool,

    /// Show detailed output.
    pub verbose: bool,

    /// Print the run summary as JSON.
    pub json: bool,

    /// Compress object streams in the output.
    pub compress: bool,
}

impl Config {
    /// Create a configuration with default settings.
    ///
    /// The output path defaults to `<stem>_out<ext>` when `output` is `None`.
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        let input = input.into();
        let output = output.unwrap_or_else(|| default_output_path(&input));

        Self {
            input,
            output,
            degrees: RotationDegrees::default(),
            direction: RotationDirection::default(),
            quiet: false,
            verbose: false,
            json: false,
            compress: false,
        }
    }

    /// Signed rotation angle in degrees.
    pub fn rotation(&self) -> i64 {
        signed_rotation(self.degrees, self.direction)
    }

    /// Check the configuration for contradictory settings.
    ///
    /// This does not touch the filesystem; see
    /// [`Validator`](crate::validation::Validator) for path checks.
    ///
    /// # Errors
    ///
    /// Returns an error if the paths are empty or the output flags conflict.
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(PdfRotateError::invalid_config("No input file specified"));
        }

        if self.output.as_os_str().is_empty() {
            return Err(PdfRotateError::invalid_config("Output path cannot be empty"));
        }

        if self.quiet && self.verbose {
            return Err(PdfRotateError::invalid_config(
                "Cannot use both --quiet and --verbose",
            ));
        }

        Ok(())
    }
}
