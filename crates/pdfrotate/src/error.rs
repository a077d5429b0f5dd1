//! Error types for pdfrotate.
//!
//! Errors fall into two groups. Validation errors are detected before any
//! document is touched and map to exit code 2. Runtime errors (unreadable
//! or empty documents, filesystem failures) map to exit code 1.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfrotate operations.
pub type Result<T> = std::result::Result<T, PdfRotateError>;

/// Main error type for pdfrotate operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfRotateError {
    /// Input file was not found.
    #[error("The input file '{}' does not exist.", .path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input path exists but is not a regular file.
    #[error("The input path '{}' is not a file.", .path.display())]
    NotAFile {
        /// Path that is not a file.
        path: PathBuf,
    },

    /// Output path resolves to the input path.
    #[error(
        "The output path cannot be the same as the input path (would overwrite the original): {}",
        .path.display()
    )]
    SameInputOutput {
        /// The colliding path.
        path: PathBuf,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// The input could not be parsed as a PDF document.
    #[error("Failed to read PDF: {}\n  Reason: {reason}", .path.display())]
    MalformedPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "The input PDF is encrypted and cannot be processed: {}\n  \
         Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// The document has no pages.
    #[error("The input PDF has no pages to rotate.")]
    EmptyDocument {
        /// Path to the empty PDF.
        path: PathBuf,
    },

    /// Failed to create the output file or its parent directories.
    #[error("{source}")]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write to the output file.
    #[error("{source}")]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Generic I/O error.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl PdfRotateError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a SameInputOutput error.
    pub fn same_input_output(path: PathBuf) -> Self {
        Self::SameInputOutput { path }
    }

    /// Create a MalformedPdf error.
    pub fn malformed_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::MalformedPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an EmptyDocument error.
    pub fn empty_document(path: PathBuf) -> Self {
        Self::EmptyDocument { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this error was raised by argument or path validation,
    /// before any document was read.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::NotAFile { .. }
                | Self::SameInputOutput { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// The underlying filesystem error, if this error carries one.
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::FailedToCreateOutput { source, .. } | Self::FailedToWrite { source, .. } => {
                Some(source)
            }
            Self::Io(source) => Some(source),
            _ => None,
        }
    }

    /// Whether the failure was caused by missing filesystem permissions.
    pub fn is_permission_denied(&self) -> bool {
        self.io_source()
            .is_some_and(|err| err.kind() == io::ErrorKind::PermissionDenied)
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() { 2 } else { 1 }
    }
}
