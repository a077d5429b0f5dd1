//! PDF writing and saving operations.
//!
//! This module provides safe PDF writing with:
//! - Creation of missing parent directories
//! - Atomic writes through a uniquely named sibling temp file
//! - Optional compression
//!
//! # Examples
//!
//! ```no_run
//! use pdfrotate::io::writer::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let stats = PdfWriter::new().save_with_stats(&mut doc, Path::new("output.pdf"))?;
//! println!("{} bytes", stats.file_size);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{PdfRotateError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Compress content streams before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            compress: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,

    /// Whether compression was applied.
    pub compressed: bool,
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF and return statistics about the operation.
    ///
    /// Missing parent directories are created first. The document is then
    /// serialized into a freshly created temp file in the destination
    /// directory and persisted over the destination, so a failed write never
    /// leaves a truncated output behind and never touches another file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfRotateError::FailedToCreateOutput`] if the directories
    /// or the temp file cannot be created, and [`PdfRotateError::FailedToWrite`]
    /// if serialization, flushing or the final rename fails. Both carry the
    /// original I/O error.
    pub fn save_with_stats(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(|e| {
                    PdfRotateError::FailedToCreateOutput {
                        path: parent.to_path_buf(),
                        source: e,
                    }
                })?;
                parent
            }
            None => Path::new("."),
        };

        if self.options.compress {
            doc.compress();
        }

        let temp = NamedTempFile::new_in(dir).map_err(|e| PdfRotateError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(temp = %temp.path().display(), "writing to temp file");

        // The temp file is deleted on drop if anything below fails.
        let temp = self.write_to(doc, temp, path)?;
        temp.persist(path).map_err(|e| PdfRotateError::FailedToWrite {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        let stats = WriteStatistics {
            file_size: std::fs::metadata(path).map(|m| m.len()).unwrap_or(0),
            output_path: path.to_path_buf(),
            compressed: self.options.compress,
        };

        tracing::info!(
            path = %path.display(),
            size = stats.file_size,
            compressed = stats.compressed,
            "wrote PDF"
        );

        Ok(stats)
    }

    fn write_to(
        &self,
        doc: &mut Document,
        temp: NamedTempFile,
        path: &Path,
    ) -> Result<NamedTempFile> {
        let failed = |e: std::io::Error| PdfRotateError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        };

        let mut writer = BufWriter::with_capacity(self.options.buffer_size, temp);
        doc.save_to(&mut writer)
            .map_err(|e| failed(std::io::Error::other(e)))?;
        writer.flush().map_err(failed)?;

        writer.into_inner().map_err(|e| failed(e.into_error()))
    }
}
