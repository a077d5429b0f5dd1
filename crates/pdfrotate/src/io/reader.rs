//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfrotate::io::reader::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("scan.pdf"))?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{PdfRotateError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    fn new(document: Document, path: PathBuf) -> Self {
        let page_count = document.get_pages().len();
        let file_size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            document,
            path,
            page_count,
            file_size,
        }
    }
}

/// PDF reader that rejects documents it cannot rotate.
#[derive(Debug, Clone)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be parsed as a PDF ([`PdfRotateError::MalformedPdf`])
    /// - The PDF is encrypted ([`PdfRotateError::EncryptedPdf`])
    /// - The PDF has no pages ([`PdfRotateError::EmptyDocument`])
    /// - The file cannot be read ([`PdfRotateError::Io`])
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let doc = Document::load(path).map_err(|e| load_error(&path_buf, e))?;

        if doc.is_encrypted() {
            return Err(PdfRotateError::encrypted_pdf(path_buf));
        }

        if doc.get_pages().is_empty() {
            return Err(PdfRotateError::empty_document(path_buf));
        }

        let loaded = LoadedPdf::new(doc, path_buf);
        tracing::info!(
            path = %loaded.path.display(),
            pages = loaded.page_count,
            version = %loaded.document.version,
            size = loaded.file_size,
            "loaded PDF"
        );

        Ok(loaded)
    }
}

fn load_error(path: &Path, err: lopdf::Error) -> PdfRotateError {
    match err {
        lopdf::Error::IO(source) => PdfRotateError::Io(source),
        lopdf::Error::Decryption(_) | lopdf::Error::UnsupportedSecurityHandler(_) => {
            PdfRotateError::encrypted_pdf(path.to_path_buf())
        }
        other => PdfRotateError::malformed_pdf(path.to_path_buf(), other.to_string()),
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
