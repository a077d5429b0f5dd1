//! I/O operations for pdfrotate.
//!
//! This module handles loading PDF documents from disk and writing the
//! rotated result back out.
//!
//! # Examples
//!
//! ```no_run
//! use pdfrotate::io::{PdfReader, PdfWriter};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loaded = PdfReader::new().load(&PathBuf::from("input.pdf"))?;
//! PdfWriter::new().save_with_stats(&mut loaded.document, &PathBuf::from("output.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};

