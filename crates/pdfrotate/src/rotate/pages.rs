//! Page-level rotation.
//!
//! A page's `/Rotate` entry is inheritable: when the page dictionary has
//! none, the value comes from the nearest `/Pages` ancestor. Rotated pages
//! always receive their own entry, so inherited values stay untouched on
//! the parent nodes.

use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;

use crate::error::{PdfRotateError, Result};

/// Guard against `/Parent` cycles in broken page trees.
const MAX_TREE_DEPTH: usize = 256;

/// Add `delta` degrees to `current` and normalize into `[0, 360)`.
///
/// Both operands are reduced first, so the sum cannot overflow for any
/// `i64` inputs.
///
/// # Examples
///
/// ```
/// use pdfrotate::rotate::normalize_rotation;
///
/// assert_eq!(normalize_rotation(0, -90), 270);
/// assert_eq!(normalize_rotation(90, 90), 180);
/// assert_eq!(normalize_rotation(270, 450), 0);
/// ```
pub fn normalize_rotation(current: i64, delta: i64) -> i64 {
    (current.rem_euclid(360) + delta.rem_euclid(360)).rem_euclid(360)
}

/// Reads and rewrites page rotations in a document.
#[derive(Debug, Clone, Default)]
pub struct PageRotator {
    /// Source file, used in error messages.
    source: PathBuf,
}

impl PageRotator {
    /// Create a new page rotator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rotator whose errors name the given source file.
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Effective rotation of a page, following `/Parent` links when the
    /// page has no `/Rotate` of its own. Defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns [`PdfRotateError::MalformedPdf`] if a node in the page tree
    /// is not a dictionary, the `/Rotate` value is not numeric, or the tree
    /// is cyclic.
    pub fn page_rotation(&self, doc: &Document, page_id: ObjectId) -> Result<i64> {
        let mut node_id = page_id;

        for _ in 0..MAX_TREE_DEPTH {
            let node = doc.get_dictionary(node_id).map_err(|e| {
                self.malformed(format!("page tree node {node_id:?} is unreadable: {e}"))
            })?;

            if let Ok(value) = node.get(b"Rotate") {
                return self.rotation_value(doc, value);
            }

            match node.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent_id) => node_id = parent_id,
                Err(_) => return Ok(0),
            }
        }

        Err(self.malformed(format!(
            "page tree above {page_id:?} is deeper than {MAX_TREE_DEPTH} levels"
        )))
    }

    fn rotation_value(&self, doc: &Document, value: &Object) -> Result<i64> {
        let (_, value) = doc
            .dereference(value)
            .map_err(|e| self.malformed(format!("unresolvable /Rotate reference: {e}")))?;

        match value {
            Object::Integer(degrees) => Ok(*degrees),
            Object::Real(degrees) => Ok(degrees.trunc() as i64),
            _ => Err(self.malformed("/Rotate is not a number")),
        }
    }

    /// Rotate every page by `delta` degrees.
    ///
    /// Each page's `/Rotate` becomes `(current + delta) mod 360`. Pages are
    /// visited in document order.
    ///
    /// # Returns
    ///
    /// The number of pages rotated.
    ///
    /// # Errors
    ///
    /// Returns [`PdfRotateError::MalformedPdf`] if a page's rotation cannot
    /// be read or the page object is not a dictionary.
    pub fn rotate_all_pages(&self, doc: &mut Document, delta: i64) -> Result<usize> {
        if delta % 90 != 0 {
            tracing::warn!(delta, "rotation is not a multiple of 90 degrees");
        }

        let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();

        for &(page_number, page_id) in &pages {
            let current = self.page_rotation(doc, page_id)?;
            let rotated = normalize_rotation(current, delta);
            self.set_rotation(doc, page_id, rotated)?;

            tracing::debug!(page = page_number, from = current, to = rotated, "rotated page");
        }

        Ok(pages.len())
    }

    fn set_rotation(&self, doc: &mut Document, page_id: ObjectId, degrees: i64) -> Result<()> {
        let page = doc
            .get_object_mut(page_id)
            .and_then(Object::as_dict_mut)
            .map_err(|e| self.malformed(format!("page {page_id:?} is not a dictionary: {e}")))?;

        page.set("Rotate", Object::Integer(degrees));
        Ok(())
    }

    fn malformed(&self, reason: impl Into<String>) -> PdfRotateError {
        PdfRotateError::malformed_pdf(self.source.clone(), reason)
    }
}
