//! Shared helpers for pdfrotate integration tests.
//!
//! Fixtures are generated with `lopdf` instead of being checked in.

#![allow(dead_code)]

use lopdf::{Document, Object, ObjectId, dictionary};
use pdfrotate::rotate::PageRotator;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a PDF with `pages` blank 400x600 pages, each rotated by
/// `initial_rotation`, and return its path.
pub fn create_sample_pdf(dir: &TempDir, name: &str, pages: usize, initial_rotation: i64) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let page_ids: Vec<ObjectId> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 400.into(), 600.into()],
                "Rotate" => initial_rotation.rem_euclid(360),
            })
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.into_iter().map(Object::from).collect::<Vec<Object>>(),
            "Count" => pages as i64,
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.path().join(name);
    doc.save(&path).expect("Failed to write sample PDF");
    path
}

/// Effective rotation of every page, in page order.
pub fn page_rotations(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).expect("Failed to load PDF");
    let rotator = PageRotator::new();
    doc.get_pages()
        .into_values()
        .map(|id| rotator.page_rotation(&doc, id).expect("Unreadable rotation"))
        .collect()
}
