//! Integration tests for error handling and edge cases.

use lopdf::{Document, dictionary};
use pdfrotate::config::Config;
use pdfrotate::error::PdfRotateError;
use pdfrotate::rotate_pdf;
use pdfrotate::validation::Validator;
use tempfile::TempDir;

use crate::common::create_sample_pdf;

#[test]
fn test_error_empty_pdf() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 0, 0);
    let output = dir.path().join("output.pdf");

    let err = rotate_pdf(&input, &output, 90).unwrap_err();

    assert!(matches!(err, PdfRotateError::EmptyDocument { .. }));
    assert!(err.to_string().contains("no pages"));
    assert!(!output.exists(), "No output may be written for an empty PDF");
}

#[test]
fn test_error_invalid_pdf() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("invalid.pdf");
    std::fs::write(&input, "this is not a PDF").unwrap();
    let output = dir.path().join("output.pdf");

    let err = rotate_pdf(&input, &output, 90).unwrap_err();

    assert!(matches!(err, PdfRotateError::MalformedPdf { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists());
}

#[test]
fn test_error_encrypted_pdf_not_processed() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);

    let mut doc = Document::load(&input).unwrap();
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => lopdf::Object::string_literal(vec![0u8; 32]),
        "U" => lopdf::Object::string_literal(vec![0u8; 32]),
        "P" => -4,
    });
    doc.trailer.set("Encrypt", encrypt_id);
    let encrypted = dir.path().join("encrypted.pdf");
    doc.save(&encrypted).unwrap();
    let output = dir.path().join("output.pdf");

    let err = rotate_pdf(&encrypted, &output, 90).unwrap_err();

    assert!(
        matches!(err, PdfRotateError::EncryptedPdf { .. }),
        "Expected EncryptedPdf, got {err:?}"
    );
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("encrypted"));
    assert!(!output.exists());
}

#[test]
fn test_error_output_is_existing_directory() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);
    let output = dir.path().join("taken");
    std::fs::create_dir(&output).unwrap();

    let err = rotate_pdf(&input, &output, 90).unwrap_err();

    assert!(err.io_source().is_some(), "Expected a filesystem error, got {err:?}");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_validation_rejects_overwrite() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);

    let config = Config::new(&input, Some(input.clone()));
    let err = Validator::new().validate_config(&config).unwrap_err();

    assert!(matches!(err, PdfRotateError::SameInputOutput { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_validation_rejects_missing_input() {
    let dir = TempDir::new().unwrap();
    let config = Config::new(dir.path().join("nonexistent.pdf"), None);

    let err = Validator::new().validate_config(&config).unwrap_err();

    assert!(matches!(err, PdfRotateError::FileNotFound { .. }));
    assert!(err.to_string().contains("does not exist"));
}
