//! Integration tests for rotating documents on disk.

use pdfrotate::config::{Config, RotationDegrees, RotationDirection};
use pdfrotate::{rotate_pdf, rotate_with_config};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::{create_sample_pdf, page_rotations};

#[test]
fn test_basic_counterclockwise_90() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);
    let output = dir.path().join("output.pdf");

    rotate_pdf(&input, &output, -90).unwrap();

    assert_eq!(page_rotations(&output), vec![270]);
    assert_eq!(page_rotations(&input), vec![0], "input must be unchanged");
}

#[test]
fn test_input_named_like_writer_temp_survives() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, ".out.pdf.tmp", 1, 0);
    let before = std::fs::read(&input).unwrap();
    let output = dir.path().join("out.pdf");

    assert_eq!(rotate_pdf(&input, &output, 90).unwrap(), 1);

    assert_eq!(std::fs::read(&input).unwrap(), before);
    assert_eq!(page_rotations(&output), vec![90]);
}

#[test]
fn test_clockwise_90() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);
    let output = dir.path().join("output.pdf");

    rotate_pdf(&input, &output, 90).unwrap();

    assert_eq!(page_rotations(&output), vec![90]);
}

#[rstest]
#[case(180)]
#[case(-180)]
fn test_half_turn_either_direction(#[case] rotation: i64) {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);
    let output = dir.path().join("output.pdf");

    rotate_pdf(&input, &output, rotation).unwrap();

    assert_eq!(page_rotations(&output), vec![180]);
}

#[test]
fn test_multiple_pages() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 3, 0);
    let output = dir.path().join("output.pdf");

    let pages = rotate_pdf(&input, &output, -90).unwrap();

    assert_eq!(pages, 3);
    assert_eq!(page_rotations(&output), vec![270, 270, 270]);
}

#[test]
fn test_initial_rotation_is_added_to() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 90);
    let output = dir.path().join("output.pdf");

    rotate_pdf(&input, &output, 90).unwrap();

    assert_eq!(page_rotations(&output), vec![180]);
    assert_eq!(page_rotations(&input), vec![90]);
}

#[rstest]
#[case(1, 0)]
#[case(1, 270)]
#[case(4, 90)]
fn test_round_trip_restores_rotation(#[case] pages: usize, #[case] initial: i64) {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", pages, initial);
    let turned = dir.path().join("turned.pdf");
    let restored = dir.path().join("restored.pdf");

    rotate_pdf(&input, &turned, 90).unwrap();
    rotate_pdf(&turned, &restored, -90).unwrap();

    assert_eq!(page_rotations(&restored), vec![initial; pages]);
}

#[rstest]
#[case(0, 450, 90)]
#[case(180, -720, 180)]
#[case(90, -1170, 0)]
fn test_large_rotations_are_normalized(
    #[case] initial: i64,
    #[case] rotation: i64,
    #[case] expected: i64,
) {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 2, initial);
    let output = dir.path().join("output.pdf");

    rotate_pdf(&input, &output, rotation).unwrap();

    assert_eq!(page_rotations(&output), vec![expected, expected]);
}

#[test]
fn test_output_in_new_directory() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 1, 0);
    let output = dir.path().join("a").join("b").join("output.pdf");

    rotate_pdf(&input, &output, 270).unwrap();

    assert_eq!(page_rotations(&output), vec![270]);
}

#[test]
fn test_rotate_with_config_defaults() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 2, 0);

    let report = rotate_with_config(&Config::new(&input, None)).unwrap();

    assert_eq!(report.output, dir.path().join("input_out.pdf"));
    assert_eq!(report.direction, RotationDirection::Counterclockwise);
    assert_eq!(page_rotations(&report.output), vec![270, 270]);
}

#[test]
fn test_rotate_with_config_compressed() {
    let dir = TempDir::new().unwrap();
    let input = create_sample_pdf(&dir, "input.pdf", 2, 0);

    let mut config = Config::new(&input, Some(dir.path().join("small.pdf")));
    config.degrees = RotationDegrees::Deg180;
    config.direction = RotationDirection::Clockwise;
    config.compress = true;

    let report = rotate_with_config(&config).unwrap();

    assert_eq!(report.page_count, 2);
    assert_eq!(page_rotations(&report.output), vec![180, 180]);
}
