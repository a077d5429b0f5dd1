//! Output formatting and display for pdfrotate.
//!
//! All user-facing console text goes through [`OutputFormatter`], which
//! honours quiet and verbose modes. Diagnostics go through `tracing`.

pub mod formatter;

pub use formatter::OutputFormatter;

use crate::rotate::RotationReport;

/// Display the summary of a successful run.
///
/// The detail lines are only shown in verbose mode.
pub fn display_rotation_report(formatter: &OutputFormatter, report: &RotationReport) {
    formatter.success(&format!(
        "Successfully rotated all {} pages by {}° {}.",
        report.page_count, report.degrees, report.direction
    ));
    formatter.info(&format!("Output saved to: {}", report.output.display()));

    formatter.detail("Input", &report.input.display().to_string());
    formatter.detail("Signed rotation", &report.rotation.to_string());
    formatter.detail(
        "Output size",
        &crate::utils::format_file_size(report.output_size),
    );
}
