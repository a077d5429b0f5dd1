//! Console messages for a rotation run.
//!
//! # Examples
//!
//! ```
//! use pdfrotate::config::Config;
//! use pdfrotate::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::from_config(&Config::new("scan.pdf", None));
//! formatter.success("Successfully rotated all 3 pages by 90° clockwise.");
//! ```

use std::io::IsTerminal;

use crate::config::Config;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes user-facing lines to stdout, honouring quiet and verbose modes.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter. Color is used only when stdout is a terminal.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: std::io::stdout().is_terminal() && std::env::var_os("TERM").is_some(),
        }
    }

    /// Create a formatter from configuration. JSON output silences it.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet || config.json, config.verbose)
    }

    /// Print a plain line. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print a success line in green. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{}", self.paint(GREEN, message));
        }
    }

    /// Print an error line in red. Always displayed.
    pub fn error(&self, message: &str) {
        println!("{}", self.paint(RED, message));
    }

    /// Print a labelled detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose && !self.quiet {
            println!("  {label}: {value}");
        }
    }

    fn paint(&self, color: &str, message: &str) -> String {
        if self.colored {
            format!("{color}{message}{RESET}")
        } else {
            message.to_string()
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
