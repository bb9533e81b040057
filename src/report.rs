//! Diagnostics channel
//!
//! Progress goes to stdout, errors to stderr. Per-file and per-pack errors
//! are reported here and never abort the run; fatal errors are handled by
//! the binary.

/// Sink for run diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    /// Print per-file merge decisions
    pub verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Progress message (e.g. "Merging <pack>")
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Non-fatal error - the run continues
    pub fn error(&self, message: &str) {
        eprintln!("ERROR: {message}");
    }

    /// Per-file detail, only shown with --verbose
    pub fn detail(&self, message: &str) {
        if self.verbose {
            eprintln!("  {message}");
        }
    }
}
