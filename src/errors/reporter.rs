use crate::Position;

use super::errors::apply_template;

/// Accumulates syntax diagnostics and the running error count.
///
/// The reporter never fails; each call to [`report_error`] prints one
/// numbered diagnostic and increments the counter exactly once. The
/// count decides overall compilation success.
///
/// [`report_error`]: ErrorReporter::report_error
pub struct ErrorReporter {
    num_errors: u32,
}

impl ErrorReporter {
    pub fn new() -> Self {
        ErrorReporter { num_errors: 0 }
    }

    /// Formats and emits one diagnostic.
    ///
    /// # Arguments
    ///
    /// * `template` - Message with a single `%` placeholder
    /// * `quoted` - The quoted token spelling substituted for `%`
    /// * `position` - Source position the diagnostic points at
    pub fn report_error(&mut self, template: &str, quoted: &str, position: &Position) {
        self.num_errors += 1;
        println!(
            "ERROR #{}: {} at {}",
            self.num_errors,
            apply_template(template, quoted),
            position
        );
    }

    pub fn num_errors(&self) -> u32 {
        self.num_errors
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
