//! User-facing rendering of a transform error

use std::fmt;

use crate::error::{ParseTarget, TransformError};

/// Error banner shown while the last good output stays on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBanner<'a> {
    error: &'a TransformError,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(error: &'a TransformError) -> Self {
        Self { error }
    }

    pub fn error(&self) -> &'a TransformError {
        self.error
    }

    /// "Line L, Column C", only when both are known and non-zero
    pub fn location(&self) -> Option<String> {
        match (self.error.line, self.error.column) {
            (Some(line), Some(column)) if line > 0 && column > 0 => {
                Some(format!("Line {}, Column {}", line, column))
            }
            _ => None,
        }
    }

    /// Error text and location without the fallback notice
    ///
    /// For callers that have no earlier output to keep showing.
    pub fn summary(&self) -> String {
        let mut summary = format!("Transform Error:\n{}", self.error.message);
        if let Some(location) = self.location() {
            summary.push_str("\nLocation: ");
            summary.push_str(&location);
        }
        summary
    }

    /// Source-context report pointed at whichever document the error blames
    pub fn report(
        &self,
        template: (&str, &str),
        source: (&str, &str),
        color: bool,
    ) -> String {
        let (filename, text) = match self.error.blamed() {
            ParseTarget::Stylesheet => template,
            ParseTarget::Input => source,
        };
        self.error.format(text, filename, color)
    }
}

impl fmt::Display for ErrorBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        write!(f, "Showing last successful transformation")
    }
}
