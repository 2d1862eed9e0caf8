//! Error types for the transform pipeline

use ariadne::{Color, Config, Label, Report, ReportBuilder, ReportKind, Source};
use thiserror::Error;

use crate::transform::locate;

/// Char range in a document
pub type Span = std::ops::Range<usize>;

/// Which input document failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseTarget {
    /// The transformation template (XSLT stylesheet)
    Stylesheet,
    /// The source document being transformed
    Input,
}

/// Classification of a pipeline failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The template or source text could not be parsed
    Parse(ParseTarget),
    /// The engine failed while applying the template
    Execution,
    /// Anything else that went wrong along the way
    Unknown,
}

/// A recovered pipeline failure, with the location the engine reported (if any)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransformError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
}

impl TransformError {
    fn classified(kind: ErrorKind, message: String) -> Self {
        let location = locate(&message);
        Self {
            kind,
            message,
            line: location.line,
            column: location.column,
        }
    }

    /// Create a parse error, prefixed with the document it came from
    pub fn parse(target: ParseTarget, parser_message: impl AsRef<str>) -> Self {
        let prefix = match target {
            ParseTarget::Stylesheet => "XSLT Parse Error",
            ParseTarget::Input => "XML Parse Error",
        };
        Self::classified(
            ErrorKind::Parse(target),
            format!("{}: {}", prefix, parser_message.as_ref()),
        )
    }

    /// Create an error raised while applying the template
    pub fn execution(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Execution, message.into())
    }

    /// Create an unclassified error; the message is kept verbatim
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::classified(ErrorKind::Unknown, message.into())
    }

    /// The document a located error most likely points into
    ///
    /// Input parse errors point at the source document, everything else at the template.
    pub fn blamed(&self) -> ParseTarget {
        match self.kind {
            ErrorKind::Parse(ParseTarget::Input) => ParseTarget::Input,
            _ => ParseTarget::Stylesheet,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// `text` should be the document returned by [`TransformError::blamed`]. Errors without a
    /// location render as a bare report with no label.
    pub fn format(&self, text: &str, filename: &str, color: bool) -> String {
        let mut buf = Vec::new();
        let offset = match (self.line, self.column) {
            (Some(line), Some(column)) => char_offset(text, line, column),
            _ => None,
        };

        let mut report: ReportBuilder<'_, (&str, Span)> =
            Report::build(ReportKind::Error, filename, offset.unwrap_or(0))
                .with_config(Config::default().with_color(color))
                .with_message(&self.message);

        if let Some(start) = offset {
            let end = (start + 1).min(text.chars().count()).max(start);
            report = report.with_label(
                Label::new((filename, start..end))
                    .with_message("reported here")
                    .with_color(Color::Red),
            );
        }

        if report
            .finish()
            .write((filename, Source::from(text)), &mut buf)
            .is_err()
        {
            return self.message.clone();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Convert a 1-based line/column pair into a char offset, clamping the column to the line
///
/// Text ending in a newline has one more, empty, line after it.
fn char_offset(text: &str, line: u32, column: u32) -> Option<usize> {
    let line_index = (line as usize).checked_sub(1)?;
    let mut offset = 0;
    let mut lines = 0;
    for (index, content) in text.split_inclusive('\n').enumerate() {
        let width = content.trim_end_matches('\n').chars().count();
        if index == line_index {
            let column_index = (column as usize).saturating_sub(1).min(width);
            return Some(offset + column_index);
        }
        offset += content.chars().count();
        lines = index + 1;
    }
    let trailing_empty = text.is_empty() || text.ends_with('\n');
    (trailing_empty && line_index == lines).then_some(offset)
}
