//! Line/column extraction from engine error messages

use std::sync::OnceLock;

use regex::Regex;

/// Position an engine reported inside its error message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorLocation {
    pub line: Option<u32>,
    pub column: Option<u32>,
}

fn location_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"at line ([0-9]+), column ([0-9]+)")
            .expect("location pattern should compile")
    })
}

/// Find the first "at line N, column M" in `message`
///
/// Both fields are `None` when the pattern is missing or either number does not fit.
pub fn locate(message: &str) -> ErrorLocation {
    let Some(captures) = location_pattern().captures(message) else {
        return ErrorLocation::default();
    };

    match (captures[1].parse::<u32>(), captures[2].parse::<u32>()) {
        (Ok(line), Ok(column)) => ErrorLocation {
            line: Some(line),
            column: Some(column),
        },
        _ => ErrorLocation::default(),
    }
}
