//! Heuristic indenter for serialized markup
//!
//! The indenter does not parse markup. It splits on `>`/`<` boundaries and moves the
//! indent level on fragments that look like closing tags (leading `/`) or opening tags
//! (leading word character, no trailing `/`). Tag names are never matched against each
//! other, so text containing literal `>`/`<` can come out misindented.

use std::sync::OnceLock;

use regex::Regex;

/// Indentation emitted per nesting level
pub const INDENT_UNIT: &str = "  ";

struct Patterns {
    boundary: Regex,
    closing: Regex,
    opening: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        boundary: Regex::new(r">\s*<").expect("boundary pattern should compile"),
        closing: Regex::new(r"^/[0-9A-Za-z_]").expect("closing pattern should compile"),
        opening: Regex::new(r"^<?[0-9A-Za-z_][^>]*[^/]$").expect("opening pattern should compile"),
    })
}

/// Re-indent markup text, one tag boundary per line
pub fn format(markup: &str) -> String {
    let patterns = patterns();
    let fragments: Vec<&str> = patterns.boundary.split(markup).collect();
    let last = fragments.len().saturating_sub(1);

    let mut formatted = String::with_capacity(markup.len() + markup.len() / 2);
    let mut indent: i32 = 0;

    for (index, fragment) in fragments.iter().enumerate() {
        if patterns.closing.is_match(fragment) {
            indent -= 1;
        }
        if index > 0 {
            formatted.push('\n');
            // The level can go negative on unbalanced input; it still prints flush left
            formatted.push_str(&INDENT_UNIT.repeat(indent.max(0) as usize));
            formatted.push('<');
        }
        formatted.push_str(fragment);
        if patterns.opening.is_match(fragment) {
            indent += 1;
        }
        if index < last {
            formatted.push('>');
        }
    }

    formatted
}
