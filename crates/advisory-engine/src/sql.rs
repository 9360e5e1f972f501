//! Escaping for SQL string literals.

/// Escape a string for interpolation into a single-quoted SQL literal by
/// doubling single quotes. No other escaping is applied.
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Escape and wrap in single quotes.
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", escape_literal(s))
}
