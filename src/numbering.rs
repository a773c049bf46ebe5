//! Official receipt (OR) number formatting

/// Render `counter` in base 10, left-padded with `'0'` until the numeric
/// portion is `padding` characters wide, then prepend `prefix`.
///
/// A counter whose decimal length already meets or exceeds `padding` is kept
/// whole, never truncated. Negative counters and widths are unrepresentable
/// in the parameter types, so the function is total.
pub fn format_or(counter: u64, padding: usize, prefix: &str) -> String {
    format!("{}{:0width$}", prefix, counter, width = padding)
}
