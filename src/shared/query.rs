/// Wrap a search term for a case-insensitive `ILIKE` substring match.
///
/// Backslash, `%` and `_` are escaped so user input always matches literally
/// (Postgres treats `\` as the default LIKE escape character).
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.trim().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Treat blank query-string values as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_terms() {
        assert_eq!(contains_pattern("  Stanford "), "%Stanford%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(contains_pattern("100%_a\\b"), "%100\\%\\_a\\\\b%");
    }

    #[test]
    fn blank_values_are_dropped() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" MIT ".to_string())).as_deref(), Some("MIT"));
    }
}
