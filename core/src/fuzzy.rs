//! Tolerant comparisons for user-supplied search terms.
//!
//! Search input is free text. Anything that does not parse as a number is a
//! plain "no match", never an error.

use compact_str::CompactString;

use crate::country::CountryTable;

/// Default tolerance for float comparisons.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// `true` iff `a` lies in the closed interval `[b - epsilon, b + epsilon]`.
pub fn numeric_close(a: f64, b: f64, epsilon: f64) -> bool {
    a >= b - epsilon && a <= b + epsilon
}

/// Parse a search term as an integer, falling back to a float.
///
/// Surrounding whitespace is ignored.
pub fn parse_number(term: &str) -> Option<f64> {
    let term = term.trim();
    match term.parse::<i64>() {
        Ok(int) => Some(int as f64),
        Err(_) => term.parse::<f64>().ok(),
    }
}

/// Compare `term / divisor` against `target` within [`DEFAULT_EPSILON`].
///
/// Malformed terms return `false`. A zero divisor yields an infinite or NaN
/// quotient, which matches nothing.
pub fn parse_and_compare(term: &str, target: f64, divisor: f64) -> bool {
    parse_number(term).is_some_and(|number| numeric_close(number / divisor, target, DEFAULT_EPSILON))
}

/// Escape the LIKE wildcards `%` and `_` with a backslash.
pub fn escape_like(term: &str) -> CompactString {
    let mut escaped = CompactString::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Resolve `term` as a country name, or take it as a code when the table has
/// no such name, then compare with `candidate_code` ignoring case.
pub fn country_name_match(candidate_code: &str, term: &str, table: &CountryTable) -> bool {
    let match_code = table.code_for(term).unwrap_or(term);
    candidate_code.to_lowercase() == match_code.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_close() {
        assert!(numeric_close(10.005, 10.0, 0.01));
        assert!(!numeric_close(10.02, 10.0, 0.01));
        assert!(!numeric_close(9.98, 10.0, 0.01));
    }

    #[test]
    fn test_numeric_close_boundary_is_inclusive() {
        assert!(numeric_close(1.5, 1.0, 0.5));
        assert!(numeric_close(0.5, 1.0, 0.5));
        assert!(!numeric_close(1.500_001, 1.0, 0.5));
        assert!(!numeric_close(0.499_999, 1.0, 0.5));
    }

    #[test]
    fn test_parse_and_compare() {
        assert!(parse_and_compare("10", 10.0, 1.0));
        assert!(parse_and_compare("1050", 10.5, 100.0));
        assert!(parse_and_compare("10.004", 10.0, 1.0));
        assert!(parse_and_compare(" -3 ", -3.0, 1.0));
        assert!(!parse_and_compare("abc", 10.0, 1.0));
        assert!(!parse_and_compare("", 10.0, 1.0));
        assert!(!parse_and_compare("10", 10.0, 0.0));
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_country_name_match() {
        let table: CountryTable = [("Germany", "DE")].into_iter().collect();
        assert!(country_name_match("de", "germany", &table));
        assert!(country_name_match("DE", "Germany", &table));
        assert!(country_name_match("fr", "FR", &table));
        assert!(!country_name_match("fr", "Germany", &table));
        assert!(!country_name_match("de", "Deutschland", &table));
    }
}
