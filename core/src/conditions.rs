//! Filter builders for user-driven search.
//!
//! Each builder returns a [`SQL`] predicate for the caller's WHERE clause.

use compact_str::{CompactString, format_compact};

use crate::country::CountryTable;
use crate::fuzzy::{DEFAULT_EPSILON, escape_like, parse_number};
use crate::sql::{SQL, ToSQL};

/// Create a BETWEEN condition that absorbs float drift.
///
/// # Example
/// ```
/// # use query_utils_core::{Column, compare_number};
/// let condition = compare_number(Column::new("items", "price"), 10.0, 0.5);
/// assert_eq!(condition.sql(), r#"("items"."price" BETWEEN ? AND ?)"#);
/// ```
pub fn compare_number<C: ToSQL>(column: C, value: f64, epsilon: f64) -> SQL {
    SQL::raw("(")
        .append(column)
        .append_raw("BETWEEN")
        .append(SQL::parameter(value - epsilon))
        .append_raw("AND")
        .append(SQL::parameter(value + epsilon))
        .append_raw(")")
}

/// Compare a numeric search term against a column, after dividing it by
/// `divisor` (e.g. 100 for a column stored in cents).
///
/// A term that is not a number produces `FALSE`.
pub fn check_number<C: ToSQL>(column: C, term: &str, divisor: f64) -> SQL {
    match parse_number(term) {
        Some(number) => compare_number(column, number / divisor, DEFAULT_EPSILON),
        None => SQL::r#false(),
    }
}

/// Compare a country code column with a term or the code the term resolves to.
pub fn check_country<C: ToSQL>(country_code: C, term: &str, table: &CountryTable) -> SQL {
    let match_code = table.code_for(term).unwrap_or(term);
    SQL::func("LOWER", country_code)
        .append_raw("=")
        .append(SQL::parameter(match_code.to_lowercase().as_str()))
}

/// Case-insensitive substring filter with wildcards in the term escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstrFilter {
    pattern: CompactString,
}

impl SubstrFilter {
    /// The ILIKE pattern, `%<escaped term>%`
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// `column ILIKE ?` bound to the pattern
    pub fn apply<C: ToSQL>(&self, column: C) -> SQL {
        column
            .to_sql()
            .append_raw("ILIKE")
            .append(SQL::parameter(self.pattern.clone()))
    }
}

/// Create a case-insensitive substring filter for a column.
///
/// `%` and `_` in `term` match literally.
///
/// # Example
/// ```
/// # use query_utils_core::{Column, ilike_substr};
/// let filter = ilike_substr("50%_off");
/// assert_eq!(filter.pattern(), r"%50\%\_off%");
/// assert_eq!(filter.apply(Column::new("items", "name")).sql(), r#""items"."name" ILIKE ?"#);
/// ```
pub fn ilike_substr(term: &str) -> SubstrFilter {
    SubstrFilter {
        pattern: format_compact!("%{}%", escape_like(term)),
    }
}

/// AND together the non-empty fragments; `TRUE` when none are left.
pub fn sql_maybe_and<I>(conditions: I) -> SQL
where
    I: IntoIterator<Item = SQL>,
{
    let mut conditions: Vec<SQL> = conditions.into_iter().filter(|c| !c.is_empty()).collect();
    match conditions.len() {
        0 => SQL::r#true(),
        1 => conditions.remove(0),
        _ => SQL::join(conditions, " AND ").parens(),
    }
}
