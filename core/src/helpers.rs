use compact_str::CompactString;

use crate::column::Column;
use crate::sql::{SQL, ToSQL};

/// Attach a label to a column as `table_column`.
pub fn labeled(column: &Column) -> SQL {
    column.to_sql().alias(column.label())
}

/// Label each expression with its map key.
pub fn label_columns<I, N, E>(columns: I) -> Vec<SQL>
where
    I: IntoIterator<Item = (N, E)>,
    N: Into<CompactString>,
    E: ToSQL,
{
    columns
        .into_iter()
        .map(|(name, expr)| expr.to_sql().alias(name))
        .collect()
}

/// Weighted average that yields NULL instead of dividing by a zero weight sum.
pub fn weighted_avg<V, W>(value: V, weight: W) -> SQL
where
    V: ToSQL,
    W: ToSQL,
{
    let weight = weight.to_sql();
    SQL::raw("CASE WHEN")
        .append(SQL::func("SUM", &weight))
        .append_raw("= 0 THEN NULL ELSE")
        .append(SQL::func(
            "SUM",
            value.to_sql().append_raw("*").append(&weight),
        ))
        .append_raw("/")
        .append(SQL::func("SUM", &weight))
        .append_raw("END")
}

/// Inline a string literal into the query text.
///
/// The value is not escaped; only pass trusted constants.
pub fn literal_str(value: &str) -> SQL {
    SQL::raw(format!("'{value}'"))
}
