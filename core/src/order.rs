//! Sort-order normalization.
//!
//! Clients send an ordered list of `{name, direction}` requests. Requests are
//! resolved against a [`ColumnMapping`], unknown names are ignored, and a
//! stable tie-break column is appended so that paginated results come back in
//! a deterministic order even when the requested columns contain duplicates.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnMapping};
use crate::sql::{SQL, ToSQL};

/// Column used as the tie-break when the caller does not name one.
pub const DEFAULT_STABLE_KEY: &str = "id";

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
        }
    }
}

impl ToSQL for OrderBy {
    fn to_sql(&self) -> SQL {
        SQL::raw(self.as_str())
    }
}

/// Placement of NULL values in an ordering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Nulls {
    First,
    Last,
}

impl Nulls {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Nulls::First => "NULLS FIRST",
            Nulls::Last => "NULLS LAST",
        }
    }
}

impl ToSQL for Nulls {
    fn to_sql(&self) -> SQL {
        SQL::raw(self.as_str())
    }
}

/// One entry of an ORDER BY list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: Column,
    pub direction: OrderBy,
    /// `None` leaves null placement to the database
    pub nulls: Option<Nulls>,
}

impl OrderTerm {
    pub const fn new(column: Column, direction: OrderBy) -> Self {
        Self {
            column,
            direction,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(Nulls::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(Nulls::Last);
        self
    }
}

impl ToSQL for OrderTerm {
    fn to_sql(&self) -> SQL {
        let sql = self.column.to_sql().append(self.direction);
        match self.nulls {
            Some(nulls) => sql.append(nulls),
            None => sql,
        }
    }
}

/// A client-supplied sort request, e.g. `{"name": "price", "direction": "desc"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRequest {
    pub name: CompactString,
    pub direction: OrderBy,
}

impl SortRequest {
    pub fn new(name: impl Into<CompactString>, direction: OrderBy) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    pub fn asc(name: impl Into<CompactString>) -> Self {
        Self::new(name, OrderBy::Asc)
    }

    pub fn desc(name: impl Into<CompactString>) -> Self {
        Self::new(name, OrderBy::Desc)
    }
}

/// Transform a client sort order into ordering terms.
///
/// - Descending requests sort nulls last, ascending requests nulls first.
/// - Names missing from `mapping` are dropped without error.
/// - Unless `stable_key` was requested, it is appended (when `mapping` has
///   it) with the direction of the *first* request, ascending when there are
///   no requests. Only the first request is consulted, including when that
///   request was itself dropped.
///
/// # Example
///
/// ```
/// # use query_utils_core::{Column, SortRequest, get_sort_columns, order_by};
/// let mut mapping = std::collections::HashMap::new();
/// mapping.insert("name", Column::new("items", "name"));
/// mapping.insert("id", Column::new("items", "id"));
///
/// let terms = get_sort_columns(&mapping, &[SortRequest::asc("name")], "id");
/// assert_eq!(
///     order_by(&terms).sql(),
///     r#"ORDER BY "items"."name" ASC NULLS FIRST, "items"."id" ASC"#
/// );
/// ```
pub fn get_sort_columns<M>(mapping: &M, sort_order: &[SortRequest], stable_key: &str) -> Vec<OrderTerm>
where
    M: ColumnMapping + ?Sized,
{
    let mut sort_columns = Vec::with_capacity(sort_order.len() + 1);
    let mut sort_has_stable_key = false;

    for item in sort_order {
        let Some(column) = mapping.column(&item.name) else {
            trace_sort!("dropped", item.name);
            continue;
        };
        if item.name == stable_key {
            sort_has_stable_key = true;
        }
        sort_columns.push(match item.direction {
            OrderBy::Desc => column.desc().nulls_last(),
            OrderBy::Asc => column.asc().nulls_first(),
        });
    }

    if !sort_has_stable_key && let Some(column) = mapping.column(stable_key) {
        trace_sort!("tie_break", stable_key);
        sort_columns.push(match sort_order.first() {
            Some(first) if first.direction == OrderBy::Desc => column.desc(),
            _ => column.asc(),
        });
    }

    sort_columns
}

/// [`get_sort_columns`] with [`DEFAULT_STABLE_KEY`].
pub fn get_sort_columns_default<M>(mapping: &M, sort_order: &[SortRequest]) -> Vec<OrderTerm>
where
    M: ColumnMapping + ?Sized,
{
    get_sort_columns(mapping, sort_order, DEFAULT_STABLE_KEY)
}

/// Helper function to create an ORDER BY clause
pub fn order_by<T>(terms: T) -> SQL
where
    T: IntoIterator,
    T::Item: ToSQL,
{
    let terms = SQL::join(terms, ", ");
    if terms.is_empty() {
        return SQL::empty();
    }
    SQL::raw("ORDER BY").append(terms)
}
