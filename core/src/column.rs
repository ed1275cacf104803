use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

use compact_str::{CompactString, format_compact};

use crate::order::{OrderBy, OrderTerm};
use crate::sql::{SQL, ToSQL};

/// A queryable column, rendered as `"table"."name"`.
///
/// An empty table name renders the bare `"name"`, which is what expression
/// aliases and CTE columns look like.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    table: CompactString,
    name: CompactString,
}

impl Column {
    pub fn new(table: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    /// A column without table qualification
    pub fn unqualified(name: impl Into<CompactString>) -> Self {
        Self::new(CompactString::const_new(""), name)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `table_name`, or just `name` when unqualified
    pub fn label(&self) -> CompactString {
        if self.table.is_empty() {
            self.name.clone()
        } else {
            format_compact!("{}_{}", self.table, self.name)
        }
    }

    /// Ascending ordering with the database's default null placement
    pub fn asc(&self) -> OrderTerm {
        OrderTerm::new(self.clone(), OrderBy::Asc)
    }

    /// Descending ordering with the database's default null placement
    pub fn desc(&self) -> OrderTerm {
        OrderTerm::new(self.clone(), OrderBy::Desc)
    }
}

impl ToSQL for Column {
    fn to_sql(&self) -> SQL {
        SQL::column(self.clone())
    }
}

/// Lookup of columns by client-facing field name.
///
/// Implemented for the common map types so sort and filter helpers can take
/// whatever the caller already keeps its field registry in.
pub trait ColumnMapping {
    fn column(&self, name: &str) -> Option<&Column>;

    fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}

impl<K, S> ColumnMapping for hashbrown::HashMap<K, Column, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn column(&self, name: &str) -> Option<&Column> {
        self.get(name)
    }
}

impl<K, S> ColumnMapping for std::collections::HashMap<K, Column, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn column(&self, name: &str) -> Option<&Column> {
        self.get(name)
    }
}

impl<K> ColumnMapping for BTreeMap<K, Column>
where
    K: Borrow<str> + Ord,
{
    fn column(&self, name: &str) -> Option<&Column> {
        self.get(name)
    }
}
