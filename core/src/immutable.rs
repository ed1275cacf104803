//! Write-once columns.
//!
//! A setter calls [`check_immutable`] with the value it is about to replace,
//! or stores the field as an [`Immutable`] which runs the check itself.

use std::fmt::Debug;

use serde::Serialize;
use serde_json::Value;

use crate::error::{QueryUtilsError, Result};

/// Reject changing a column that already holds a different value.
///
/// `previous == None` means the column was never set, so any value is
/// accepted. Re-assigning an equal value is accepted.
///
/// Both values are captured as JSON in the error. A value serde_json cannot
/// represent (e.g. a map with non-string keys) is captured as its `Debug` text.
pub fn check_immutable<T>(entity: &str, column: &str, previous: Option<&T>, new: &T) -> Result<()>
where
    T: PartialEq + Serialize + Debug + ?Sized,
{
    match previous {
        Some(old) if old != new => {
            trace_immutable!(entity, column);
            Err(QueryUtilsError::ImmutableColumn {
                entity: entity.into(),
                column: column.into(),
                old_value: to_value(old),
                new_value: to_value(new),
            })
        }
        _ => Ok(()),
    }
}

fn to_value<T: Serialize + Debug + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(format!("{value:?}")))
}

/// A value that can be written once and never changed afterwards.
///
/// ```
/// # use query_utils_core::Immutable;
/// let mut sku = Immutable::new("Product", "sku");
/// sku.set("A-1".to_string()).unwrap();
/// sku.set("A-1".to_string()).unwrap();
/// assert!(sku.set("B-2".to_string()).is_err());
/// assert_eq!(sku.get().map(String::as_str), Some("A-1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Immutable<T> {
    entity: &'static str,
    column: &'static str,
    value: Option<T>,
}

impl<T> Immutable<T> {
    /// An unset column of `entity`
    pub const fn new(entity: &'static str, column: &'static str) -> Self {
        Self {
            entity,
            column,
            value: None,
        }
    }

    /// A column loaded with its stored value
    pub const fn with_value(entity: &'static str, column: &'static str, value: T) -> Self {
        Self {
            entity,
            column,
            value: Some(value),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn into_inner(self) -> Option<T> {
        self.value
    }
}

impl<T: PartialEq + Serialize + Debug> Immutable<T> {
    /// Store `value` unless a different value was stored before.
    pub fn set(&mut self, value: T) -> Result<()> {
        check_immutable(self.entity, self.column, self.value.as_ref(), &value)?;
        self.value = Some(value);
        Ok(())
    }
}
