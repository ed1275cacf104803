//! Conversion of flat result rows into nested records, and grouping of rows
//! produced by one-to-many joins.
//!
//! A row is a [`Record`]: column label to value, in select order. Labels may be
//! composite (`"author__name"`), which nest into `{"author": {"name": ..}}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::path::set_attribute;

/// A flat or nested row. Key order is insertion order.
pub type Record = Map<String, Value>;

/// Keys starting with this prefix are private and skipped unless requested.
pub const PRIVATE_PREFIX: &str = "_";

/// Options for [`entity_to_dict`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestOptions {
    /// Split composite keys into nested mappings
    pub transform_attrs: bool,
    /// Keep keys starting with [`PRIVATE_PREFIX`]
    pub include_privates: bool,
}

impl Default for NestOptions {
    fn default() -> Self {
        Self {
            transform_attrs: true,
            include_privates: false,
        }
    }
}

impl NestOptions {
    /// Options that return rows untouched.
    pub const fn flat() -> Self {
        Self {
            transform_attrs: false,
            include_privates: false,
        }
    }

    pub const fn with_privates(mut self, include_privates: bool) -> Self {
        self.include_privates = include_privates;
        self
    }
}

/// Convert a row into a record, nesting composite keys.
///
/// With `transform_attrs` off the row is cloned as is and `include_privates`
/// has no effect.
pub fn entity_to_dict(entity: &Record, options: NestOptions) -> Result<Record> {
    if !options.transform_attrs {
        return Ok(entity.clone());
    }

    let mut result = Record::new();
    for (key, value) in entity {
        if options.include_privates || !key.starts_with(PRIVATE_PREFIX) {
            set_attribute(&mut result, key, value.clone())?;
        }
    }
    Ok(result)
}

/// Convert a list of rows into records.
pub fn result_list_to_dict<'r, I>(result_list: I, options: NestOptions) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = &'r Record>,
{
    result_list
        .into_iter()
        .map(|entity| entity_to_dict(entity, options))
        .collect()
}

/// Group a result set by a stable key and merge duplicate rows.
///
/// **The input must already be ordered by `key_attr`.** Grouping works on
/// consecutive runs of equal keys, the way a joined query sorted by its
/// primary key returns them. Rows sharing a key but separated by another key
/// end up in separate groups.
///
/// Each row is nested with [`NestOptions::default`]. Within a run, fields are
/// merged in row order: the first value is kept, a later equal value is
/// ignored, and a later different value turns the field into a list of the
/// values seen so far (or is pushed when the field already holds a list).
/// A row without `key_attr` groups with neighbouring rows that also lack it.
///
/// # Example
///
/// ```
/// # use query_utils_core::{Record, group_result_set};
/// # use serde_json::json;
/// let rows: Vec<Record> = [
///     json!({"id": 1, "value": "a"}),
///     json!({"id": 1, "value": "b"}),
///     json!({"id": 2, "value": "c"}),
/// ]
/// .into_iter()
/// .filter_map(|row| row.as_object().cloned())
/// .collect();
///
/// let grouped = group_result_set(rows, "id").unwrap();
/// assert_eq!(grouped[0]["value"], json!(["a", "b"]));
/// assert_eq!(grouped[1]["value"], json!("c"));
/// ```
pub fn group_result_set<I>(result: I, key_attr: &str) -> Result<Vec<Record>>
where
    I: IntoIterator<Item = Record>,
{
    let mut grouped = Vec::new();
    let mut current: Option<(Option<Value>, Record)> = None;
    let mut run_len = 0_usize;

    for row in result {
        let key = row.get(key_attr).cloned();
        let entity = entity_to_dict(&row, NestOptions::default())?;

        let same_run = matches!(&current, Some((run_key, _)) if *run_key == key);
        if same_run && let Some((_, grouped_entity)) = current.as_mut() {
            merge_entity(grouped_entity, entity);
            run_len += 1;
        } else if let Some((_, finished)) = current.replace((key, entity)) {
            trace_group!(run_len, finished.len());
            grouped.push(finished);
            run_len = 1;
        } else {
            run_len = 1;
        }
    }

    if let Some((_, finished)) = current {
        trace_group!(run_len, finished.len());
        grouped.push(finished);
    }

    Ok(grouped)
}

fn merge_entity(grouped_entity: &mut Record, entity: Record) {
    for (key, value) in entity {
        match grouped_entity.get_mut(&key) {
            None => {
                grouped_entity.insert(key, value);
            }
            Some(existing) if *existing == value => {}
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let previous = existing.take();
                *existing = Value::Array(vec![previous, value]);
            }
        }
    }
}
