use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::error::{QueryUtilsError, Result};

/// Separator between nesting levels in a composite key: `"user__address__city"`.
pub const PATH_DELIMITER: &str = "__";

/// Set a nested attribute by a path separated by [`PATH_DELIMITER`].
///
/// Intermediate mappings are created as needed. The leaf is overwritten when
/// already present. A path segment that already holds a non-mapping value is
/// a [`QueryUtilsError::ConflictingStructure`] and leaves `entity` unchanged
/// from that segment on.
///
/// # Example
///
/// ```
/// # use query_utils_core::set_attribute;
/// # use serde_json::{Map, json};
/// let mut entity = Map::new();
/// set_attribute(&mut entity, "b__c", json!(3)).unwrap();
/// assert_eq!(entity["b"]["c"], 3);
/// ```
pub fn set_attribute<'e>(
    entity: &'e mut Map<String, Value>,
    path: &str,
    value: Value,
) -> Result<&'e mut Map<String, Value>> {
    let mut parts: SmallVec<[&str; 4]> = path.split(PATH_DELIMITER).collect();
    let last = parts.pop().unwrap_or_default();

    let mut cursor = &mut *entity;
    for name in parts {
        cursor = match cursor
            .entry(name)
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(map) => map,
            _ => {
                trace_path_conflict!(path, name);
                return Err(QueryUtilsError::ConflictingStructure {
                    path: path.into(),
                    segment: name.into(),
                });
            }
        };
    }

    cursor.insert(last.to_owned(), value);
    Ok(entity)
}
