use compact_str::CompactString;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryUtilsError {
    /// A path segment points at a value that is not a nested mapping
    #[error("Entity contains conflicting values at `{segment}` of `{path}`, expected a mapping")]
    ConflictingStructure {
        path: CompactString,
        segment: CompactString,
    },

    /// An immutable column was changed after its first write
    #[error(
        "Cannot update column {column} on model {entity} from {old_value} to {new_value}: column is non-updatable."
    )]
    ImmutableColumn {
        entity: CompactString,
        column: CompactString,
        old_value: Value,
        new_value: Value,
    },

    /// Country reference data could not be decoded
    #[error("Country table error: {0}")]
    CountryTable(#[from] serde_json::Error),
}

/// Result type for query utility operations
pub type Result<T> = std::result::Result<T, QueryUtilsError>;
