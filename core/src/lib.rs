#[macro_use]
mod tracing;

pub mod column;
pub mod conditions;
pub mod country;
pub mod error;
pub mod fuzzy;
pub mod helpers;
pub mod immutable;
pub mod order;
pub mod path;
pub mod row;
pub mod sql;

// Re-export key types and functions
pub use column::{Column, ColumnMapping};
pub use conditions::{
    SubstrFilter, check_country, check_number, compare_number, ilike_substr, sql_maybe_and,
};
pub use country::CountryTable;
pub use error::{QueryUtilsError, Result};
pub use fuzzy::{
    DEFAULT_EPSILON, country_name_match, escape_like, numeric_close, parse_and_compare,
    parse_number,
};
pub use helpers::{label_columns, labeled, literal_str, weighted_avg};
pub use immutable::{Immutable, check_immutable};
pub use order::{
    DEFAULT_STABLE_KEY, Nulls, OrderBy, OrderTerm, SortRequest, get_sort_columns,
    get_sort_columns_default, order_by,
};
pub use path::{PATH_DELIMITER, set_attribute};
pub use row::{
    NestOptions, PRIVATE_PREFIX, Record, entity_to_dict, group_result_set, result_list_to_dict,
};
pub use sql::{SQL, SQLChunk, SQLValue, ToSQL};
