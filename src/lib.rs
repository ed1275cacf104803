//! # query-utils
//!
//! Helpers that sit next to a query builder: dynamic sort and filter clauses,
//! nesting of flat result rows, grouping of joined rows, and write-once
//! columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use query_utils::prelude::*;
//! use serde_json::json;
//!
//! let mut fields = std::collections::HashMap::new();
//! fields.insert("name", Column::new("items", "name"));
//! fields.insert("id", Column::new("items", "id"));
//!
//! let requests: Vec<SortRequest> =
//!     serde_json::from_value(json!([{"name": "name", "direction": "desc"}])).unwrap();
//! let order = order_by(&get_sort_columns_default(&fields, &requests));
//! assert_eq!(
//!     order.sql(),
//!     r#"ORDER BY "items"."name" DESC NULLS LAST, "items"."id" DESC"#
//! );
//!
//! let filter = ilike_substr("50%").apply(Column::new("items", "name"));
//! assert_eq!(filter.sql(), r#""items"."name" ILIKE ?"#);
//! ```
//!
//! ## Modules
//!
//! | Module         | Purpose                                            |
//! |----------------|----------------------------------------------------|
//! | `path`         | write into nested records by `a__b` paths          |
//! | `row`          | nest rows, group consecutive rows by key           |
//! | `order`        | normalize client sort requests with a tie-break    |
//! | `fuzzy`        | tolerant number and country matching              |
//! | `conditions`   | WHERE fragments for search terms                   |
//! | `immutable`    | write-once column checks                           |
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events for dropped sort fields,
//!   tie-breaks, grouping runs and rejected writes.

/// Result type for query utility operations
pub use query_utils_core::error::Result;

/// Error types
pub mod error {
    pub use query_utils_core::error::QueryUtilsError;
}

/// Core types and functions.
pub mod core {
    pub use query_utils_core::*;
}

pub use query_utils_core::{
    column, conditions, country, fuzzy, helpers, immutable, order, path, row, sql,
};

/// Everything needed for typical use.
pub mod prelude {
    pub use query_utils_core::{
        Column, ColumnMapping, CountryTable, Immutable, NestOptions, Nulls, OrderBy, OrderTerm,
        Record, SQL, SQLValue, SortRequest, SubstrFilter, ToSQL, check_country,
        check_immutable, check_number, compare_number, country_name_match, entity_to_dict,
        get_sort_columns, get_sort_columns_default, group_result_set, ilike_substr,
        numeric_close, order_by, parse_and_compare, result_list_to_dict, set_attribute,
        sql_maybe_and,
    };
}
