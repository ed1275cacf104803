use std::collections::BTreeMap;

use compact_str::{CompactString, ToCompactString};
use hashbrown::HashMap;

use crate::error::Result;

/// Country name to ISO 3166 code lookup.
///
/// The reference data comes from the caller; names are matched
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    codes: HashMap<CompactString, CompactString>,
}

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON object of `{"Country Name": "CC"}` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        let pairs: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(pairs.into_iter().collect())
    }

    pub fn insert(&mut self, name: &str, code: &str) {
        self.codes
            .insert(name.to_lowercase().into(), code.to_compact_string());
    }

    /// Code for a country name, ignoring case
    pub fn code_for(&self, name: &str) -> Option<&str> {
        self.codes
            .get(name.to_lowercase().as_str())
            .map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<N: AsRef<str>, C: AsRef<str>> FromIterator<(N, C)> for CountryTable {
    fn from_iter<T: IntoIterator<Item = (N, C)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (name, code) in iter {
            table.insert(name.as_ref(), code.as_ref());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let table: CountryTable = [("Germany", "DE"), ("Côte d'Ivoire", "CI")].into_iter().collect();
        assert_eq!(table.code_for("germany"), Some("DE"));
        assert_eq!(table.code_for("GERMANY"), Some("DE"));
        assert_eq!(table.code_for("CÔTE D'IVOIRE"), Some("CI"));
        assert_eq!(table.code_for("Atlantis"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let table = CountryTable::from_json(r#"{"France": "FR", "Japan": "JP"}"#).unwrap();
        assert_eq!(table.code_for("japan"), Some("JP"));
        assert!(CountryTable::from_json("[1, 2]").is_err());
    }
}
