//! Question categories.

use serde::Serialize;
use std::collections::BTreeMap;

/// A labeled grouping of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `{id: type}` mapping as returned by the listing endpoints. Serializes with
/// stringified integer keys, e.g. `{"1": "Science"}`.
pub type CategoryMap = BTreeMap<i64, String>;

/// Build the `{id: type}` map for a set of categories.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
