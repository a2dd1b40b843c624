use serde::Serialize;
use std::collections::BTreeSet;

///
/// UniqueConstraint
///
/// A jointly-unique field set. A single-field constraint is equivalent to a
/// direct unique marker on that field; uniqueness of a multi-field
/// constraint says nothing about its members individually.
///

#[derive(Clone, Debug, Serialize)]
pub struct UniqueConstraint {
    pub fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UniqueConstraint {
    #[must_use]
    pub fn new(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(ToString::to_string).collect(),
            name: None,
        }
    }

    /// Field names as a set, for order-independent comparison.
    #[must_use]
    pub fn field_set(&self) -> BTreeSet<&str> {
        self.fields.iter().map(String::as_str).collect()
    }

    /// True when the constraint covers exactly `names`.
    #[must_use]
    pub fn matches_exactly(&self, names: &BTreeSet<&str>) -> bool {
        self.fields.len() == names.len() && self.field_set() == *names
    }
}
