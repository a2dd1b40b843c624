use serde::Serialize;
use std::collections::BTreeSet;

///
/// PrimaryKey
///
/// The identifying key of an entity; composite when it spans more than
/// one field.
///

#[derive(Clone, Debug, Serialize)]
pub struct PrimaryKey {
    pub fields: Vec<String>,
}

impl PrimaryKey {
    #[must_use]
    pub fn new(fields: &[&str]) -> Self {
        Self {
            fields: fields.iter().map(ToString::to_string).collect(),
        }
    }

    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.fields.len() > 1
    }

    /// Field names as a set, for order-independent comparison.
    #[must_use]
    pub fn field_set(&self) -> BTreeSet<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}
