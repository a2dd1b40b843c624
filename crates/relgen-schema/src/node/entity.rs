use crate::node::{Field, PrimaryKey, UniqueConstraint};
use serde::Serialize;
use std::collections::BTreeSet;

///
/// Entity
///

#[derive(Clone, Debug, Serialize)]
pub struct Entity {
    pub name: String,
    pub fields: Vec<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKey>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unique_constraints: Vec<UniqueConstraint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

impl Entity {
    #[must_use]
    pub fn new(name: &str, fields: Vec<Field>) -> Self {
        Self {
            name: name.to_string(),
            fields,
            primary_key: None,
            unique_constraints: Vec::new(),
            docs: None,
        }
    }

    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Relation fields in declaration order.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Relation fields that own foreign-key fields, in declaration order.
    pub fn foreign_key_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.owns_foreign_key())
    }

    /// Names forming the identifying key: the primary key's fields plus any
    /// field carrying a direct identifier marker.
    #[must_use]
    pub fn id_field_names(&self) -> BTreeSet<&str> {
        let mut names: BTreeSet<&str> = self
            .primary_key
            .as_ref()
            .map(|pk| pk.field_set())
            .unwrap_or_default();

        names.extend(
            self.fields
                .iter()
                .filter(|f| f.is_id)
                .map(|f| f.name.as_str()),
        );

        names
    }
}
