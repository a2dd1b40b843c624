use crate::types::{FieldKind, ScalarType};
use serde::Serialize;
use std::ops::Not;

///
/// Field
///
/// A single declared field. Relation metadata (`relation_*`) is only
/// meaningful when `kind` is [`FieldKind::Relation`]; `relation_fields`
/// holds the foreign-key fields on the *declaring* entity and
/// `relation_references` the fields they reference on the target.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,

    /// Declared type name: a scalar name, enum name, or target entity name.
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_list: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_unique: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_id: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_read_only: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_updated_at: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,

    /// Explicit relation label, when the schema names the relation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relation_fields: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relation_references: Vec<String>,
}

impl Field {
    /// A plain scalar field with nothing else set.
    #[must_use]
    pub fn scalar(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Scalar,
            type_name: type_name.to_string(),
            is_list: false,
            is_required: false,
            is_unique: false,
            is_id: false,
            is_read_only: false,
            is_updated_at: false,
            default: None,
            relation_name: None,
            relation_fields: Vec::new(),
            relation_references: Vec::new(),
        }
    }

    /// A relation field pointing at `target`.
    #[must_use]
    pub fn relation(name: &str, target: &str) -> Self {
        Self {
            kind: FieldKind::Relation,
            ..Self::scalar(name, target)
        }
    }

    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.kind.is_relation()
    }

    /// A relation field that carries the foreign key on its own entity.
    #[must_use]
    pub fn owns_foreign_key(&self) -> bool {
        self.kind.is_relation() && !self.relation_fields.is_empty()
    }

    /// Resolve the declared type as a builtin scalar, if it is one.
    #[must_use]
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.kind {
            FieldKind::Scalar => ScalarType::parse(&self.type_name),
            _ => None,
        }
    }
}

///
/// DefaultValue
/// Descriptor for a field's declared default.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DefaultValue {
    AutoIncrement,
    Cuid,
    DbGenerated(String),
    Now,
    Uuid,
    Value(String),
}
