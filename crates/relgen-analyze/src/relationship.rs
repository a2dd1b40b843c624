use crate::{
    backref::{BackRef, find_back_reference},
    config::{AnalyzeConfig, AutoIncludePolicy},
    error::AnalyzeError,
    junction::is_junction,
    unique::are_fields_unique,
};
use derive_more::Display;
use relgen_schema::node::{Entity, Field, Schema};
use serde::Serialize;

///
/// Cardinality
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Cardinality {
    #[display("many-to-many")]
    ManyToMany,

    #[display("many-to-one")]
    ManyToOne,

    #[display("one-to-many")]
    OneToMany,

    #[display("one-to-one")]
    OneToOne,
}

///
/// RelationshipInfo
/// Classification of one relation field.
///

#[derive(Clone, Debug, Serialize)]
pub struct RelationshipInfo {
    /// The relation field's name on the owning entity.
    pub field_name: String,

    /// Target entity name.
    pub target: String,

    pub is_one_to_one: bool,
    pub is_one_to_many: bool,
    pub is_many_to_one: bool,
    pub is_many_to_many: bool,

    pub should_auto_include: bool,
}

impl RelationshipInfo {
    fn new(field_name: &str, target: &str, cardinality: Cardinality) -> Self {
        Self {
            field_name: field_name.to_string(),
            target: target.to_string(),
            is_one_to_one: cardinality == Cardinality::OneToOne,
            is_one_to_many: cardinality == Cardinality::OneToMany,
            is_many_to_one: cardinality == Cardinality::ManyToOne,
            is_many_to_many: cardinality == Cardinality::ManyToMany,
            should_auto_include: false,
        }
    }

    /// The single cardinality flag that is set.
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        if self.is_one_to_one {
            Cardinality::OneToOne
        } else if self.is_one_to_many {
            Cardinality::OneToMany
        } else if self.is_many_to_many {
            Cardinality::ManyToMany
        } else {
            Cardinality::ManyToOne
        }
    }
}

/// Classify one relation field of `entity`.
///
/// Fails with [`AnalyzeError::UnresolvedRelation`] when the declared target
/// is absent from the schema; the caller decides between failing fast and
/// collecting (see the facade).
pub fn classify(
    entity: &Entity,
    field: &Field,
    schema: &Schema,
    config: &AnalyzeConfig,
) -> Result<RelationshipInfo, AnalyzeError> {
    let Some(target) = schema.get_entity(&field.type_name) else {
        return Err(AnalyzeError::UnresolvedRelation {
            entity: entity.name.clone(),
            field: field.name.clone(),
            target: field.type_name.clone(),
        });
    };

    let cardinality = match find_back_reference(entity, field, target) {
        // Bidirectional: the two list flags decide.
        BackRef::Paired(other) => match (field.is_list, other.is_list) {
            (false, false) => Cardinality::OneToOne,
            (true, true) => Cardinality::ManyToMany,
            (true, false) => Cardinality::OneToMany,
            (false, true) => Cardinality::ManyToOne,
        },

        BackRef::NoCandidates | BackRef::Unmatched => {
            if field.owns_foreign_key() {
                if are_fields_unique(entity, &field.relation_fields) {
                    Cardinality::OneToOne
                } else {
                    Cardinality::ManyToOne
                }
            } else if field.is_list {
                // Inherently ambiguous without a reverse reference; a
                // junction target makes many-to-many the best reading.
                if is_junction(target, config) {
                    Cardinality::ManyToMany
                } else {
                    Cardinality::OneToMany
                }
            } else {
                // Singular, no FK ownership: implicit one-to-one fallback.
                Cardinality::OneToOne
            }
        }
    };

    let mut info = RelationshipInfo::new(&field.name, &target.name, cardinality);
    info.should_auto_include = should_auto_include(&info, entity, field, config);

    Ok(info)
}

fn should_auto_include(
    info: &RelationshipInfo,
    entity: &Entity,
    field: &Field,
    config: &AnalyzeConfig,
) -> bool {
    match config.auto_include_policy() {
        AutoIncludePolicy::Custom(predicate) => predicate(info, entity),
        AutoIncludePolicy::Default {
            enabled,
            require_all_required,
        } => {
            enabled
                && info.is_many_to_one
                && !is_junction(entity, config)
                && (!require_all_required || own_fields_all_required(entity, field))
        }
    }
}

fn own_fields_all_required(entity: &Entity, field: &Field) -> bool {
    field
        .relation_fields
        .iter()
        .all(|name| entity.get_field(name).is_some_and(|f| f.is_required))
}
