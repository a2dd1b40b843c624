use crate::{
    config::AnalyzeConfig,
    special::{FieldScan, FilterField, SpecialFields, normalize_name},
};
use relgen_schema::node::{Entity, Field};
use serde::Serialize;

///
/// ForeignKeyInfo
/// One entry per relation field that owns foreign-key fields.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ForeignKeyInfo {
    /// Own FK field names on the declaring entity.
    pub fields: Vec<String>,

    /// The relation field's own name, used as the join alias.
    pub alias: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,

    /// Target entity name.
    pub target: String,
}

///
/// ModelCapabilities
/// The aggregated capability record handed to code generation.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ModelCapabilities {
    pub has_search: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_fields: Vec<String>,

    pub has_filters: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_fields: Vec<FilterField>,

    pub has_find_by_slug: bool,
    pub has_featured: bool,
    pub has_active: bool,
    pub has_published: bool,
    pub has_soft_delete: bool,
    pub has_parent_child: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKeyInfo>,
}

/// Aggregate the field-scan output, foreign-key extraction, and
/// parent/child detection into the final capability record.
#[must_use]
pub fn build_capabilities(
    entity: &Entity,
    scan: &FieldScan,
    config: &AnalyzeConfig,
) -> ModelCapabilities {
    let special = &scan.special_fields;

    ModelCapabilities {
        has_search: !scan.search_fields.is_empty(),
        search_fields: scan.search_fields.clone(),
        has_filters: !scan.filter_fields.is_empty(),
        filter_fields: scan.filter_fields.clone(),
        has_find_by_slug: special.slug.is_some(),
        has_featured: has_convention_field(entity, &["featured", "isfeatured"]),
        has_active: has_convention_field(entity, &["active", "isactive"]),
        has_published: special.published.is_some(),
        has_soft_delete: special.deleted_at.is_some(),
        has_parent_child: has_parent_child(entity, special, config),
        foreign_keys: foreign_keys(entity),
    }
}

/// Fixed-name convention flags, independent of the special-field table.
fn has_convention_field(entity: &Entity, names: &[&str]) -> bool {
    entity
        .fields
        .iter()
        .filter(|f| !f.is_relation())
        .any(|f| names.contains(&normalize_name(&f.name).as_str()))
}

/// A self-referential relation whose FK points at the detected `parentId`
/// field, or, absent one, whose FK name looks parent-like.
fn has_parent_child(entity: &Entity, special: &SpecialFields, config: &AnalyzeConfig) -> bool {
    let mut self_refs = entity
        .relation_fields()
        .filter(|f| f.type_name == entity.name);

    match &special.parent_id {
        Some(parent) => self_refs
            .any(|f| f.relation_fields.iter().any(|name| *name == parent.name)),
        None => self_refs
            .any(|f| f.relation_fields.iter().any(|name| config.is_parent_name(name))),
    }
}

/// One [`ForeignKeyInfo`] per FK-owning relation field, self-references
/// included, in declaration order.
fn foreign_keys(entity: &Entity) -> Vec<ForeignKeyInfo> {
    entity
        .foreign_key_fields()
        .map(|field: &Field| ForeignKeyInfo {
            fields: field.relation_fields.clone(),
            alias: field.name.clone(),
            relation_name: field.relation_name.clone(),
            target: field.type_name.clone(),
        })
        .collect()
}
