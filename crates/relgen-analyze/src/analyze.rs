use crate::{
    capabilities::{ModelCapabilities, build_capabilities},
    config::AnalyzeConfig,
    error::AnalyzeError,
    junction::is_junction,
    relationship::{RelationshipInfo, classify},
    special::{SpecialFields, scan_fields},
};
use relgen_schema::node::{Entity, Schema};
use serde::Serialize;
use std::collections::BTreeMap;

///
/// AnalysisIssue
/// A per-relation problem recorded instead of raised when the config asks
/// for error collection.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AnalysisIssue {
    pub entity: String,
    pub field: String,
    pub message: String,
}

///
/// AnalysisResult
/// Everything the code generator needs to know about one entity.
///

#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    /// One entry per relation field, in declaration order. Relations that
    /// failed to resolve under error collection are absent here and present
    /// in `errors`.
    pub relationships: Vec<RelationshipInfo>,

    /// The subset of `relationships` the default query should eagerly
    /// include.
    pub auto_include_relations: Vec<RelationshipInfo>,

    pub is_junction: bool,

    pub special_fields: SpecialFields,

    pub capabilities: ModelCapabilities,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<AnalysisIssue>,
}

impl AnalysisResult {
    /// The flat inclusion map over the auto-included relations.
    #[must_use]
    pub fn include_map(&self) -> BTreeMap<String, bool> {
        include_map(&self.auto_include_relations)
    }
}

/// Relation field name → `true`, for the auto-included relations only.
/// Relations that are not auto-included get no entry at all; downstream
/// query builders treat an explicit `false` differently from absence.
#[must_use]
pub fn include_map(relationships: &[RelationshipInfo]) -> BTreeMap<String, bool> {
    relationships
        .iter()
        .filter(|r| r.should_auto_include)
        .map(|r| (r.field_name.clone(), true))
        .collect()
}

/// Analyze a single entity against its schema.
///
/// The config is validated up front; a bad config always fails, regardless
/// of `collect_errors`. With `collect_errors` set, unresolved relations are
/// recorded as [`AnalysisIssue`] entries and analysis continues; otherwise
/// the first unresolved relation fails the call.
pub fn analyze(
    entity: &Entity,
    schema: &Schema,
    config: &AnalyzeConfig,
) -> Result<AnalysisResult, AnalyzeError> {
    config.validate()?;

    let mut relationships = Vec::new();
    let mut errors = Vec::new();

    for field in entity.relation_fields() {
        match classify(entity, field, schema, config) {
            Ok(info) => relationships.push(info),
            Err(err) if config.collect_errors => errors.push(AnalysisIssue {
                entity: entity.name.clone(),
                field: field.name.clone(),
                message: err.to_string(),
            }),
            Err(err) => return Err(err),
        }
    }

    let scan = scan_fields(entity, config)?;
    let capabilities = build_capabilities(entity, &scan, config);

    let auto_include_relations = relationships
        .iter()
        .filter(|r| r.should_auto_include)
        .cloned()
        .collect();

    Ok(AnalysisResult {
        relationships,
        auto_include_relations,
        is_junction: is_junction(entity, config),
        special_fields: scan.special_fields,
        capabilities,
        errors,
    })
}

/// Analyze every entity in the schema, keyed by entity name.
///
/// Deterministic for a given schema and config: entities are visited in
/// declaration order and the result map is ordered by name.
pub fn analyze_schema(
    schema: &Schema,
    config: &AnalyzeConfig,
) -> Result<BTreeMap<String, AnalysisResult>, AnalyzeError> {
    let mut results = BTreeMap::new();
    for entity in schema.entities() {
        let result = analyze(entity, schema, config)?;
        results.insert(entity.name.clone(), result);
    }

    Ok(results)
}
