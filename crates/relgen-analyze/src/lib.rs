pub mod analyze;
pub mod backref;
pub mod capabilities;
pub mod config;
pub mod error;
pub mod junction;
pub mod relationship;
pub mod special;
pub mod unique;

pub use crate::{
    analyze::{AnalysisIssue, AnalysisResult, analyze, analyze_schema, include_map},
    config::AnalyzeConfig,
    error::AnalyzeError,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        analyze::{AnalysisIssue, AnalysisResult, analyze, analyze_schema, include_map},
        backref::{BackRef, find_back_reference},
        capabilities::{ForeignKeyInfo, ModelCapabilities, build_capabilities},
        config::{
            AnalyzeConfig, AutoIncludePolicy, ConfigError, NamePattern, SpecialFieldMatcher,
        },
        error::AnalyzeError,
        junction::is_junction,
        relationship::{Cardinality, RelationshipInfo, classify},
        special::{
            FieldScan, FilterField, FilterKind, SpecialFieldKey, SpecialFields, normalize_name,
            scan_fields,
        },
        unique::{are_fields_unique, is_field_unique},
    };
}
