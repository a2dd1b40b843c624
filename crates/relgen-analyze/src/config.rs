use crate::{relationship::RelationshipInfo, special::SpecialFieldKey};
use regex::RegexBuilder;
use relgen_schema::{
    node::{Entity, Field},
    types::ScalarType,
};
use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Raised by [`AnalyzeConfig::validate`] before any entity is analyzed;
/// never suppressed by `collect_errors`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("unknown special-field matcher key '{key}'")]
    UnknownSpecialFieldKey { key: String },

    #[error("invalid name pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

///
/// NamePattern
///
/// An immutable `(source, case_insensitive)` pair compiled once at
/// construction. Matching never mutates the pattern.
///

#[derive(Clone, Debug)]
pub struct NamePattern {
    source: String,
    case_insensitive: bool,
    regex: regex::Regex,
}

impl NamePattern {
    pub fn new(source: &str, case_insensitive: bool) -> Result<Self, ConfigError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: source.to_string(),
            case_insensitive,
            regex,
        })
    }

    /// Compile a builtin pattern; the sources are compile-time literals.
    fn builtin(source: &str, case_insensitive: bool) -> Self {
        Self::new(source, case_insensitive).expect("builtin name pattern compiles")
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

///
/// SpecialFieldMatcher
///
/// One entry of the key → (pattern, type validator) table driving
/// special-field detection. `key` is resolved against the recognized
/// [`SpecialFieldKey`] slots during config validation.
///

#[derive(Clone, Debug)]
pub struct SpecialFieldMatcher {
    pub key: String,
    pub pattern: NamePattern,
    pub validator: TypeValidator,
}

/// Type check applied to a candidate field after its name pattern matched.
pub type TypeValidator = fn(&Field) -> bool;

/// Custom auto-include hook, overriding the default policy entirely.
pub type AutoIncludeFn = fn(&RelationshipInfo, &Entity) -> bool;

///
/// AutoIncludePolicy
///
/// The auto-include decision resolved once before classification begins:
/// either the default many-to-one policy with its gates, or a custom
/// predicate that replaces it wholesale.
///

#[derive(Clone, Copy, Debug)]
pub enum AutoIncludePolicy {
    Default {
        enabled: bool,
        require_all_required: bool,
    },
    Custom(AutoIncludeFn),
}

///
/// AnalyzeConfig
///

#[derive(Clone, Debug)]
pub struct AnalyzeConfig {
    /// Override/extend entries of the default special-field matcher table.
    /// Keys must name recognized slots; unknown keys fail validation.
    pub special_field_matchers: Vec<SpecialFieldMatcher>,

    /// Upper bound on FK-owning relation fields for junction detection.
    /// The lower bound is always two.
    pub junction_max_relations: usize,

    /// Maximum data fields a junction entity may carry.
    pub junction_max_data_fields: usize,

    /// Audit/system field names excluded from junction data-field counting.
    /// Compared after name normalization.
    pub system_field_names: Vec<String>,

    /// Default auto-include policy gate.
    pub auto_include_many_to_one: bool,

    /// When set, auto-include additionally requires every own FK field to be
    /// mandatory. Historical revisions of this policy disagreed on the
    /// default; `false` keeps optional FKs eligible.
    pub auto_include_required_only: bool,

    /// Custom predicate overriding the default auto-include policy entirely.
    pub auto_include_predicate: Option<AutoIncludeFn>,

    /// Drop sensitive-looking string fields from search fields.
    pub exclude_sensitive_search_fields: bool,

    /// Patterns marking a normalized field name as sensitive.
    pub sensitive_field_patterns: Vec<NamePattern>,

    /// Patterns recognizing parent-reference FK names on self-relations.
    pub parent_field_patterns: Vec<NamePattern>,

    /// Record unresolved-relation errors per entity instead of failing fast.
    pub collect_errors: bool,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            special_field_matchers: Vec::new(),
            junction_max_relations: 2,
            junction_max_data_fields: 2,
            system_field_names: vec![
                "createdAt".to_string(),
                "updatedAt".to_string(),
                "deletedAt".to_string(),
            ],
            auto_include_many_to_one: true,
            auto_include_required_only: false,
            auto_include_predicate: None,
            exclude_sensitive_search_fields: true,
            sensitive_field_patterns: vec![NamePattern::builtin(SENSITIVE_PATTERN, true)],
            parent_field_patterns: vec![NamePattern::builtin(PARENT_PATTERN, true)],
            collect_errors: false,
        }
    }
}

impl AnalyzeConfig {
    /// Override or extend one special-field matcher entry.
    #[must_use]
    pub fn with_matcher(mut self, matcher: SpecialFieldMatcher) -> Self {
        self.special_field_matchers.push(matcher);
        self
    }

    #[must_use]
    pub const fn with_junction_limits(mut self, max_relations: usize, max_data_fields: usize) -> Self {
        self.junction_max_relations = max_relations;
        self.junction_max_data_fields = max_data_fields;
        self
    }

    #[must_use]
    pub const fn with_auto_include(mut self, enabled: bool, required_only: bool) -> Self {
        self.auto_include_many_to_one = enabled;
        self.auto_include_required_only = required_only;
        self
    }

    #[must_use]
    pub const fn with_auto_include_predicate(mut self, predicate: AutoIncludeFn) -> Self {
        self.auto_include_predicate = Some(predicate);
        self
    }

    #[must_use]
    pub const fn with_collect_errors(mut self, collect: bool) -> Self {
        self.collect_errors = collect;
        self
    }

    /// Check the parts of the config that can be wrong: matcher keys must
    /// name recognized special-field slots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for matcher in &self.special_field_matchers {
            if matcher.key.parse::<SpecialFieldKey>().is_err() {
                return Err(ConfigError::UnknownSpecialFieldKey {
                    key: matcher.key.clone(),
                });
            }
        }

        Ok(())
    }

    /// Resolve the auto-include knobs into a single policy value.
    #[must_use]
    pub fn auto_include_policy(&self) -> AutoIncludePolicy {
        match self.auto_include_predicate {
            Some(predicate) => AutoIncludePolicy::Custom(predicate),
            None => AutoIncludePolicy::Default {
                enabled: self.auto_include_many_to_one,
                require_all_required: self.auto_include_required_only,
            },
        }
    }

    /// A normalized field name the search classifier must skip.
    #[must_use]
    pub fn is_sensitive_name(&self, normalized: &str) -> bool {
        self.sensitive_field_patterns
            .iter()
            .any(|p| p.matches(normalized))
    }

    /// A foreign-key field name that looks like a parent reference.
    #[must_use]
    pub fn is_parent_name(&self, name: &str) -> bool {
        self.parent_field_patterns.iter().any(|p| p.matches(name))
    }
}

/// Normalized-name fragments that mark a field as sensitive for search.
const SENSITIVE_PATTERN: &str = "password|passwd|pwd|secret|token|hash|salt|apikey|privatekey|credential|authcode|refreshtoken";

/// FK names recognized as parent references on self-relations.
const PARENT_PATTERN: &str = "^(parent|ancestor|root)";

/// The default key → (pattern, validator) table.
pub(crate) fn default_matcher_table() -> Vec<(SpecialFieldKey, NamePattern, TypeValidator)> {
    vec![
        (
            SpecialFieldKey::Published,
            NamePattern::builtin("^(is)?published$", true),
            is_boolean_field,
        ),
        (
            SpecialFieldKey::Slug,
            NamePattern::builtin("^slug$", true),
            is_string_field,
        ),
        (
            SpecialFieldKey::Views,
            NamePattern::builtin("^views?(count)?$", true),
            is_counter_field,
        ),
        (
            SpecialFieldKey::Likes,
            NamePattern::builtin("^likes?(count)?$", true),
            is_counter_field,
        ),
        (
            SpecialFieldKey::Approved,
            NamePattern::builtin("^(is)?approved$", true),
            is_boolean_field,
        ),
        (
            SpecialFieldKey::DeletedAt,
            NamePattern::builtin("^deleted(at)?$", true),
            is_datetime_field,
        ),
        (
            SpecialFieldKey::ParentId,
            NamePattern::builtin("^parent(id)?$", true),
            is_key_field,
        ),
    ]
}

//
// Default type validators
//

pub fn is_boolean_field(field: &Field) -> bool {
    field.scalar_type() == Some(ScalarType::Boolean) && !field.is_list
}

pub fn is_string_field(field: &Field) -> bool {
    field.scalar_type() == Some(ScalarType::String) && !field.is_list
}

pub fn is_counter_field(field: &Field) -> bool {
    matches!(
        field.scalar_type(),
        Some(ScalarType::Int | ScalarType::BigInt)
    ) && !field.is_list
}

pub fn is_datetime_field(field: &Field) -> bool {
    field.scalar_type() == Some(ScalarType::DateTime) && !field.is_list
}

/// FK-shaped scalar: something a parent reference could be stored in.
pub fn is_key_field(field: &Field) -> bool {
    matches!(
        field.scalar_type(),
        Some(ScalarType::Int | ScalarType::BigInt | ScalarType::String)
    ) && !field.is_list
}
