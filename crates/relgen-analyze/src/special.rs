use crate::{
    config::{AnalyzeConfig, ConfigError, NamePattern, TypeValidator, default_matcher_table},
    unique::is_field_unique,
};
use relgen_schema::{
    node::{Entity, Field},
    types::{FieldKind, ScalarType},
};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    str::FromStr,
};

///
/// SpecialFieldKey
/// The recognized special-field slots.
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum SpecialFieldKey {
    Approved,
    DeletedAt,
    Likes,
    ParentId,
    Published,
    Slug,
    Views,
}

impl SpecialFieldKey {
    pub const ALL: [Self; 7] = [
        Self::Approved,
        Self::DeletedAt,
        Self::Likes,
        Self::ParentId,
        Self::Published,
        Self::Slug,
        Self::Views,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::DeletedAt => "deletedAt",
            Self::Likes => "likes",
            Self::ParentId => "parentId",
            Self::Published => "published",
            Self::Slug => "slug",
            Self::Views => "views",
        }
    }
}

impl Display for SpecialFieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialFieldKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

///
/// SpecialFields
///
/// The per-entity assignment of special-field slots. Each slot is filled at
/// most once, and a field never occupies two slots.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct SpecialFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Field>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Field>,
}

impl SpecialFields {
    #[must_use]
    pub const fn get(&self, key: SpecialFieldKey) -> Option<&Field> {
        match key {
            SpecialFieldKey::Approved => self.approved.as_ref(),
            SpecialFieldKey::DeletedAt => self.deleted_at.as_ref(),
            SpecialFieldKey::Likes => self.likes.as_ref(),
            SpecialFieldKey::ParentId => self.parent_id.as_ref(),
            SpecialFieldKey::Published => self.published.as_ref(),
            SpecialFieldKey::Slug => self.slug.as_ref(),
            SpecialFieldKey::Views => self.views.as_ref(),
        }
    }

    fn set(&mut self, key: SpecialFieldKey, field: &Field) {
        let slot = match key {
            SpecialFieldKey::Approved => &mut self.approved,
            SpecialFieldKey::DeletedAt => &mut self.deleted_at,
            SpecialFieldKey::Likes => &mut self.likes,
            SpecialFieldKey::ParentId => &mut self.parent_id,
            SpecialFieldKey::Published => &mut self.published,
            SpecialFieldKey::Slug => &mut self.slug,
            SpecialFieldKey::Views => &mut self.views,
        };

        if slot.is_none() {
            *slot = Some(field.clone());
        }
    }

    fn is_complete(&self) -> bool {
        SpecialFieldKey::ALL.into_iter().all(|k| self.get(k).is_some())
    }
}

///
/// FilterKind
/// How a filterable field is queried.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Array,
    Boolean,
    Enum,
    Exact,
    Range,
}

///
/// FilterField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FilterField {
    pub name: String,
    pub kind: FilterKind,
}

///
/// FieldScan
/// Output of the single pass over an entity's non-relation fields.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldScan {
    pub special_fields: SpecialFields,
    pub search_fields: Vec<String>,
    pub filter_fields: Vec<FilterField>,
}

/// Normalize a field name for pattern matching: lowercase, with the
/// separators `_`, `-`, space, and `.` stripped. Idempotent.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' ' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Single pass over `entity`'s non-relation fields: special-field
/// assignment, searchable fields, and filterable fields with filter kind.
pub fn scan_fields(entity: &Entity, config: &AnalyzeConfig) -> Result<FieldScan, ConfigError> {
    let matchers = resolve_matchers(config)?;
    let mut scan = FieldScan::default();

    for field in &entity.fields {
        if field.is_relation() {
            continue;
        }

        let normalized = normalize_name(&field.name);

        if !scan.special_fields.is_complete() {
            assign_special_field(entity, field, &normalized, &matchers, &mut scan.special_fields);
        }

        if is_searchable(field, &normalized, config) {
            scan.search_fields.push(field.name.clone());
        }

        if let Some(kind) = filter_kind(field) {
            scan.filter_fields.push(FilterField {
                name: field.name.clone(),
                kind,
            });
        }
    }

    Ok(scan)
}

/// The default matcher table with configured overrides applied per key.
fn resolve_matchers(
    config: &AnalyzeConfig,
) -> Result<Vec<(SpecialFieldKey, NamePattern, TypeValidator)>, ConfigError> {
    let mut table: BTreeMap<SpecialFieldKey, (NamePattern, TypeValidator)> =
        default_matcher_table()
            .into_iter()
            .map(|(key, pattern, validator)| (key, (pattern, validator)))
            .collect();

    for matcher in &config.special_field_matchers {
        let key = matcher.key.parse::<SpecialFieldKey>().map_err(|()| {
            ConfigError::UnknownSpecialFieldKey {
                key: matcher.key.clone(),
            }
        })?;
        table.insert(key, (matcher.pattern.clone(), matcher.validator));
    }

    Ok(table
        .into_iter()
        .map(|(key, (pattern, validator))| (key, pattern, validator))
        .collect())
}

fn assign_special_field(
    entity: &Entity,
    field: &Field,
    normalized: &str,
    matchers: &[(SpecialFieldKey, NamePattern, TypeValidator)],
    special: &mut SpecialFields,
) {
    for (key, pattern, validator) in matchers {
        if special.get(*key).is_some() || !pattern.matches(normalized) {
            continue;
        }
        if !validator(field) {
            continue;
        }
        // A slug must be unique on its own; membership in a composite
        // constraint is not enough for single-field lookup.
        if *key == SpecialFieldKey::Slug && !is_field_unique(entity, &field.name, true) {
            continue;
        }

        special.set(*key, field);
        return;
    }
}

fn is_searchable(field: &Field, normalized: &str, config: &AnalyzeConfig) -> bool {
    if field.is_id || field.is_read_only || field.is_list {
        return false;
    }
    if !field.scalar_type().is_some_and(|t| t.is_textual()) {
        return false;
    }
    if config.exclude_sensitive_search_fields && config.is_sensitive_name(normalized) {
        return false;
    }

    true
}

fn filter_kind(field: &Field) -> Option<FilterKind> {
    if field.is_id || field.is_read_only {
        return None;
    }

    match field.kind {
        FieldKind::Enum => Some(if field.is_list {
            FilterKind::Array
        } else {
            FilterKind::Enum
        }),
        FieldKind::Scalar => {
            let ty = field.scalar_type()?;
            if !ty.supports_filtering() {
                return None;
            }

            Some(if field.is_list {
                FilterKind::Array
            } else if ty == ScalarType::Boolean {
                FilterKind::Boolean
            } else if ty.is_numeric() || ty.is_temporal() {
                FilterKind::Range
            } else {
                FilterKind::Exact
            })
        }
        FieldKind::Relation | FieldKind::Unsupported => None,
    }
}
