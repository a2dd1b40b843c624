use crate::{
    MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN, err, error::ErrorTree, node::Schema,
};
use convert_case::{Case, Casing};
use std::collections::BTreeMap;

/// Duplicate and malformed identifiers across entities, enums, and fields.
pub fn validate_names(schema: &Schema, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

    for entity in schema.entities() {
        check_type_name(&entity.name, "entity", errs);

        if let Some(prev) = seen.insert(&entity.name, "entity") {
            err!(
                errs,
                "duplicate name '{}' declared as {prev} and entity",
                entity.name
            );
        }

        validate_field_names(entity, errs);
    }

    for enum_def in schema.enums() {
        check_type_name(&enum_def.name, "enum", errs);

        if let Some(prev) = seen.insert(&enum_def.name, "enum") {
            err!(
                errs,
                "duplicate name '{}' declared as {prev} and enum",
                enum_def.name
            );
        }
    }
}

fn validate_field_names(entity: &crate::node::Entity, errs: &mut ErrorTree) {
    let mut seen: BTreeMap<&str, ()> = BTreeMap::new();

    for field in &entity.fields {
        if field.name.is_empty() {
            errs.add_at(&entity.name, "field with empty name");
            continue;
        }
        if field.name.len() > MAX_FIELD_NAME_LEN {
            errs.add_at(
                format!("{}.{}", entity.name, field.name),
                format!("field name longer than {MAX_FIELD_NAME_LEN} characters"),
            );
        }
        if seen.insert(&field.name, ()).is_some() {
            errs.add_at(&entity.name, format!("duplicate field '{}'", field.name));
        }
    }
}

fn check_type_name(name: &str, kind: &str, errs: &mut ErrorTree) {
    if name.is_empty() {
        err!(errs, "{kind} with empty name");
        return;
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        errs.add_at(
            name,
            format!("{kind} name longer than {MAX_ENTITY_NAME_LEN} characters"),
        );
    }
    // Round-trip comparison; a PascalCase name converts to itself.
    if name.to_case(Case::Pascal) != name {
        errs.add_at(name, format!("{kind} name must be PascalCase"));
    }
}
