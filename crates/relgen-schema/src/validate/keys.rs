use crate::{
    error::ErrorTree,
    node::{Entity, Schema},
};
use std::collections::BTreeSet;

/// Primary keys and unique constraints must reference existing fields,
/// be non-empty, and carry no duplicate members.
pub fn validate_keys(schema: &Schema, errs: &mut ErrorTree) {
    for entity in schema.entities() {
        if let Some(pk) = &entity.primary_key {
            check_field_set(entity, "primary key", &pk.fields, errs);
        }

        for constraint in &entity.unique_constraints {
            check_field_set(entity, "unique constraint", &constraint.fields, errs);
        }
    }
}

fn check_field_set(entity: &Entity, label: &str, fields: &[String], errs: &mut ErrorTree) {
    if fields.is_empty() {
        errs.add_at(&entity.name, format!("empty {label}"));
        return;
    }

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for name in fields {
        if entity.get_field(name).is_none() {
            errs.add_at(
                &entity.name,
                format!("{label} references unknown field '{name}'"),
            );
        }
        if !seen.insert(name) {
            errs.add_at(&entity.name, format!("{label} repeats field '{name}'"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Field, PrimaryKey, UniqueConstraint};

    #[test]
    fn dangling_key_fields_are_reported() {
        let mut entity = Entity::new("User", vec![Field::scalar("id", "Int")]);
        entity.primary_key = Some(PrimaryKey::new(&["uuid"]));
        entity.unique_constraints = vec![UniqueConstraint::new(&["email", "email"])];

        let schema = Schema::new(vec![entity], vec![]);
        let mut errs = ErrorTree::new();
        validate_keys(&schema, &mut errs);

        let rendered = errs.to_string();
        assert!(rendered.contains("primary key references unknown field 'uuid'"));
        assert!(rendered.contains("unique constraint references unknown field 'email'"));
        assert!(rendered.contains("unique constraint repeats field 'email'"));
    }

    #[test]
    fn empty_constraint_is_reported() {
        let mut entity = Entity::new("User", vec![Field::scalar("id", "Int")]);
        entity.unique_constraints = vec![UniqueConstraint::new(&[])];

        let schema = Schema::new(vec![entity], vec![]);
        let mut errs = ErrorTree::new();
        validate_keys(&schema, &mut errs);

        assert!(errs.to_string().contains("empty unique constraint"));
    }
}
