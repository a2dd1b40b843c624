use crate::{
    error::ErrorTree,
    node::{Entity, Field, Schema},
};

/// Relation-field invariants that hold regardless of whether the relation
/// target resolves: own/referenced field lists agree in length, own fields
/// exist on the declaring entity, and non-relation fields carry no relation
/// metadata.
pub fn validate_relation_fields(schema: &Schema, errs: &mut ErrorTree) {
    for entity in schema.entities() {
        for field in &entity.fields {
            if field.is_relation() {
                check_relation_field(entity, field, errs);
            } else {
                check_non_relation_field(entity, field, errs);
            }
        }
    }
}

fn check_relation_field(entity: &Entity, field: &Field, errs: &mut ErrorTree) {
    let route = format!("{}.{}", entity.name, field.name);

    let own = &field.relation_fields;
    let referenced = &field.relation_references;

    if !own.is_empty() && referenced.is_empty() {
        errs.add_at(&route, "relation declares own fields but no referenced fields");
    } else if own.len() != referenced.len() && !own.is_empty() {
        errs.add_at(
            &route,
            format!(
                "relation declares {} own field(s) but {} referenced field(s)",
                own.len(),
                referenced.len()
            ),
        );
    }

    for name in own {
        match entity.get_field(name) {
            None => {
                errs.add_at(&route, format!("own field '{name}' does not exist"));
            }
            Some(fk) if fk.is_relation() => {
                errs.add_at(&route, format!("own field '{name}' is itself a relation"));
            }
            Some(_) => {}
        }
    }
}

fn check_non_relation_field(entity: &Entity, field: &Field, errs: &mut ErrorTree) {
    if field.relation_name.is_some()
        || !field.relation_fields.is_empty()
        || !field.relation_references.is_empty()
    {
        errs.add_at(
            format!("{}.{}", entity.name, field.name),
            "non-relation field carries relation metadata",
        );
    }
}
