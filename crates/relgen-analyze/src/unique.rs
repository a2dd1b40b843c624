use relgen_schema::node::Entity;
use std::collections::BTreeSet;

/// Whether a field is guaranteed unique.
///
/// A direct marker (`is_unique`, `is_id`) always counts. Otherwise the
/// unique field sets are consulted: with `exact_alone` the field must be a
/// singleton set of its own; without it, membership in any set (composite
/// included) is enough.
#[must_use]
pub fn is_field_unique(entity: &Entity, field_name: &str, exact_alone: bool) -> bool {
    let Some(field) = entity.get_field(field_name) else {
        return false;
    };

    if field.is_unique || field.is_id {
        return true;
    }

    if exact_alone {
        unique_field_sets(entity).any(|set| set.len() == 1 && set.contains(field_name))
    } else {
        unique_field_sets(entity).any(|set| set.contains(field_name))
    }
}

/// Whether a set of fields is jointly guaranteed unique.
///
/// A single name delegates to [`is_field_unique`] with `exact_alone`. A
/// multi-name set is unique only when some unique field set equals it
/// exactly; strict subsets or supersets never count.
#[must_use]
pub fn are_fields_unique(entity: &Entity, field_names: &[String]) -> bool {
    match field_names {
        [] => false,
        [single] => is_field_unique(entity, single, true),
        names => {
            let wanted: BTreeSet<&str> = names.iter().map(String::as_str).collect();
            unique_field_sets(entity).any(|set| set == wanted)
        }
    }
}

/// Unique field sets declared on the entity: its unique constraints plus
/// the primary key, which is a unique constraint in all but name.
fn unique_field_sets(entity: &Entity) -> impl Iterator<Item = BTreeSet<&str>> {
    entity
        .unique_constraints
        .iter()
        .map(|c| c.field_set())
        .chain(entity.primary_key.iter().map(|pk| pk.field_set()))
}
