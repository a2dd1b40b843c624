use crate::{config::AnalyzeConfig, special::normalize_name};
use relgen_schema::node::{Entity, Field};
use std::collections::BTreeSet;

/// Whether `entity` is a many-to-many bridge.
///
/// Requirements, all order-independent in the field list:
/// - at least two (and at most `junction_max_relations`) relation fields
///   that own foreign keys; self-joins count twice,
/// - at most `junction_max_data_fields` data fields, meaning non-relation
///   fields outside the identifying key and not named as system/audit fields,
/// - the primary key, or some unique constraint, covering exactly the union
///   of the FK relations' own fields (the surrogate-identifier pattern).
#[must_use]
pub fn is_junction(entity: &Entity, config: &AnalyzeConfig) -> bool {
    let fk_relations: Vec<&Field> = entity.foreign_key_fields().collect();

    let max_relations = config.junction_max_relations.max(2);
    if fk_relations.len() < 2 || fk_relations.len() > max_relations {
        return false;
    }

    if data_field_count(entity, config) > config.junction_max_data_fields {
        return false;
    }

    let own_union: BTreeSet<&str> = fk_relations
        .iter()
        .flat_map(|f| f.relation_fields.iter().map(String::as_str))
        .collect();

    let pk_covers = entity
        .primary_key
        .as_ref()
        .is_some_and(|pk| pk.field_set() == own_union);
    let unique_covers = entity
        .unique_constraints
        .iter()
        .any(|c| c.field_set() == own_union);

    pk_covers || unique_covers
}

fn data_field_count(entity: &Entity, config: &AnalyzeConfig) -> usize {
    let id_names = entity.id_field_names();
    let system_names: BTreeSet<String> = config
        .system_field_names
        .iter()
        .map(|n| normalize_name(n))
        .collect();

    entity
        .fields
        .iter()
        .filter(|f| {
            !f.is_relation()
                && !id_names.contains(f.name.as_str())
                && !system_names.contains(&normalize_name(&f.name))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relgen_schema::node::{PrimaryKey, UniqueConstraint};

    fn fk_relation(name: &str, target: &str, own: &str) -> Field {
        let mut field = Field::relation(name, target);
        field.relation_fields = vec![own.to_string()];
        field.relation_references = vec!["id".to_string()];
        field
    }

    fn user_role() -> Entity {
        let mut entity = Entity::new(
            "UserRole",
            vec![
                Field::scalar("userId", "Int"),
                Field::scalar("roleId", "Int"),
                fk_relation("user", "User", "userId"),
                fk_relation("role", "Role", "roleId"),
            ],
        );
        entity.primary_key = Some(PrimaryKey::new(&["userId", "roleId"]));
        entity
    }

    #[test]
    fn composite_pk_bridge_is_a_junction() {
        assert!(is_junction(&user_role(), &AnalyzeConfig::default()));
    }

    #[test]
    fn surrogate_id_bridge_is_a_junction() {
        let mut id = Field::scalar("id", "Int");
        id.is_id = true;

        let mut entity = Entity::new(
            "UserRole",
            vec![
                id,
                Field::scalar("userId", "Int"),
                Field::scalar("roleId", "Int"),
                fk_relation("user", "User", "userId"),
                fk_relation("role", "Role", "roleId"),
            ],
        );
        entity.primary_key = Some(PrimaryKey::new(&["id"]));
        entity.unique_constraints = vec![UniqueConstraint::new(&["userId", "roleId"])];

        assert!(is_junction(&entity, &AnalyzeConfig::default()));
    }

    #[test]
    fn audit_fields_do_not_count_as_data() {
        let mut entity = user_role();
        entity.fields.push(Field::scalar("createdAt", "DateTime"));
        entity.fields.push(Field::scalar("updated_at", "DateTime"));

        assert!(is_junction(&entity, &AnalyzeConfig::default()));
    }

    #[test]
    fn too_many_data_fields_disqualify() {
        let mut entity = user_role();
        entity.fields.push(Field::scalar("a", "Int"));
        entity.fields.push(Field::scalar("b", "Int"));
        entity.fields.push(Field::scalar("c", "Int"));

        // userId/roleId sit in the primary key, so a, b, c are the data
        // fields and the default threshold of 2 is exceeded.
        assert!(!is_junction(&entity, &AnalyzeConfig::default()));

        let mut config = AnalyzeConfig::default();
        config.junction_max_data_fields = 3;
        assert!(is_junction(&entity, &config));
    }

    #[test]
    fn key_must_cover_exactly_the_fk_union() {
        let mut entity = user_role();
        entity.primary_key = Some(PrimaryKey::new(&["userId"]));

        assert!(!is_junction(&entity, &AnalyzeConfig::default()));
    }

    #[test]
    fn one_fk_relation_is_not_a_junction() {
        let mut entity = Entity::new(
            "Profile",
            vec![
                Field::scalar("userId", "Int"),
                fk_relation("user", "User", "userId"),
            ],
        );
        entity.primary_key = Some(PrimaryKey::new(&["userId"]));

        assert!(!is_junction(&entity, &AnalyzeConfig::default()));
    }

    #[test]
    fn self_join_bridge_counts_both_sides() {
        let mut entity = Entity::new(
            "Follow",
            vec![
                Field::scalar("followerId", "Int"),
                Field::scalar("followeeId", "Int"),
                fk_relation("follower", "User", "followerId"),
                fk_relation("followee", "User", "followeeId"),
            ],
        );
        entity.primary_key = Some(PrimaryKey::new(&["followerId", "followeeId"]));

        assert!(is_junction(&entity, &AnalyzeConfig::default()));
    }

    #[test]
    fn detection_is_field_order_independent() {
        let mut entity = user_role();
        entity.fields.reverse();

        assert!(is_junction(&entity, &AnalyzeConfig::default()));
    }
}
