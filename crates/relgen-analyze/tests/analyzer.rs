//! End-to-end analysis over small hand-built schemas.

mod common;

use common::{author_post_schema, fk_relation, id_field, rbac_blog_schema};
use relgen_analyze::prelude::*;
use relgen_schema::prelude::*;

#[test]
fn fk_owning_relation_without_back_reference_is_many_to_one() {
    let schema = author_post_schema(false);
    let post = schema.get_entity("Post").unwrap();

    let result = analyze(post, &schema, &AnalyzeConfig::default()).unwrap();
    let author = &result.relationships[0];
    assert!(author.is_many_to_one);

    assert_eq!(
        result.capabilities.foreign_keys,
        vec![ForeignKeyInfo {
            fields: vec!["authorId".to_string()],
            alias: "author".to_string(),
            relation_name: None,
            target: "User".to_string(),
        }]
    );
}

#[test]
fn unique_fk_promotes_to_one_to_one() {
    let schema = author_post_schema(true);
    let post = schema.get_entity("Post").unwrap();

    let result = analyze(post, &schema, &AnalyzeConfig::default()).unwrap();
    assert!(result.relationships[0].is_one_to_one);
}

#[test]
fn composite_key_bridge_is_a_junction() {
    let schema = rbac_blog_schema();
    let post_role = schema.get_entity("PostRole").unwrap();

    let result = analyze(post_role, &schema, &AnalyzeConfig::default()).unwrap();
    assert!(result.is_junction);

    // Both bridge legs classify many-to-one but are never auto-included.
    assert!(result.relationships.iter().all(|r| r.is_many_to_one));
    assert!(result.auto_include_relations.is_empty());
}

#[test]
fn one_sided_list_to_plain_entity_is_one_to_many() {
    let schema = rbac_blog_schema();
    let user = schema.get_entity("User").unwrap();

    let result = analyze(user, &schema, &AnalyzeConfig::default()).unwrap();
    let posts = result
        .relationships
        .iter()
        .find(|r| r.field_name == "posts")
        .unwrap();
    assert!(posts.is_one_to_many);
}

#[test]
fn one_sided_list_to_junction_is_many_to_many() {
    let schema = rbac_blog_schema();
    let user = schema.get_entity("User").unwrap();

    let result = analyze(user, &schema, &AnalyzeConfig::default()).unwrap();
    let assignments = result
        .relationships
        .iter()
        .find(|r| r.field_name == "assignments")
        .unwrap();
    assert!(assignments.is_many_to_many);
}

#[test]
fn composite_only_slug_disables_find_by_slug() {
    let mut post = Entity::new(
        "Post",
        vec![
            id_field(),
            Field::scalar("slug", "String"),
            Field::scalar("tenantId", "Int"),
        ],
    );
    post.unique_constraints = vec![UniqueConstraint::new(&["slug", "tenantId"])];
    let schema = Schema::new(vec![post], vec![]);

    let post = schema.get_entity("Post").unwrap();
    let result = analyze(post, &schema, &AnalyzeConfig::default()).unwrap();
    assert!(!result.capabilities.has_find_by_slug);
    assert!(result.special_fields.slug.is_none());
}

#[test]
fn capabilities_reflect_conventional_content_entity() {
    let mut slug = Field::scalar("slug", "String");
    slug.is_unique = true;

    let article = Entity::new(
        "Article",
        vec![
            id_field(),
            Field::scalar("title", "String"),
            Field::scalar("body", "String"),
            slug,
            Field::scalar("published", "Boolean"),
            Field::scalar("viewCount", "Int"),
            Field::scalar("deletedAt", "DateTime"),
            Field::scalar("passwordHint", "String"),
        ],
    );
    let schema = Schema::new(vec![article], vec![]);

    let article = schema.get_entity("Article").unwrap();
    let result = analyze(article, &schema, &AnalyzeConfig::default()).unwrap();
    let caps = &result.capabilities;

    assert!(caps.has_find_by_slug);
    assert!(caps.has_published);
    assert!(caps.has_soft_delete);
    assert!(caps.has_search);
    assert_eq!(
        caps.search_fields,
        vec!["title".to_string(), "body".to_string(), "slug".to_string()]
    );
    assert!(caps.has_filters);
    assert!(result.special_fields.views.is_some());
}

#[test]
fn self_relation_category_tree() {
    let mut children = Field::relation("children", "Category");
    children.is_list = true;

    let category = Entity::new(
        "Category",
        vec![
            id_field(),
            Field::scalar("parentId", "Int"),
            fk_relation("parent", "Category", &["parentId"]),
            children,
        ],
    );
    let schema = Schema::new(vec![category], vec![]);

    let category = schema.get_entity("Category").unwrap();
    let result = analyze(category, &schema, &AnalyzeConfig::default()).unwrap();

    let parent = result
        .relationships
        .iter()
        .find(|r| r.field_name == "parent")
        .unwrap();
    let children = result
        .relationships
        .iter()
        .find(|r| r.field_name == "children")
        .unwrap();

    assert!(parent.is_many_to_one);
    assert!(children.is_one_to_many);
    assert!(result.capabilities.has_parent_child);
    assert!(result.special_fields.parent_id.is_some());
}

#[test]
fn analysis_result_serializes_without_empty_error_list() {
    let schema = author_post_schema(false);
    let post = schema.get_entity("Post").unwrap();

    let result = analyze(post, &schema, &AnalyzeConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("errors").is_none());
    assert_eq!(json["is_junction"], serde_json::json!(false));
    assert_eq!(
        json["relationships"][0]["field_name"],
        serde_json::json!("author")
    );
}

#[test]
fn schema_validation_catches_broken_relation_metadata() {
    let post = Entity::new(
        "Post",
        vec![fk_relation("author", "User", &["missingField"])],
    );
    let user = Entity::new("User", vec![id_field()]);
    let schema = Schema::new(vec![post, user], vec![]);

    let errs = relgen_schema::validate::validate_schema(&schema);
    assert!(errs.is_err());
}
