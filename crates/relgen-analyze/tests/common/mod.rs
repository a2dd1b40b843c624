//! Schema fixture builders shared by the integration tests.
#![allow(dead_code)]

use relgen_schema::prelude::*;

pub fn fk_relation(name: &str, target: &str, own: &[&str]) -> Field {
    let mut field = Field::relation(name, target);
    field.relation_fields = own.iter().map(ToString::to_string).collect();
    field.relation_references = vec!["id".to_string(); own.len()];
    field
}

pub fn id_field() -> Field {
    let mut id = Field::scalar("id", "Int");
    id.is_id = true;
    id
}

/// `Post.author -> User` owning `[authorId]`, with no reciprocal field on
/// `User`, so classification takes the unidirectional FK branch.
pub fn author_post_schema(author_id_unique: bool) -> Schema {
    let user = Entity::new("User", vec![id_field()]);

    let mut author_id = Field::scalar("authorId", "Int");
    author_id.is_required = true;
    author_id.is_unique = author_id_unique;

    let post = Entity::new(
        "Post",
        vec![
            id_field(),
            author_id,
            Field::scalar("title", "String"),
            fk_relation("author", "User", &["authorId"]),
        ],
    );

    Schema::new(vec![user, post], vec![])
}

/// User / Post / Role / PostRole, where `PostRole` bridges Post and Role.
/// Neither `Post` nor `PostRole` declares a relation typed `User`, so
/// `User.posts` and `User.assignments` stay one-sided lists.
pub fn rbac_blog_schema() -> Schema {
    let mut posts = Field::relation("posts", "Post");
    posts.is_list = true;
    let mut assignments = Field::relation("assignments", "PostRole");
    assignments.is_list = true;

    let user = Entity::new("User", vec![id_field(), posts, assignments]);

    let post = Entity::new(
        "Post",
        vec![id_field(), Field::scalar("title", "String")],
    );

    let role = Entity::new("Role", vec![id_field()]);

    let mut post_role = Entity::new(
        "PostRole",
        vec![
            Field::scalar("postId", "Int"),
            Field::scalar("roleId", "Int"),
            fk_relation("post", "Post", &["postId"]),
            fk_relation("role", "Role", &["roleId"]),
        ],
    );
    post_role.primary_key = Some(PrimaryKey::new(&["postId", "roleId"]));

    Schema::new(vec![user, post, role, post_role], vec![])
}
