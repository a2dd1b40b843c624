//! Schema node definitions.
//!
//! One file per node kind, mirroring the shape the external parser produces:
//! a [`Schema`] owns ordered entities and enums, entities own ordered fields
//! plus key metadata. Nodes are read-only once the schema is built.

pub mod constraint;
pub mod entity;
#[path = "enum.rs"]
pub mod enum_def;
pub mod field;
pub mod primary_key;
pub mod schema;

pub use constraint::UniqueConstraint;
pub use entity::Entity;
pub use enum_def::EnumDef;
pub use field::{DefaultValue, Field};
pub use primary_key::PrimaryKey;
pub use schema::Schema;
