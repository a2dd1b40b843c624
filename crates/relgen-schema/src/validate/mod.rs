//! Schema validation orchestration and shared helpers.

pub mod keys;
pub mod naming;
pub mod relation;

use crate::{error::ErrorTree, node::Schema};

/// Run full structural validation in a staged, deterministic order.
///
/// Dangling relation *targets* are deliberately not checked here: resolving
/// them is the analyzer's concern, with its own error policy.
pub fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    naming::validate_names(schema, &mut errors);
    keys::validate_keys(schema, &mut errors);
    relation::validate_relation_fields(schema, &mut errors);

    errors.result()
}
