use crate::config::ConfigError;
use thiserror::Error as ThisError;

///
/// AnalyzeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AnalyzeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A relation field's declared target entity is absent from the schema.
    #[error("entity '{entity}', field '{field}': relation target '{target}' not found in schema")]
    UnresolvedRelation {
        entity: String,
        field: String,
        target: String,
    },
}
