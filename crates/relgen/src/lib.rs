//! ## Crate layout
//! - `schema`: the parsed data-model AST and structural validation.
//! - `analyze`: relationship classification, junction detection, special
//!   fields, and query capabilities.
//!
//! The `prelude` module mirrors the surface a code generator consumes.

pub use relgen_analyze as analyze;
pub use relgen_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use relgen_analyze::prelude::*;
    pub use relgen_schema::prelude::*;
}
