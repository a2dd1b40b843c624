use derive_more::{Display, FromStr};
use serde::Serialize;

///
/// FieldKind
/// How a field's declared type resolves within the schema.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldKind {
    /// The declared type names an enum in the schema.
    Enum,

    /// The declared type names another entity.
    Relation,

    /// The declared type is a builtin scalar.
    Scalar,

    /// The declared type could not be resolved to anything known.
    Unsupported,
}

impl FieldKind {
    #[must_use]
    pub const fn is_relation(self) -> bool {
        matches!(self, Self::Relation)
    }
}

///
/// ScalarType
/// Builtin scalar types a declared type name may resolve to.
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum ScalarType {
    BigInt,
    Boolean,
    Bytes,
    DateTime,
    Decimal,
    Float,
    Int,
    Json,
    String,
}

impl ScalarType {
    /// Resolve a declared type name, `None` for non-scalar names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        name.parse::<Self>().ok()
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::BigInt | Self::Decimal | Self::Float | Self::Int
        )
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::DateTime)
    }

    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::String)
    }

    /// Scalars that downstream query layers can filter on.
    #[must_use]
    pub const fn supports_filtering(self) -> bool {
        !matches!(self, Self::Bytes | Self::Json)
    }
}
