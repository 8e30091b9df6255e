//! Scalar kinds and cardinality shared by every layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Scalar kind of a schema field.
///
/// Spelled the way the schema language spells it (`String`, `DateTime`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScalarKind {
    /// UTF-8 text.
    String,
    /// 32-bit integer.
    Int,
    /// Double precision float.
    Float,
    /// True or false.
    Boolean,
    /// Timestamp with timezone.
    DateTime,
    /// Raw bytes.
    Bytes,
    /// Arbitrary precision decimal.
    Decimal,
    /// 64-bit integer.
    BigInt,
    /// Opaque JSON document.
    Json,
}

impl ScalarKind {
    /// Every scalar kind, in declaration order.
    pub const ALL: [ScalarKind; 9] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::Boolean,
        Self::DateTime,
        Self::Bytes,
        Self::Decimal,
        Self::BigInt,
        Self::Json,
    ];

    /// Returns the schema spelling of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::Bytes => "Bytes",
            Self::Decimal => "Decimal",
            Self::BigInt => "BigInt",
            Self::Json => "Json",
        }
    }

    /// Returns the prefix used when naming filter and update declarations.
    ///
    /// Identical to the schema spelling except `Boolean`, which is `Bool`.
    #[must_use]
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Boolean => "Bool",
            other => other.as_str(),
        }
    }

    /// Returns true for kinds that support arithmetic update operators.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Decimal | Self::BigInt)
    }

    /// Returns true for kinds with a natural ordering (`lt`, `gt`, ...).
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        self.is_numeric() || matches!(self, Self::String | Self::DateTime)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::parse(format!("unknown scalar kind: {s}")))
    }
}

/// Whether a field holds one value or an ordered sequence of values.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one value.
    #[default]
    Single,
    /// An ordered sequence of values.
    List,
}

impl Cardinality {
    /// Both cardinalities.
    pub const ALL: [Cardinality; 2] = [Self::Single, Self::List];

    /// Returns true for [`Cardinality::List`].
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::List => write!(f, "list"),
        }
    }
}
