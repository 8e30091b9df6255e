//! Error types for the Typeforge system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Typeforge operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", context_suffix(.context.as_ref()))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    ///
    /// Context already present is kept; the innermost site wins.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        match &mut self.context {
            Some(existing) => existing.fill_from(context),
            None => self.context = Some(context),
        }
        self
    }

    /// Creates an unmapped combination error for a rendered rule key.
    #[must_use]
    pub fn unmapped(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnmappedCombination(key.into()))
    }

    /// Creates an unresolved relation target error.
    #[must_use]
    pub fn unresolved_relation(field: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedRelationTarget {
            field: field.into(),
            target: target.into(),
        })
    }

    /// Creates an unresolved enum target error.
    #[must_use]
    pub fn unresolved_enum(field: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedEnumTarget {
            field: field.into(),
            name: name.into(),
        })
    }

    /// Creates a conflicting import error.
    #[must_use]
    pub fn conflicting_import(
        symbol: impl Into<String>,
        existing: impl Into<String>,
        requested: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::ConflictingImport {
            symbol: symbol.into(),
            existing: existing.into(),
            requested: requested.into(),
        })
    }

    /// Creates a registry lookup failure.
    #[must_use]
    pub fn not_found(what: LookupKind, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            what,
            name: name.into(),
        })
    }

    /// Creates an invalid configuration option error.
    #[must_use]
    pub fn invalid_option(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOption {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Creates a descriptor parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse(message.into()))
    }

    /// Returns true if this is a registry lookup failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }
}

fn context_suffix(context: Option<&ErrorContext>) -> String {
    match context {
        Some(ctx) if ctx.declaration.is_some() || ctx.field.is_some() => format!(" ({ctx})"),
        _ => String::new(),
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// No mapping rule exists for a (subject, filter, cardinality, nullability) key.
    #[error("unmapped combination: {0}")]
    UnmappedCombination(String),

    /// A relation field names a model that is not in the schema registry.
    #[error("unresolved relation target: field {field} references unknown model {target}")]
    UnresolvedRelationTarget {
        /// The relation field.
        field: String,
        /// The missing model name.
        target: String,
    },

    /// An enum field names an enum that is not in the schema registry.
    #[error("unresolved enum target: field {field} references unknown enum {name}")]
    UnresolvedEnumTarget {
        /// The enum-typed field.
        field: String,
        /// The missing enum name.
        name: String,
    },

    /// One symbol was resolved to two different module paths within one file.
    #[error("conflicting import: {symbol} from {existing} and {requested}")]
    ConflictingImport {
        /// The symbol name.
        symbol: String,
        /// The path registered first.
        existing: String,
        /// The conflicting path.
        requested: String,
    },

    /// Registry lookup failed.
    #[error("{what} not found: {name}")]
    NotFound {
        /// What kind of entry was looked up.
        what: LookupKind,
        /// The name that was looked up.
        name: String,
    },

    /// A documented configuration option carries an unsupported value.
    #[error("invalid value for option {key}: {value}")]
    InvalidOption {
        /// The option key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Descriptor or schema input could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// The kinds of registry entries that can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    /// A schema model.
    Model,
    /// A schema enumeration.
    Enum,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "model"),
            Self::Enum => write!(f, "enum"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The declaration being synthesized.
    pub declaration: Option<String>,
    /// The field being resolved.
    pub field: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the declaration name.
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Sets the field name.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    fn fill_from(&mut self, outer: ErrorContext) {
        if self.declaration.is_none() {
            self.declaration = outer.declaration;
        }
        if self.field.is_none() {
            self.field = outer.field;
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.declaration, &self.field) {
            (Some(decl), Some(field)) => write!(f, "in {decl}.{field}"),
            (Some(decl), None) => write!(f, "in {decl}"),
            (None, Some(field)) => write!(f, "in field {field}"),
            (None, None) => Ok(()),
        }
    }
}
