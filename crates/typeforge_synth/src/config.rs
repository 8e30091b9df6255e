//! Configuration for declaration synthesis.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typeforge_foundation::naming::kebab;
use typeforge_foundation::{Error, Result};

/// GraphQL library the generated code targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// `@nestjs/graphql`.
    #[default]
    #[serde(rename = "nestjs")]
    NestJs,
    /// `type-graphql`.
    #[serde(rename = "type-graphql")]
    TypeGraphql,
}

impl Dialect {
    /// Returns the package exporting `Field`, the container decorator, `Int` and `Float`.
    #[must_use]
    pub const fn package(self) -> &'static str {
        match self {
            Self::NestJs => "@nestjs/graphql",
            Self::TypeGraphql => "type-graphql",
        }
    }

    /// Returns the option spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NestJs => "nestjs",
            Self::TypeGraphql => "type-graphql",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nestjs" => Ok(Self::NestJs),
            "type-graphql" => Ok(Self::TypeGraphql),
            _ => Err(Error::invalid_option("dialect", s)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How nullable properties are expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullableStyle {
    /// Append `| null` to the declared type.
    #[default]
    Union,
    /// Rely on the optionality marker only.
    Optional,
}

impl FromStr for NullableStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "union" => Ok(Self::Union),
            "optional" => Ok(Self::Optional),
            _ => Err(Error::invalid_option("nullableStyle", s)),
        }
    }
}

/// File naming convention for generated modules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCase {
    /// The symbol name as written (`./StringFilter.input`, `./APIKey.input`).
    #[default]
    Pascal,
    /// `./string-filter.input`.
    Kebab,
}

impl FileCase {
    /// Converts a symbol name to a file stem.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Pascal => name.to_owned(),
            Self::Kebab => kebab(name),
        }
    }
}

impl FromStr for FileCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pascal" => Ok(Self::Pascal),
            "kebab" => Ok(Self::Kebab),
            _ => Err(Error::invalid_option("fileCase", s)),
        }
    }
}

/// Options controlling the shape of generated declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Target GraphQL library.
    pub dialect: Dialect,

    /// How nullable properties are expressed.
    pub nullable_style: NullableStyle,

    /// Update inputs take bare values only, without atomic operation inputs.
    pub no_atomic_operations: bool,

    /// File naming convention for generated modules.
    pub file_case: FileCase,

    /// Package of the database client; runtime symbols import from `<pkg>/runtime/library`.
    pub prisma_client_import: String,

    /// Container decorator applied to every declaration.
    pub decorator: String,

    /// Every option as supplied, documented or not.
    #[serde(skip)]
    pub options: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::NestJs,
            nullable_style: NullableStyle::Union,
            no_atomic_operations: true,
            file_case: FileCase::Pascal,
            prisma_client_import: "@prisma/client".to_owned(),
            decorator: "InputType".to_owned(),
            options: BTreeMap::new(),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_option(key, value)),
    }
}

impl GeneratorConfig {
    /// Builds a configuration from raw key/value options.
    ///
    /// Documented keys are parsed and validated; every key, including
    /// unknown ones, is kept unmodified in [`GeneratorConfig::options`].
    pub fn from_options<I, K, V>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut config = Self::default();
        for (key, value) in options {
            let (key, value) = (key.into(), value.into());
            match key.as_str() {
                "dialect" => config.dialect = value.parse()?,
                "nullableStyle" => config.nullable_style = value.parse()?,
                "noAtomicOperations" => config.no_atomic_operations = parse_bool(&key, &value)?,
                "fileCase" => config.file_case = value.parse()?,
                "prismaClientImport" => config.prisma_client_import.clone_from(&value),
                "decorator" => config.decorator.clone_from(&value),
                _ => {}
            }
            config.options.insert(key, value);
        }
        Ok(config)
    }

    /// Decodes a JSON object of options.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| Error::parse(e.to_string()))?;
        Self::from_options(map.into_iter().map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, text)
        }))
    }

    /// Creates a configuration targeting `type-graphql`.
    #[must_use]
    pub fn type_graphql() -> Self {
        Self {
            dialect: Dialect::TypeGraphql,
            ..Self::default()
        }
    }

    /// Creates a configuration with atomic update operations enabled.
    #[must_use]
    pub fn atomic() -> Self {
        Self {
            no_atomic_operations: false,
            ..Self::default()
        }
    }

    /// Returns a raw option as supplied.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Returns true if nullable properties append `| null`.
    #[must_use]
    pub fn null_in_union(&self) -> bool {
        self.nullable_style == NullableStyle::Union
    }

    /// Builder method to set the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Builder method to set the nullable style.
    #[must_use]
    pub fn with_nullable_style(mut self, style: NullableStyle) -> Self {
        self.nullable_style = style;
        self
    }

    /// Builder method to enable/disable atomic update operations.
    #[must_use]
    pub fn with_atomic_operations(mut self, enabled: bool) -> Self {
        self.no_atomic_operations = !enabled;
        self
    }

    /// Builder method to set the file naming convention.
    #[must_use]
    pub fn with_file_case(mut self, case: FileCase) -> Self {
        self.file_case = case;
        self
    }

    /// Builder method to set the database client package.
    #[must_use]
    pub fn with_prisma_client_import(mut self, package: impl Into<String>) -> Self {
        self.prisma_client_import = package.into();
        self
    }

    /// Builder method to set the container decorator.
    #[must_use]
    pub fn with_decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorator = decorator.into();
        self
    }
}
