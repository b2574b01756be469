//! Resolved parameters and their scalar types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::declaration::ParameterDecl;
use crate::error::BuildError;

/// Scalar kinds a parameter can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Owned text.
    String,
    /// Signed 64-bit integer.
    Int,
    /// Double-precision float.
    Double,
    /// Boolean switch.
    Boolean,
    /// Byte size written with an optional unit suffix (for example, `10 mb`).
    Size,
    /// One of a closed set of labels.
    Enum,
}

impl ScalarType {
    /// Every recognised scalar type, in declaration-format order.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Int,
        Self::Double,
        Self::Boolean,
        Self::Size,
        Self::Enum,
    ];

    /// Returns the name used in declaration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Size => "size",
            Self::Enum => "enum",
        }
    }

    /// Whether values of this type go through the bounded setter and may carry
    /// an allow-list.
    #[must_use]
    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::String | Self::Int | Self::Double | Self::Size)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a type name is not one of [`ScalarType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTypeName(pub String);

impl FromStr for ScalarType {
    type Err = UnknownTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| UnknownTypeName(s.to_owned()))
    }
}

/// A declaration with its type resolved and its identifier fragment derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Dotted path of the member in the generated record.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Literal default; empty when unset.
    pub default: String,
    /// Dotted key path in the serialized configuration file.
    pub serialization_key: String,
    /// Environment variable; empty when unset.
    pub env_var: String,
    /// Long CLI flag; empty when unset.
    pub cli_long: String,
    /// Short CLI flag; empty when unset.
    pub cli_short: String,
    /// Resolved scalar type.
    pub scalar_type: ScalarType,
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
    /// Enum variants or allow-list, in declaration order.
    pub allowed_values: Vec<String>,
    /// `name` with every `.` replaced by `_`.
    pub flat_ref: String,
}

impl Parameter {
    /// Resolves a declaration into a typed parameter.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownScalarType`] when the declared type is not
    /// recognised. No fallback type is substituted. Returns
    /// [`BuildError::EmptyEnum`] for an enum without options.
    pub fn resolve(decl: &ParameterDecl) -> Result<Self, BuildError> {
        let scalar_type = decl.scalar_type.parse().map_err(
            |UnknownTypeName(scalar_type)| BuildError::UnknownScalarType {
                parameter: decl.name.clone(),
                scalar_type,
            },
        )?;
        if scalar_type == ScalarType::Enum && decl.allowed_values.is_empty() {
            return Err(BuildError::EmptyEnum {
                parameter: decl.name.clone(),
            });
        }
        Ok(Self {
            name: decl.name.clone(),
            description: decl.description.clone(),
            default: decl.default.clone(),
            serialization_key: decl.serialization_key.clone(),
            env_var: decl.env_var.clone(),
            cli_long: decl.cli_long.clone(),
            cli_short: decl.cli_short.clone(),
            scalar_type,
            min: decl.min,
            max: decl.max,
            allowed_values: decl.allowed_values.clone(),
            flat_ref: flat_ref(&decl.name),
        })
    }

    /// Access path of the parameter's field inside the configuration record.
    #[must_use]
    pub fn field_path(&self) -> &str {
        &self.name
    }
}

/// Derives the collision-free identifier fragment for a dotted path.
#[must_use]
pub fn flat_ref(path: &str) -> String {
    path.replace('.', "_")
}
