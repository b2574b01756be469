//! Declaration records as they appear in a parameter file.
//!
//! Declarations are kept as plain text: type names are resolved and checked
//! later by [`crate::parameter::Parameter::resolve`], so a declaration file
//! with an unknown type still deserializes and fails with a
//! [`crate::BuildError`] instead of a parser error.

use serde::{Deserialize, Serialize};

/// Top-level document of a declaration file.
///
/// ```yaml
/// parameters:
///   - name: server.port
///     type: int
///     default: 8080
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Declarations in the order they were written.
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
}

/// A single parameter declaration.
///
/// String fields default to empty; an empty value means "not set" for every
/// optional binding (environment variable, CLI flags, default).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDecl {
    /// Dotted path naming the member in the generated record.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Literal default value.
    #[serde(deserialize_with = "scalar_text::deserialize")]
    pub default: String,
    /// Dotted key path in the serialized configuration file.
    #[serde(rename = "json")]
    pub serialization_key: String,
    /// Environment variable consulted for the value.
    #[serde(rename = "env")]
    pub env_var: String,
    /// Long command-line flag, without dashes.
    #[serde(rename = "arg-long")]
    pub cli_long: String,
    /// Short command-line flag.
    #[serde(rename = "arg-short")]
    pub cli_short: String,
    /// Scalar type name (`string`, `int`, `double`, `boolean`, `size`, `enum`).
    #[serde(rename = "type")]
    pub scalar_type: String,
    /// Lower bound for numeric and string-length checks.
    pub min: i64,
    /// Upper bound for numeric and string-length checks.
    pub max: i64,
    /// Enum variants, or an allow-list for other types.
    #[serde(rename = "options", deserialize_with = "scalar_text::deserialize_list")]
    pub allowed_values: Vec<String>,
}

/// Accepts any YAML scalar where the declaration format expects text.
///
/// Declaration authors write `default: 7` or `options: [1, 2]`; the literal
/// text is what ends up in the generated code either way.
mod scalar_text {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    impl From<Scalar> for String {
        fn from(value: Scalar) -> Self {
            match value {
                Scalar::Text(text) => text,
                Scalar::Integer(number) => number.to_string(),
                Scalar::Float(number) => number.to_string(),
                Scalar::Bool(flag) => flag.to_string(),
            }
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Scalar>::deserialize(deserializer)?;
        Ok(value.map(String::from).unwrap_or_default())
    }

    pub(super) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Option::<Vec<Scalar>>::deserialize(deserializer)?;
        Ok(values
            .unwrap_or_default()
            .into_iter()
            .map(String::from)
            .collect())
    }
}
