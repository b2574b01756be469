//! Enum type tables for enum-typed parameters.

use crate::definitions::enum_type_name;
use crate::parameter::{Parameter, ScalarType};

use super::types::{EnumConstant, EnumSpec};

/// Name of the function mapping an enum value back to its label.
#[must_use]
pub fn name_function(parameter: &Parameter) -> String {
    format!("config_name_enum_{}", parameter.flat_ref)
}

/// Name of the function parsing a label into an enum value.
#[must_use]
pub fn parse_function(parameter: &Parameter) -> String {
    format!("set_enum_{}", parameter.flat_ref)
}

/// Builds the enum table for `parameter`, or `None` when it is not an enum.
#[must_use]
pub fn enum_spec(parameter: &Parameter) -> Option<EnumSpec> {
    if parameter.scalar_type != ScalarType::Enum {
        return None;
    }
    let constants = parameter
        .allowed_values
        .iter()
        .map(|label| EnumConstant {
            constant_name: constant_name(&parameter.name, label),
            source_label: label.clone(),
        })
        .collect();
    Some(EnumSpec {
        parameter: parameter.name.clone(),
        flat_ref: parameter.flat_ref.clone(),
        type_name: enum_type_name(parameter),
        name_function: name_function(parameter),
        parse_function: parse_function(parameter),
        constants,
    })
}

/// Upper-cased `<name>_<label>` with `.`, `-` and spaces folded to `_`.
///
/// Upper-casing is Unicode-aware, so a label such as `straße` becomes
/// `STRASSE`.
fn constant_name(name: &str, label: &str) -> String {
    format!("{name}_{label}")
        .to_uppercase()
        .replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("level", "low", "LEVEL_LOW")]
    #[case("main.deep.enumtest", "goodbye", "MAIN_DEEP_ENUMTEST_GOODBYE")]
    #[case("log.format", "pretty-json", "LOG_FORMAT_PRETTY_JSON")]
    #[case("mode", "read only", "MODE_READ_ONLY")]
    #[case("mode", "élan", "MODE_ÉLAN")]
    #[case("road", "straße", "ROAD_STRASSE")]
    fn folds_constant_names(#[case] name: &str, #[case] label: &str, #[case] expected: &str) {
        assert_eq!(constant_name(name, label), expected);
    }
}
