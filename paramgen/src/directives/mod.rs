//! Per-parameter generation directives.
//!
//! Each directive is derived from one parameter on its own; the trees play no
//! part here. Every list keeps declaration order.

mod enums;
mod types;

pub use enums::{enum_spec, name_function, parse_function};
pub use types::{
    CliArgKind, CliBinding, DefaultBinding, DumpLine, EnumConstant, EnumSpec, EnvBinding,
    FormatSpecifier, SetterCall, SetterKind, ValidatorElement, ValidatorTable, ValueAccess,
};

use serde::Serialize;

use crate::parameter::{Parameter, ScalarType};

/// All per-parameter directives of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Directives {
    /// Environment bindings for parameters naming a variable.
    pub env_bindings: Vec<EnvBinding>,
    /// Default bindings for parameters declaring a default.
    pub default_bindings: Vec<DefaultBinding>,
    /// Command-line bindings for parameters with both flag forms.
    pub cli_bindings: Vec<CliBinding>,
    /// Allow-list tables.
    pub validator_tables: Vec<ValidatorTable>,
    /// One setter call per parameter.
    pub setter_calls: Vec<SetterCall>,
    /// Enum tables for enum parameters.
    pub enums: Vec<EnumSpec>,
    /// One dump line per parameter.
    pub dump: Vec<DumpLine>,
    /// String fields that must be released before reuse.
    pub cleanup: Vec<String>,
}

impl Directives {
    /// Assembles the directives for `parameters`.
    #[must_use]
    pub fn assemble(parameters: &[Parameter]) -> Self {
        let mut directives = Self::default();
        for parameter in parameters {
            directives.env_bindings.extend(env_binding(parameter));
            directives.default_bindings.extend(default_binding(parameter));
            directives.cli_bindings.extend(cli_binding(parameter));
            directives.validator_tables.extend(validator_table(parameter));
            directives.setter_calls.push(setter_call(parameter));
            directives.enums.extend(enum_spec(parameter));
            directives.dump.push(dump_line(parameter));
            directives.cleanup.extend(cleanup(parameter));
        }
        directives
    }
}

/// Environment binding, present when `env_var` is set.
#[must_use]
pub fn env_binding(parameter: &Parameter) -> Option<EnvBinding> {
    (!parameter.env_var.is_empty()).then(|| EnvBinding {
        parameter: parameter.name.clone(),
        env_var: parameter.env_var.clone(),
    })
}

/// Default binding, present when a default is declared.
#[must_use]
pub fn default_binding(parameter: &Parameter) -> Option<DefaultBinding> {
    (!parameter.default.is_empty()).then(|| DefaultBinding {
        parameter: parameter.name.clone(),
        value: parameter.default.clone(),
    })
}

/// Command-line binding, present only when both long and short flags are set.
#[must_use]
pub fn cli_binding(parameter: &Parameter) -> Option<CliBinding> {
    if parameter.cli_long.is_empty() || parameter.cli_short.is_empty() {
        return None;
    }
    let kind = if parameter.scalar_type == ScalarType::Boolean {
        CliArgKind::Flag
    } else {
        CliArgKind::Value
    };
    Some(CliBinding {
        parameter: parameter.name.clone(),
        long: parameter.cli_long.clone(),
        short: parameter.cli_short.clone(),
        description: parameter.description.clone(),
        variable: parameter.flat_ref.clone(),
        kind,
    })
}

/// Validator table name for `parameter`.
#[must_use]
pub fn validator_name(parameter: &Parameter) -> String {
    format!("valid_{}", parameter.flat_ref)
}

/// Allow-list table, present for bounded types with a non-empty allow-list.
///
/// Integers and doubles are emitted bare; sizes keep their unit text and are
/// quoted like strings.
#[must_use]
pub fn validator_table(parameter: &Parameter) -> Option<ValidatorTable> {
    if !parameter.scalar_type.is_bounded() || parameter.allowed_values.is_empty() {
        return None;
    }
    let element = match parameter.scalar_type {
        ScalarType::Int => ValidatorElement::Integer,
        ScalarType::Double => ValidatorElement::Double,
        _ => ValidatorElement::String,
    };
    let literals = parameter
        .allowed_values
        .iter()
        .map(|value| match element {
            ValidatorElement::Integer | ValidatorElement::Double => value.clone(),
            ValidatorElement::String => format!("\"{}\"", escape_literal(value)),
        })
        .collect();
    Some(ValidatorTable {
        name: validator_name(parameter),
        element,
        literals,
    })
}

/// The setter call assigning the parameter's candidate value.
#[must_use]
pub fn setter_call(parameter: &Parameter) -> SetterCall {
    let (function, kind) = match parameter.scalar_type {
        ScalarType::Boolean => (format!("set_{}", parameter.scalar_type), SetterKind::Flag),
        ScalarType::Enum => (parse_function(parameter), SetterKind::Enum),
        bounded => (
            format!("set_{bounded}"),
            SetterKind::Bounded {
                min: parameter.min,
                max: parameter.max,
                allowed_count: parameter.allowed_values.len(),
                validator: (!parameter.allowed_values.is_empty())
                    .then(|| validator_name(parameter)),
            },
        ),
    };
    SetterCall {
        function,
        lookup_key: parameter.name.clone(),
        target: parameter.field_path().to_owned(),
        kind,
    }
}

/// The dump line for `parameter`.
#[must_use]
pub fn dump_line(parameter: &Parameter) -> DumpLine {
    let path = parameter.field_path().to_owned();
    let (specifier, access) = match parameter.scalar_type {
        ScalarType::Int | ScalarType::Size => (FormatSpecifier::Integer, ValueAccess::Field { path }),
        ScalarType::Double => (FormatSpecifier::Double, ValueAccess::Field { path }),
        ScalarType::String => (FormatSpecifier::String, ValueAccess::Field { path }),
        ScalarType::Boolean => (FormatSpecifier::Boolean, ValueAccess::Field { path }),
        ScalarType::Enum => (
            FormatSpecifier::String,
            ValueAccess::EnumName {
                function: name_function(parameter),
                path,
            },
        ),
    };
    DumpLine {
        label: parameter.name.clone(),
        specifier,
        access,
    }
}

/// The field to release before reuse, present for string parameters.
#[must_use]
pub fn cleanup(parameter: &Parameter) -> Option<String> {
    (parameter.scalar_type == ScalarType::String).then(|| parameter.field_path().to_owned())
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
