//! Uniqueness checks over identifier-bearing declaration fields.

use std::collections::HashSet;

use crate::declaration::ParameterDecl;
use crate::definitions::TypeDefinition;
use crate::directives::EnumSpec;
use crate::error::BuildError;
use crate::parameter::Parameter;
use crate::serialization::SerializationGroup;

type Accessor = fn(&ParameterDecl) -> &str;

/// Fields that must be globally unique, labelled with their declaration keys.
///
/// Each field is checked on its own: the same text may appear once as
/// `arg-short` and once as `env`.
pub const UNIQUE_FIELDS: [(&str, Accessor); 5] = [
    ("name", |decl| &decl.name),
    ("json", |decl| &decl.serialization_key),
    ("env", |decl| &decl.env_var),
    ("arg-long", |decl| &decl.cli_long),
    ("arg-short", |decl| &decl.cli_short),
];

/// Checks [`UNIQUE_FIELDS`] for repeated non-empty values.
///
/// Declarations are scanned in order, so the reported duplicate is the first
/// repeat a reader of the declaration file would find.
///
/// # Errors
///
/// Returns [`BuildError::DuplicateIdentifier`] naming the field and value.
pub fn check_unique(parameters: &[ParameterDecl]) -> Result<(), BuildError> {
    let mut seen: HashSet<(&'static str, &str)> = HashSet::new();
    for decl in parameters {
        for (field, accessor) in UNIQUE_FIELDS {
            let value = accessor(decl);
            if value.is_empty() {
                continue;
            }
            if !seen.insert((field, value)) {
                return Err(BuildError::DuplicateIdentifier {
                    field,
                    value: value.to_owned(),
                });
            }
        }
    }
    Ok(())
}

/// Checks that no two parameters share a flat ref.
///
/// Distinct names can still flatten alike (`a_b` and `a.b`), and every
/// per-parameter symbol (validator table, enum type, enum parser) is derived
/// from the flat ref.
///
/// # Errors
///
/// Returns [`BuildError::DuplicateIdentifier`] labelled `flat-ref`.
pub fn check_flat_refs(parameters: &[Parameter]) -> Result<(), BuildError> {
    first_repeat("flat-ref", parameters.iter().map(|p| p.flat_ref.as_str()))
}

/// Checks generated names that share a target namespace.
///
/// Record and enum type names share one tag namespace; serialization group
/// identifiers name the per-object locals of the reader.
///
/// # Errors
///
/// Returns [`BuildError::DuplicateIdentifier`] labelled `type` for a repeated
/// record or enum type name and `json-group` for a repeated group identifier.
pub fn check_generated_names(
    definitions: &[TypeDefinition],
    enums: &[EnumSpec],
    groups: &[SerializationGroup],
) -> Result<(), BuildError> {
    first_repeat(
        "type",
        definitions
            .iter()
            .map(|d| d.name.as_str())
            .chain(enums.iter().map(|e| e.type_name.as_str())),
    )?;
    first_repeat("json-group", groups.iter().map(|g| g.param.as_str()))
}

fn first_repeat<'a>(
    field: &'static str,
    values: impl IntoIterator<Item = &'a str>,
) -> Result<(), BuildError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(BuildError::DuplicateIdentifier {
                field,
                value: value.to_owned(),
            });
        }
    }
    Ok(())
}
