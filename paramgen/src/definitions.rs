//! Nested record definitions derived from the name tree.

use serde::Serialize;

use crate::parameter::{Parameter, ScalarType};
use crate::tree::{PathNode, PathTree};

/// One nested record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDefinition {
    /// Unique type name: the root's name for the root record, otherwise the
    /// root's name joined with the branch path by `_`.
    pub name: String,
    /// Members in declaration order.
    pub fields: Vec<Field>,
}

/// One member of a [`TypeDefinition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Member name (the path segment).
    pub name: String,
    /// Declared description; empty for nested records.
    pub description: String,
    /// Member type.
    #[serde(rename = "type")]
    pub ty: FieldType,
}

/// Type of a record member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldType {
    /// A plain scalar value.
    Scalar {
        /// The scalar kind (never [`ScalarType::Enum`]).
        scalar_type: ScalarType,
    },
    /// A value of a generated enum type.
    Enum {
        /// Name of the enum type, matching [`crate::EnumSpec::type_name`].
        type_name: String,
    },
    /// A nested record defined earlier in the definition list.
    Record {
        /// Name of the referenced [`TypeDefinition`].
        type_name: String,
    },
}

impl FieldType {
    /// Maps a parameter's scalar type to its member type.
    #[must_use]
    pub fn for_parameter(parameter: &Parameter) -> Self {
        match parameter.scalar_type {
            ScalarType::Enum => Self::Enum {
                type_name: enum_type_name(parameter),
            },
            scalar_type => Self::Scalar { scalar_type },
        }
    }

    /// Name of the referenced record, if this member is one.
    #[must_use]
    pub fn record_name(&self) -> Option<&str> {
        match self {
            Self::Record { type_name } => Some(type_name.as_str()),
            Self::Scalar { .. } | Self::Enum { .. } => None,
        }
    }
}

/// Derives the generated enum type name for an enum parameter.
#[must_use]
pub fn enum_type_name(parameter: &Parameter) -> String {
    format!("config_{}", parameter.flat_ref)
}

/// Walks the name tree and returns its record definitions.
///
/// Definitions come out depth-first with children before parents, so every
/// record referenced by a member appears earlier in the list than the record
/// that references it. The root record is always last. A tree without
/// parameters yields a single empty root record.
#[must_use]
pub fn map_definitions(tree: &PathTree<'_>) -> Vec<TypeDefinition> {
    let root = tree.root();
    map_node(root, root.name())
}

fn map_node(node: &PathNode<'_>, type_name: &str) -> Vec<TypeDefinition> {
    let mut definitions = Vec::new();
    let mut fields = Vec::with_capacity(node.children().len());
    for child in node.children() {
        let field = if let Some(parameter) = child.parameter() {
            Field {
                name: child.name().to_owned(),
                description: parameter.description.clone(),
                ty: FieldType::for_parameter(parameter),
            }
        } else {
            let child_type = format!("{type_name}_{}", child.name());
            definitions.extend(map_node(child, &child_type));
            Field {
                name: child.name().to_owned(),
                description: String::new(),
                ty: FieldType::Record {
                    type_name: child_type,
                },
            }
        };
        fields.push(field);
    }
    definitions.push(TypeDefinition {
        name: type_name.to_owned(),
        fields,
    });
    definitions
}
