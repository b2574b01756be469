//! The build pipeline and its output model.

use serde::Serialize;

use crate::declaration::ParameterDecl;
use crate::definitions::{TypeDefinition, map_definitions};
use crate::directives::Directives;
use crate::error::BuildError;
use crate::parameter::Parameter;
use crate::serialization::{SerializationGroup, SerializationMember, map_serialization, root_members};
use crate::tree::PathTree;
use crate::validate::{check_flat_refs, check_generated_names, check_unique};

/// Root name of the definition tree; also the name of the top-level record.
pub const DEFINITION_ROOT: &str = "config";

/// Root name of the serialization tree. It never appears in the output.
pub const SERIALIZATION_ROOT: &str = "root";

/// Everything a renderer needs to emit configuration code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputModel {
    /// Resolved parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Record definitions; referenced records precede their referrers.
    pub definitions: Vec<TypeDefinition>,
    /// Serialized-object groups; ancestors precede descendants.
    pub serialization_groups: Vec<SerializationGroup>,
    /// Values stored directly in the top-level serialized object.
    pub root_members: Vec<SerializationMember>,
    /// Per-parameter directives.
    #[serde(flatten)]
    pub directives: Directives,
}

/// Builds the output model for `declarations`.
///
/// The steps run in a fixed order: uniqueness check, type resolution, the
/// flat-ref check, the name tree, the serialization tree, the mappers, then
/// the generated-name check. The first failure aborts the build. Parameters
/// without a serialization key are left out of the serialization tree.
///
/// # Errors
///
/// - [`BuildError::DuplicateIdentifier`] when a unique field, a flat ref, a
///   generated type name or a serialization group identifier repeats;
/// - [`BuildError::UnknownScalarType`] when a type is not recognised;
/// - [`BuildError::EmptyEnum`] when an enum declares no options;
/// - [`BuildError::StructuralPathConflict`] when a name or serialization key
///   is both a value and a prefix of another.
///
/// # Examples
///
/// ```
/// use paramgen::{ParameterDecl, build};
///
/// let port = ParameterDecl {
///     name: "server.port".to_owned(),
///     scalar_type: "int".to_owned(),
///     default: "8080".to_owned(),
///     ..ParameterDecl::default()
/// };
/// let model = build(&[port]).expect("valid declarations");
/// assert_eq!(model.definitions.len(), 2);
/// assert_eq!(model.directives.default_bindings.len(), 1);
/// ```
pub fn build(declarations: &[ParameterDecl]) -> Result<OutputModel, BuildError> {
    check_unique(declarations)?;
    let parameters = declarations
        .iter()
        .map(Parameter::resolve)
        .collect::<Result<Vec<_>, _>>()?;
    check_flat_refs(&parameters)?;

    let (definitions, serialization_groups, root_members) = {
        let definition_tree =
            PathTree::build(DEFINITION_ROOT, &parameters, |p| p.name.as_str())?;
        let mut serialization_tree = PathTree::new(SERIALIZATION_ROOT);
        for parameter in parameters.iter().filter(|p| !p.serialization_key.is_empty()) {
            serialization_tree.insert(&parameter.serialization_key, parameter)?;
        }
        (
            map_definitions(&definition_tree),
            map_serialization(&serialization_tree),
            root_members(&serialization_tree),
        )
    };
    let directives = Directives::assemble(&parameters);
    check_generated_names(&definitions, &directives.enums, &serialization_groups)?;

    Ok(OutputModel {
        parameters,
        definitions,
        serialization_groups,
        root_members,
        directives,
    })
}
