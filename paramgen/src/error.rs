//! Error type for the model build pipeline.

use thiserror::Error;

/// Failures that abort a model build.
///
/// Every variant is fatal: [`crate::build`] never returns a partially
/// populated model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A uniqueness-checked field repeats a non-empty value.
    #[error("{field} has duplicate: {value}")]
    DuplicateIdentifier {
        /// Declaration key of the offending field (for example, `arg-short`).
        field: &'static str,
        /// The repeated value.
        value: String,
    },

    /// A declared path is both a leaf and a prefix of another declared path.
    #[error("path '{path}' is declared as a value and as a group of values")]
    StructuralPathConflict {
        /// The path that cannot be both a leaf and a branch.
        path: String,
    },

    /// A declaration names a scalar type outside the recognised set.
    #[error("parameter '{parameter}' has unknown type '{scalar_type}'")]
    UnknownScalarType {
        /// Dotted name of the declaring parameter.
        parameter: String,
        /// The unrecognised type text.
        scalar_type: String,
    },

    /// An enum parameter declares no options, so its type has no constants.
    #[error("enum parameter '{parameter}' declares no options")]
    EmptyEnum {
        /// Dotted name of the declaring parameter.
        parameter: String,
    },
}

impl BuildError {
    pub(crate) fn path_conflict(path: impl Into<String>) -> Self {
        Self::StructuralPathConflict { path: path.into() }
    }
}
