//! Core model builder for `paramgen`.
//!
//! Turns a flat, ordered list of configuration-parameter declarations into
//! an [`OutputModel`]:
//!
//! - nested record definitions following the dotted parameter names, ordered
//!   so that each record is defined before it is used;
//! - serialization groups following the separate serialization keys;
//! - per-parameter directives (bindings, validator tables, setter calls, enum
//!   tables, dump lines and cleanup entries).
//!
//! The crate performs no I/O. Reading declaration files and rendering target
//! text belong to `paramgen-cli`.

pub mod declaration;
pub mod definitions;
pub mod directives;
pub mod error;
pub mod model;
pub mod parameter;
pub mod serialization;
pub mod tree;
pub mod validate;

pub use declaration::{ParameterDecl, ParameterSet};
pub use definitions::{Field, FieldType, TypeDefinition};
pub use directives::{Directives, EnumConstant, EnumSpec};
pub use error::BuildError;
pub use model::{DEFINITION_ROOT, OutputModel, SERIALIZATION_ROOT, build};
pub use parameter::{Parameter, ScalarType};
pub use serialization::{SerializationGroup, SerializationMember};
pub use tree::{PathNode, PathTree};
