//! Test helpers shared across crates in the `paramgen` workspace.
//!
//! - [`decl`] builds parameter declarations without spelling out every field.
//! - [`fixtures`] holds the sample declaration set used by several suites.
//! - [`text`] checks the relative order of fragments in rendered output.

pub mod decl;
pub mod fixtures;
pub mod text;
