//! Builder for [`ParameterDecl`] values.
//!
//! # Examples
//!
//! ```
//! use paramgen_test_helpers::decl::decl;
//!
//! let port = decl("server.port", "int").bounds(1, 65535).default_value("8080").build();
//! assert_eq!(port.serialization_key, "server.port");
//! ```

use paramgen::ParameterDecl;

/// Starts a declaration named `name` of type `scalar_type`.
///
/// The serialization key defaults to the name.
pub fn decl(name: &str, scalar_type: &str) -> DeclBuilder {
    DeclBuilder {
        inner: ParameterDecl {
            name: name.to_owned(),
            serialization_key: name.to_owned(),
            scalar_type: scalar_type.to_owned(),
            ..ParameterDecl::default()
        },
    }
}

/// Fluent builder returned by [`decl`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DeclBuilder {
    inner: ParameterDecl,
}

impl DeclBuilder {
    /// Sets the description.
    pub fn description(mut self, text: &str) -> Self {
        text.clone_into(&mut self.inner.description);
        self
    }

    /// Sets the literal default.
    pub fn default_value(mut self, value: &str) -> Self {
        value.clone_into(&mut self.inner.default);
        self
    }

    /// Overrides the serialization key; pass `""` to leave it unset.
    pub fn json(mut self, key: &str) -> Self {
        key.clone_into(&mut self.inner.serialization_key);
        self
    }

    /// Sets the environment variable.
    pub fn env(mut self, var: &str) -> Self {
        var.clone_into(&mut self.inner.env_var);
        self
    }

    /// Sets the long and short command-line flags.
    pub fn cli(mut self, long: &str, short: &str) -> Self {
        long.clone_into(&mut self.inner.cli_long);
        short.clone_into(&mut self.inner.cli_short);
        self
    }

    /// Sets the lower and upper bounds.
    pub const fn bounds(mut self, min: i64, max: i64) -> Self {
        self.inner.min = min;
        self.inner.max = max;
        self
    }

    /// Sets the enum variants or allow-list.
    pub fn options(mut self, values: &[&str]) -> Self {
        self.inner.allowed_values = values.iter().map(|value| (*value).to_owned()).collect();
        self
    }

    /// Finishes the declaration.
    #[must_use]
    pub fn build(self) -> ParameterDecl {
        self.inner
    }
}
