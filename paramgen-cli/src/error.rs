//! Error types for `paramgen-cli`.

use camino::Utf8PathBuf;
use paramgen::BuildError;
use thiserror::Error;

/// Errors surfaced by the `paramgen` command.
#[derive(Debug, Error)]
pub enum ParamgenError {
    /// The declarations do not form a valid model.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The declaration file is not a valid YAML parameter document.
    #[error("failed to parse declarations in {path}: {source}")]
    Yaml {
        /// Declaration file being parsed.
        path: Utf8PathBuf,
        /// Parser failure.
        #[source]
        source: serde_saphyr::Error,
    },

    /// The model could not be serialized.
    #[error("failed to serialize model JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Layered settings could not be merged or extracted.
    #[error("invalid settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// An explicitly requested settings file does not exist.
    #[error("settings file not found at {0}")]
    MissingSettings(Utf8PathBuf),

    /// A filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path the operation targeted.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing to standard output failed.
    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),
}

impl ParamgenError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
