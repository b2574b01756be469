//! Layered settings for a `paramgen` run.
//!
//! Values are merged in increasing precedence: built-in defaults, the TOML
//! settings file, `PARAMGEN_` environment variables, then command-line flags.

use camino::Utf8PathBuf;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::{Args, OutputFormat};
use crate::error::ParamgenError;

/// Settings file read when `--settings` is not given, if it exists.
pub const DEFAULT_SETTINGS_FILE: &str = "paramgen.toml";

/// Prefix of environment variables consulted for settings.
pub const ENV_PREFIX: &str = "PARAMGEN_";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Declaration file to read.
    pub input: Utf8PathBuf,
    /// Directory receiving generated artefacts.
    pub out_dir: Utf8PathBuf,
    /// Artefacts to generate.
    pub formats: Vec<OutputFormat>,
    /// File name of the generated header.
    pub header_name: String,
    /// Include guard macro of the generated header.
    pub guard: String,
    /// File name of the generated C source.
    pub source_name: String,
    /// JSON configuration file the generated parser reads at run time.
    pub json_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: Utf8PathBuf::from("config-meta.yml"),
            out_dir: Utf8PathBuf::from("."),
            formats: OutputFormat::ALL.to_vec(),
            header_name: "config.h".to_owned(),
            guard: "_CONFIG_H_".to_owned(),
            source_name: "config.c".to_owned(),
            json_file: "./config.json".to_owned(),
        }
    }
}

/// Values supplied on the command line; unset values are not serialized and
/// so never shadow lower layers.
#[derive(Debug, Serialize)]
struct Overrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<&'a Utf8PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formats: Option<&'a [OutputFormat]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    guard: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_file: Option<&'a str>,
}

impl<'a> From<&'a Args> for Overrides<'a> {
    fn from(args: &'a Args) -> Self {
        Self {
            input: args.input.as_ref(),
            out_dir: args.out_dir.as_ref(),
            formats: (!args.formats.is_empty()).then_some(args.formats.as_slice()),
            header_name: args.header_name.as_deref(),
            guard: args.guard.as_deref(),
            source_name: args.source_name.as_deref(),
            json_file: args.json_file.as_deref(),
        }
    }
}

/// Loads settings for `args`.
///
/// # Errors
///
/// Returns [`ParamgenError::MissingSettings`] when `--settings` names a file
/// that does not exist, and [`ParamgenError::Settings`] when a layer holds a
/// value of the wrong shape.
pub fn load_settings(args: &Args) -> Result<Settings, ParamgenError> {
    let file = match &args.settings {
        Some(path) if !path.is_file() => return Err(ParamgenError::MissingSettings(path.clone())),
        Some(path) => Toml::file(path),
        None => Toml::file(DEFAULT_SETTINGS_FILE),
    };
    Figment::from(Serialized::defaults(Settings::default()))
        .merge(file)
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]))
        .merge(Serialized::defaults(Overrides::from(args)))
        .extract()
        .map_err(|err| ParamgenError::Settings(Box::new(err)))
}
