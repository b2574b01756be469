//! Command-line interface definitions for `paramgen`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Artefacts `paramgen` can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C header declaring the configuration records and entry points.
    Header,
    /// C source implementing the parser declared by the header.
    Source,
    /// Markdown table documenting every parameter.
    Markdown,
    /// JSON dump of the full generation model.
    Model,
}

impl OutputFormat {
    /// Every format, in generation order.
    pub const ALL: [Self; 4] = [Self::Header, Self::Source, Self::Markdown, Self::Model];

    /// Returns the CLI-friendly string for this output format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Source => "source",
            Self::Markdown => "markdown",
            Self::Model => "model",
        }
    }
}

/// Parsed CLI arguments for `paramgen`.
///
/// Every setting is optional here; unset values fall through to the settings
/// file, the environment and finally the built-in defaults.
#[derive(Debug, Default, Parser)]
#[command(name = "paramgen")]
#[command(about = "Generate configuration records and parsing glue from parameter declarations")]
#[command(version)]
pub struct Args {
    /// Declaration file to read.
    #[arg(long, value_name = "path")]
    pub input: Option<Utf8PathBuf>,
    /// Output directory for generated artefacts.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Artefact to generate (repeat for several).
    #[arg(long = "format", value_enum, value_name = "format")]
    pub formats: Vec<OutputFormat>,
    /// TOML settings file (defaults to `paramgen.toml` when present).
    #[arg(long, value_name = "path")]
    pub settings: Option<Utf8PathBuf>,
    /// File name of the generated header.
    #[arg(long, value_name = "name")]
    pub header_name: Option<String>,
    /// Include guard macro of the generated header.
    #[arg(long, value_name = "macro")]
    pub guard: Option<String>,
    /// File name of the generated C source.
    #[arg(long, value_name = "name")]
    pub source_name: Option<String>,
    /// JSON configuration file the generated parser reads.
    #[arg(long, value_name = "path")]
    pub json_file: Option<String>,
    /// Log pipeline stages at debug level.
    #[arg(short, long = "verbose")]
    pub is_verbose: bool,
    /// Also write the parameter table to standard output.
    #[arg(long = "print-table")]
    pub should_print_table: bool,
}
