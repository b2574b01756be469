//! Text renderers for generated artefacts.
//!
//! Renderers are pure: each maps an [`OutputModel`] to the full text of one
//! file. Writing is left to [`crate::output`].

pub mod header;
pub mod markdown;
pub mod model;
pub mod source;

use paramgen::OutputModel;

use crate::cli::OutputFormat;
use crate::error::ParamgenError;
use crate::settings::Settings;

/// File name of the Markdown parameter table.
pub const MARKDOWN_FILE: &str = "PARAMETERS.md";

/// File name of the model JSON dump.
pub const MODEL_FILE: &str = "model.json";

/// Rendered contents of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artefact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Full file contents.
    pub contents: String,
}

/// Renders `format` for `model` using the names configured in `settings`.
///
/// # Errors
///
/// Returns [`ParamgenError::Json`] when the model cannot be serialized.
pub fn render(
    format: OutputFormat,
    model: &OutputModel,
    settings: &Settings,
) -> Result<Artefact, ParamgenError> {
    let (file_name, contents) = match format {
        OutputFormat::Header => (
            settings.header_name.clone(),
            header::render_header(model, &settings.guard),
        ),
        OutputFormat::Source => (
            settings.source_name.clone(),
            source::render_source(
                model,
                source::SourceNames {
                    header: &settings.header_name,
                    json_file: &settings.json_file,
                },
            ),
        ),
        OutputFormat::Markdown => (MARKDOWN_FILE.to_owned(), markdown::render_table(model)),
        OutputFormat::Model => (MODEL_FILE.to_owned(), model::render_model(model)?),
    };
    Ok(Artefact {
        file_name,
        contents,
    })
}
