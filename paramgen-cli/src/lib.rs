//! Library interface for the `paramgen` command.
//!
//! Loads parameter declarations, builds the generation model with
//! [`paramgen::build`], renders the requested artefacts and writes them to
//! the output directory.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod render;
pub mod settings;

use std::io::Write;

use camino::Utf8PathBuf;
use paramgen::OutputModel;
use tracing::{debug, info};

use crate::cli::Args;
use crate::error::ParamgenError;
use crate::settings::Settings;

/// Runs one generation pass for `args` and returns the written paths.
///
/// # Errors
///
/// Returns the first settings, input, build, render or output failure. No
/// artefact is written when the model fails to build.
pub fn run(args: &Args) -> Result<Vec<Utf8PathBuf>, ParamgenError> {
    let settings = settings::load_settings(args)?;
    debug!(?settings, "settings resolved");
    let model = load_model(&settings)?;
    let written = write_artefacts(&settings, &model)?;
    if args.should_print_table {
        print_table(&model, &mut std::io::stdout().lock())?;
    }
    Ok(written)
}

/// Loads the declaration file named in `settings` and builds its model.
///
/// # Errors
///
/// Returns [`ParamgenError::Io`] or [`ParamgenError::Yaml`] when the file
/// cannot be loaded and [`ParamgenError::Build`] when the declarations are
/// invalid.
pub fn load_model(settings: &Settings) -> Result<OutputModel, ParamgenError> {
    let declarations = input::load_declarations(&settings.input)?;
    debug!(
        input = %settings.input,
        count = declarations.len(),
        "declarations loaded"
    );
    let model = paramgen::build(&declarations)?;
    debug!(
        definitions = model.definitions.len(),
        groups = model.serialization_groups.len(),
        enums = model.directives.enums.len(),
        "model built"
    );
    Ok(model)
}

/// Renders every format in `settings` and writes it to the output directory.
///
/// # Errors
///
/// Returns the first render or output failure.
pub fn write_artefacts(
    settings: &Settings,
    model: &OutputModel,
) -> Result<Vec<Utf8PathBuf>, ParamgenError> {
    let mut written = Vec::with_capacity(settings.formats.len());
    for &format in &settings.formats {
        let artefact = render::render(format, model, settings)?;
        let path =
            output::write_artifact(&settings.out_dir, &artefact.file_name, &artefact.contents)?;
        info!(format = format.as_str(), %path, "wrote artefact");
        written.push(path);
    }
    Ok(written)
}

/// Writes the Markdown parameter table for `model` to `out`.
///
/// # Errors
///
/// Returns [`ParamgenError::Stdout`] when `out` rejects the write.
pub fn print_table(model: &OutputModel, out: &mut impl Write) -> Result<(), ParamgenError> {
    let table = render::markdown::render_table(model);
    out.write_all(table.as_bytes())
        .and_then(|()| out.flush())
        .map_err(ParamgenError::Stdout)
}
