//! JSON dump of the generation model.

use paramgen::OutputModel;

use crate::error::ParamgenError;

/// Serializes `model` as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`ParamgenError::Json`] if serialization fails.
pub fn render_model(model: &OutputModel) -> Result<String, ParamgenError> {
    let mut json = serde_json::to_string_pretty(model)?;
    json.push('\n');
    Ok(json)
}
