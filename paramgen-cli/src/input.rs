//! Reading declaration files.

use std::io::Read;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use paramgen::{ParameterDecl, ParameterSet};
use serde_saphyr::Options;

use crate::error::ParamgenError;

/// Reads and parses the declaration file at `path`.
///
/// # Errors
///
/// Returns [`ParamgenError::Io`] when the file cannot be read and
/// [`ParamgenError::Yaml`] when it is not a parameter document.
pub fn load_declarations(path: &Utf8Path) -> Result<Vec<ParameterDecl>, ParamgenError> {
    let contents = read_file(path)?;
    parse_declarations(path, &contents)
}

/// Parses a YAML parameter document; `path` is only used in errors.
///
/// Booleans are strict, so a YAML 1.1 spelling such as `yes` or `on` stays
/// text.
///
/// # Errors
///
/// Returns [`ParamgenError::Yaml`] when `contents` is not a parameter
/// document.
pub fn parse_declarations(
    path: &Utf8Path,
    contents: &str,
) -> Result<Vec<ParameterDecl>, ParamgenError> {
    let set: ParameterSet = serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|source| ParamgenError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(set.parameters)
}

fn read_file(path: &Utf8Path) -> Result<String, ParamgenError> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        ParamgenError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| ParamgenError::io(parent, err))?;
    let mut file = dir
        .open(file_name)
        .map_err(|err| ParamgenError::io(path, err))?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)
        .map_err(|err| ParamgenError::io(path, err))?;
    Ok(buffer)
}
