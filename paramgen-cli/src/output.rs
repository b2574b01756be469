//! Output writers for `paramgen`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};

use crate::error::ParamgenError;

/// Writes `contents` to `out_dir/file_name`, replacing any existing file.
///
/// The output directory is created when missing.
///
/// # Errors
///
/// Returns [`ParamgenError::Io`] if the directory or file cannot be written.
pub fn write_artifact(
    out_dir: &Utf8Path,
    file_name: &str,
    contents: &str,
) -> Result<Utf8PathBuf, ParamgenError> {
    let dir = ensure_dir(out_dir)?;
    let path = out_dir.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| ParamgenError::io(&path, io_err))?;
    file.write_all(contents.as_bytes())
        .map_err(|io_err| ParamgenError::io(&path, io_err))?;
    Ok(path)
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, ParamgenError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority())
                .map_err(|io_err| ParamgenError::io(path, io_err))?;
            Dir::open_ambient_dir(path, ambient_authority())
                .map_err(|io_err| ParamgenError::io(path, io_err))
        }
        Err(open_err) => Err(ParamgenError::io(path, open_err)),
    }
}
