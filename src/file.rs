// src/file.rs

use std::{
    fs,
    path::{ Path, PathBuf },
};

use crate::error::Error;

/// Read the whole input table.
pub fn read_input(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Input { path: path.to_path_buf(), source })
}

/// Write `contents` to `path`, creating parent directories. Returns the path written.
pub fn write_output(path: &Path, contents: &str) -> Result<PathBuf, Error> {
    let out_err = |source: std::io::Error| Error::Output { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(out_err)?;
        }
    }
    fs::write(path, contents).map_err(out_err)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
