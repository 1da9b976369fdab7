//! File helpers for linking documents on disk.

use std::{fs, path::Path};

use crate::Linker;

/// Read `path` and return its linked contents.
///
/// # Errors
/// Returns an error if the file cannot be read or is not UTF-8.
pub fn link_file(path: &Path, linker: &Linker) -> std::io::Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(linker.link(&text))
}

/// Rewrite a file in place with its matches linked.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, linker: &Linker) -> std::io::Result<()> {
    let linked = link_file(path, linker)?;
    fs::write(path, linked)
}
