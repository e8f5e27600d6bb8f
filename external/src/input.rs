//! Loading puzzle input text from disk.

use crate::error::InputError;
use log::{debug, error};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tinsel_core::Puzzle;

/// Where a puzzle's input text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A single explicit file.
    File(PathBuf),
    /// A directory holding `day<N>.txt` files.
    Directory(PathBuf),
}

impl InputSource {
    pub fn path_for(&self, puzzle: Puzzle) -> PathBuf {
        match self {
            InputSource::File(path) => path.clone(),
            InputSource::Directory(dir) => dir.join(puzzle.default_input_file()),
        }
    }
}

/// Read the whole file at `path`.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<String, InputError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::FileNotFound(path.to_path_buf()),
        _ => InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read the whole file at `path`, or an empty string if it cannot be read.
///
/// Failure is not fatal: it is logged and the caller carries on with no input.
pub fn read_all_text<P: AsRef<Path>>(path: P) -> String {
    match load_input(&path) {
        Ok(text) => {
            debug!("read {} bytes from {}", text.len(), path.as_ref().display());
            text
        }
        Err(e) => {
            error!("{}. Continuing with empty input", e);
            String::new()
        }
    }
}
