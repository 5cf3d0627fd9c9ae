//! Error types for tree walking.
//!
//! `TreeError` stops a walk outright. `SubtreeError` describes a directory
//! that could not be expanded; the walk carries on with its siblings and
//! collects these in the returned summary.

use std::collections::TryReserveError;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The starting directory could not be opened. Holds the path exactly as
    /// the caller supplied it, before trailing separators were trimmed.
    #[error("Failed to open dir: {}", path.display())]
    OpenRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("out of memory while building path: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum SubtreeError {
    #[error("cannot open directory '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read directory '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("directory cycle at '{}'", path.display())]
    Cycle { path: PathBuf },
}

impl SubtreeError {
    /// Path of the directory that was not expanded.
    pub fn path(&self) -> &Path {
        match self {
            SubtreeError::Open { path, .. }
            | SubtreeError::Read { path, .. }
            | SubtreeError::Cycle { path } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_root_message_uses_original_path() {
        let err = TreeError::OpenRoot {
            path: PathBuf::from("missing///"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "Failed to open dir: missing///");
    }

    #[test]
    fn test_subtree_error_path() {
        let err = SubtreeError::Cycle {
            path: PathBuf::from("a/b"),
        };
        assert_eq!(err.path(), Path::new("a/b"));
        assert!(err.to_string().contains("a/b"));
    }
}
