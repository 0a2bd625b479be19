//! Failures that can abort a catalog build.
//!
//! A manifest field that cannot be found is not an error: the parser
//! substitutes [`crate::package::PLACEHOLDER`] instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The R front end could not be started, exited non-zero, or printed non-UTF-8 output.
    #[error("Failed to query library paths with {program}: {reason}")]
    ProcessInvocation { program: String, reason: String },

    /// A library directory is missing or unreadable.
    #[error("Failed to read library directory {}: {reason}", .path.display())]
    DirectoryRead { path: PathBuf, reason: String },

    /// A package manifest is missing or unreadable.
    #[error("Failed to read package manifest {}: {reason}", .path.display())]
    FileRead { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn process(program: impl Into<String>, reason: impl ToString) -> Self {
        Self::ProcessInvocation {
            program: program.into(),
            reason: reason.to_string(),
        }
    }

    /// Wrap a runtime failure, keeping its whole context chain in the reason.
    pub fn directory(path: impl Into<PathBuf>, err: anyhow::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            reason: format!("{:#}", err),
        }
    }

    pub fn file(path: impl Into<PathBuf>, err: anyhow::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            reason: format!("{:#}", err),
        }
    }
}
