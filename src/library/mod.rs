//! R library roots and the packages installed in them.
//!
//! Library roots come from a [`LibraryPathProvider`]: normally R itself
//! ([`RscriptLibraryPaths`]), or a fixed list given on the command line
//! ([`StaticLibraryPaths`]).

mod locator;
mod rscript;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::CatalogError;

pub use locator::{find_library_packages, is_package_dir_name};
pub use rscript::{DEFAULT_RSCRIPT, LIB_PATHS_EXPR, RscriptLibraryPaths, parse_library_paths};

/// Source of the ordered list of library root directories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryPathProvider: Send + Sync {
    async fn library_paths(&self) -> Result<Vec<PathBuf>, CatalogError>;
}

/// Library roots fixed up front, bypassing R.
#[derive(Debug, Clone, Default)]
pub struct StaticLibraryPaths {
    paths: Vec<PathBuf>,
}

impl StaticLibraryPaths {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl LibraryPathProvider for StaticLibraryPaths {
    async fn library_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        Ok(self.paths.clone())
    }
}
