use std::path::PathBuf;

use crate::{
    catalog::FailurePolicy,
    library::{DEFAULT_RSCRIPT, LibraryPathProvider, RscriptLibraryPaths, StaticLibraryPaths},
    runtime::Runtime,
};

/// Settings shared by every command.
pub struct Config<R: Runtime> {
    pub runtime: R,
    /// R front end asked for `.libPaths()`
    pub rscript: String,
    /// Library roots given explicitly; when non-empty R is not consulted
    pub libraries: Vec<PathBuf>,
    pub policy: FailurePolicy,
}

impl<R: Runtime> Config<R> {
    pub fn new(
        runtime: R,
        rscript: Option<String>,
        libraries: Vec<PathBuf>,
        keep_going: bool,
    ) -> Self {
        Self {
            runtime,
            rscript: rscript.unwrap_or_else(|| DEFAULT_RSCRIPT.to_string()),
            libraries,
            policy: if keep_going {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
        }
    }

    pub fn library_provider(&self) -> Box<dyn LibraryPathProvider + '_> {
        if self.libraries.is_empty() {
            Box::new(RscriptLibraryPaths::new(&self.runtime, self.rscript.clone()))
        } else {
            Box::new(StaticLibraryPaths::new(self.libraries.clone()))
        }
    }
}
