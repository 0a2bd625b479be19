use log::debug;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::runtime::Runtime;

/// Package directories start with a letter; this skips `.renv`, `_cache`,
/// `00LOCK-*` and similar non-package entries.
pub fn is_package_dir_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

/// List the package directories directly under `lib`, in directory-listing order.
///
/// Returned paths are absolute; a relative `lib` is resolved against the
/// current directory.
#[tracing::instrument(skip(runtime))]
pub fn find_library_packages<R: Runtime>(runtime: &R, lib: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let lib = if lib.is_absolute() {
        lib.to_path_buf()
    } else {
        runtime
            .current_dir()
            .map_err(|e| CatalogError::directory(lib, e))?
            .join(lib)
    };

    let entries = runtime
        .read_dir(&lib)
        .map_err(|e| CatalogError::directory(&lib, e))?;

    let mut packages = Vec::new();
    for entry in entries {
        let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
            debug!("Skipping non UTF-8 entry {:?}", entry);
            continue;
        };
        if !is_package_dir_name(name) {
            debug!("Skipping {:?}", entry);
            continue;
        }
        if runtime.is_dir(&entry) {
            packages.push(lib.join(name));
        }
    }

    debug!("Found {} package(s) in {:?}", packages.len(), lib);
    Ok(packages)
}
