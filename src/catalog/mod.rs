//! Catalog of installed packages.
//!
//! A build resolves the library roots, lists the package directories in each,
//! reads every manifest and sorts the result by name. Every build starts from
//! scratch; nothing is carried over from a previous one.

mod view;

use log::{debug, info, warn};

use crate::error::CatalogError;
use crate::library::{LibraryPathProvider, find_library_packages};
use crate::package::{PackageRecord, read_package};
use crate::runtime::Runtime;

pub use view::{CatalogItem, CatalogView};

/// What to do when a library directory or a manifest cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Fail the whole build on the first error.
    #[default]
    Abort,
    /// Log the failure, remember it in [`Catalog::skipped`] and keep going.
    Skip,
}

/// Result of one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Packages sorted case-insensitively by name. Duplicates across libraries are kept.
    pub packages: Vec<PackageRecord>,
    /// Failures passed over under [`FailurePolicy::Skip`]
    pub skipped: Vec<CatalogError>,
}

pub struct CatalogBuilder<'a, R: Runtime> {
    runtime: &'a R,
    libraries: &'a dyn LibraryPathProvider,
}

impl<'a, R: Runtime> CatalogBuilder<'a, R> {
    pub fn new(runtime: &'a R, libraries: &'a dyn LibraryPathProvider) -> Self {
        Self { runtime, libraries }
    }

    /// Scan every library and return the sorted catalog.
    ///
    /// Library resolution failures always abort. Directory and manifest
    /// failures abort or are skipped according to `policy`.
    #[tracing::instrument(skip(self))]
    pub async fn build(&self, policy: FailurePolicy) -> Result<Catalog, CatalogError> {
        let libraries = self.libraries.library_paths().await?;
        let mut skipped = Vec::new();

        let mut package_dirs = Vec::new();
        for lib in &libraries {
            match find_library_packages(self.runtime, lib) {
                Ok(dirs) => package_dirs.extend(dirs),
                Err(e) => handle_failure(policy, e, &mut skipped)?,
            }
        }
        debug!(
            "Found {} package dir(s) in {} librar(ies)",
            package_dirs.len(),
            libraries.len()
        );

        let mut packages = Vec::with_capacity(package_dirs.len());
        for dir in &package_dirs {
            match read_package(self.runtime, dir) {
                Ok(record) => packages.push(record),
                Err(e) => handle_failure(policy, e, &mut skipped)?,
            }
        }

        sort_packages(&mut packages);
        info!(
            "Catalog built: {} package(s), {} skipped",
            packages.len(),
            skipped.len()
        );

        Ok(Catalog { packages, skipped })
    }
}

fn handle_failure(
    policy: FailurePolicy,
    err: CatalogError,
    skipped: &mut Vec<CatalogError>,
) -> Result<(), CatalogError> {
    match policy {
        FailurePolicy::Abort => Err(err),
        FailurePolicy::Skip => {
            warn!("Skipping: {}", err);
            skipped.push(err);
            Ok(())
        }
    }
}

/// Stable sort by lowercased name; equal names keep their scan order.
pub fn sort_packages(packages: &mut [PackageRecord]) {
    packages.sort_by_cached_key(|p| p.name.to_lowercase());
}
