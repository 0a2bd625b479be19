//! Installed R package metadata.
//!
//! This module turns a package directory into a [`PackageRecord`] by reading
//! and pattern-matching its `DESCRIPTION` manifest.

mod manifest;
mod record;

pub use manifest::{
    Field, MANIFEST_FILE, ManifestFields, PLACEHOLDER, extract_field, parse_manifest, read_package,
};
pub use record::PackageRecord;
