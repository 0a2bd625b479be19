use log::debug;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::PackageRecord;
use crate::error::CatalogError;
use crate::runtime::Runtime;

/// File name of the manifest inside every package directory.
pub const MANIFEST_FILE: &str = "DESCRIPTION";

/// Value used for any field the manifest does not provide.
pub const PLACEHOLDER: &str = "null";

// Multi-line so `^`/`$` anchor on lines, CRLF-aware so Windows manifests match.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^Package:\s+([a-zA-Z0-9.]+)\s*$").expect("valid Package pattern")
});
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^Version:\s+([0-9]+\.[0-9]+\.[0-9]+(?:\.[0-9]+)?)\s*$")
        .expect("valid Version pattern")
});
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^Title:\s+(.*?)\s*$").expect("valid Title pattern"));

/// Manifest fields the catalog cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
    Title,
}

impl Field {
    fn pattern(self) -> &'static Regex {
        match self {
            Field::Name => &*NAME_RE,
            Field::Version => &*VERSION_RE,
            Field::Title => &*TITLE_RE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFields {
    pub name: String,
    pub version: String,
    pub title: String,
}

/// Value of the first line matching `field`, or [`PLACEHOLDER`].
pub fn extract_field(text: &str, field: Field) -> String {
    field
        .pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Extract name, version and title independently from the manifest text.
pub fn parse_manifest(text: &str) -> ManifestFields {
    ManifestFields {
        name: extract_field(text, Field::Name),
        version: extract_field(text, Field::Version),
        title: extract_field(text, Field::Title),
    }
}

/// Read `<package_dir>/DESCRIPTION` and build the package's record.
#[tracing::instrument(skip(runtime))]
pub fn read_package<R: Runtime>(runtime: &R, package_dir: &Path) -> Result<PackageRecord, CatalogError> {
    let manifest_path = package_dir.join(MANIFEST_FILE);
    let text = runtime
        .read_to_string(&manifest_path)
        .map_err(|e| CatalogError::file(&manifest_path, e))?;

    let fields = parse_manifest(&text);
    debug!("Parsed {:?} from {:?}", fields, manifest_path);

    Ok(PackageRecord {
        name: fields.name,
        path: package_dir.to_path_buf(),
        version: fields.version,
        title: fields.title,
        description: None,
    })
}
