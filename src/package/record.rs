use serde::Serialize;
use std::path::PathBuf;

/// One installed package, as found during a single catalog build.
///
/// `version` and `title` are always populated; fields missing from the
/// manifest hold [`super::PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageRecord {
    /// Package name from the `Package:` field
    pub name: String,
    /// Absolute path of the package directory
    pub path: PathBuf,
    pub version: String,
    pub title: String,
    /// Reserved; manifest extraction does not fill it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PackageRecord {
    pub fn label(&self) -> &str {
        &self.name
    }

    /// `"<name> [<version>]"`
    pub fn tooltip(&self) -> String {
        format!("{} [{}]", self.name, self.version)
    }

    /// Tooltip followed by the title on its own line.
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.tooltip(), self.title)
    }
}
