use anyhow::Result;
use log::debug;

use crate::{catalog::CatalogBuilder, package::PackageRecord, runtime::Runtime};

use super::config::Config;

/// List all installed packages
#[tracing::instrument(skip(config))]
pub async fn list<R: Runtime>(config: Config<R>, json: bool) -> Result<()> {
    let provider = config.library_provider();
    let builder = CatalogBuilder::new(&config.runtime, provider.as_ref());
    let catalog = builder.build(config.policy).await?;

    debug!("Found {} package(s)", catalog.packages.len());
    print!("{}", render_list(&catalog.packages, json)?);
    Ok(())
}

/// Render the catalog as aligned `name  version  title` rows, or as JSON.
pub fn render_list(packages: &[PackageRecord], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(packages)?));
    }

    if packages.is_empty() {
        return Ok("No packages found.\n".to_string());
    }

    let name_width = packages.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let version_width = packages.iter().map(|p| p.version.len()).max().unwrap_or(0);

    let mut out = String::new();
    for pkg in packages {
        let line = format!(
            "{:<name_width$}  {:<version_width$}  {}",
            pkg.name, pkg.version, pkg.title
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
