use anyhow::Result;
use log::debug;

use crate::{catalog::CatalogBuilder, package::PackageRecord, runtime::Runtime};

use super::config::Config;

/// Show details of every installed copy of a package
#[tracing::instrument(skip(config))]
pub async fn show<R: Runtime>(config: Config<R>, name: &str) -> Result<()> {
    let provider = config.library_provider();
    let builder = CatalogBuilder::new(&config.runtime, provider.as_ref());
    let catalog = builder.build(config.policy).await?;

    let matches = find_packages(&catalog.packages, name);
    debug!("{} package(s) named {}", matches.len(), name);
    if matches.is_empty() {
        anyhow::bail!("Package {} is not installed.", name);
    }

    print!("{}", render_details(&matches));
    Ok(())
}

/// Packages whose name equals `name`, ignoring case.
pub fn find_packages<'a>(packages: &'a [PackageRecord], name: &str) -> Vec<&'a PackageRecord> {
    let wanted = name.to_lowercase();
    packages
        .iter()
        .filter(|p| p.name.to_lowercase() == wanted)
        .collect()
}

/// Two-line summary plus install path for each package, blank-line separated.
pub fn render_details(packages: &[&PackageRecord]) -> String {
    packages
        .iter()
        .map(|p| format!("{}\n  Path: {}\n", p.summary(), p.path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
