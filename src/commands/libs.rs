use anyhow::Result;

use crate::runtime::Runtime;

use super::config::Config;

/// Print the library roots packages are searched in, in search order
#[tracing::instrument(skip(config))]
pub async fn libs<R: Runtime>(config: Config<R>) -> Result<()> {
    let paths = config.library_provider().library_paths().await?;
    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}
