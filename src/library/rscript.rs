use async_trait::async_trait;
use log::{debug, info};
use std::path::PathBuf;

use super::LibraryPathProvider;
use crate::error::CatalogError;
use crate::runtime::Runtime;

/// R front end used when none is configured.
pub const DEFAULT_RSCRIPT: &str = "Rscript";

/// R expression printing `.libPaths()` newline-separated, without a trailing newline.
pub const LIB_PATHS_EXPR: &str = r#"cat(paste0(.libPaths(), collapse = "\n"), sep = "")"#;

/// Asks the host R installation for its library roots.
///
/// Spawns one process per call; nothing is cached.
pub struct RscriptLibraryPaths<'a, R: Runtime> {
    runtime: &'a R,
    program: String,
}

impl<'a, R: Runtime> RscriptLibraryPaths<'a, R> {
    pub fn new(runtime: &'a R, program: impl Into<String>) -> Self {
        Self {
            runtime,
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl<'a, R: Runtime> LibraryPathProvider for RscriptLibraryPaths<'a, R> {
    #[tracing::instrument(skip(self))]
    async fn library_paths(&self) -> Result<Vec<PathBuf>, CatalogError> {
        let args = vec!["-e".to_string(), LIB_PATHS_EXPR.to_string()];
        let output = self
            .runtime
            .output(&self.program, &args)
            .await
            .map_err(|e| CatalogError::process(&self.program, format!("{:#}", e)))?;

        if !output.success {
            let status = match output.code {
                Some(code) => format!("exit status {}", code),
                None => "terminated by signal".to_string(),
            };
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let reason = if stderr.is_empty() {
                status
            } else {
                format!("{}: {}", status, stderr)
            };
            return Err(CatalogError::process(&self.program, reason));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| CatalogError::process(&self.program, "output is not valid UTF-8"))?;

        let paths = parse_library_paths(&stdout);
        info!("R reports {} library path(s)", paths.len());
        debug!("Library paths: {:?}", paths);
        Ok(paths)
    }
}

/// Split newline-separated library paths, tolerating CRLF and blank lines.
pub fn parse_library_paths(stdout: &str) -> Vec<PathBuf> {
    stdout
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}
