pub mod catalog;
pub mod commands;
pub mod error;
pub mod library;
pub mod package;
pub mod runtime;

/// Test utilities for building fake R libraries.
#[cfg(test)]
pub mod test_utils {
    use crate::runtime::MockRuntime;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// Returns the test library directory path based on the platform.
    /// - Unix: `/usr/lib/R/library`
    /// - Windows: `C:\R\library`
    pub fn test_library() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/usr/lib/R/library")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\R\library")
        }
    }

    /// Configure a mock runtime to serve one library holding the given
    /// `(directory, DESCRIPTION text)` packages, in listing order.
    pub fn configure_mock_library(runtime: &mut MockRuntime, lib: &Path, packages: &[(&str, &str)]) {
        let lib = lib.to_path_buf();
        let entries: Vec<PathBuf> = packages.iter().map(|(dir, _)| lib.join(dir)).collect();
        let manifests: HashMap<PathBuf, String> = packages
            .iter()
            .map(|(dir, text)| (lib.join(dir).join("DESCRIPTION"), text.to_string()))
            .collect();

        runtime
            .expect_read_dir()
            .returning(move |p| {
                if p == lib {
                    Ok(entries.clone())
                } else {
                    anyhow::bail!("No such file or directory")
                }
            });
        runtime.expect_is_dir().returning(|_| true);
        runtime.expect_read_to_string().returning(move |p| {
            manifests
                .get(p)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No such file or directory"))
        });
    }
}
