//! External process execution.

use anyhow::{Context, Result};
use log::debug;
use std::process::Stdio;
use tokio::process::Command;

use super::{ProcessOutput, RealRuntime};

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn output_impl(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to start {}", program))?;

        Ok(ProcessOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};

    #[tokio::test]
    async fn test_real_runtime_output_missing_program() {
        let runtime = RealRuntime;
        let result = runtime
            .output("rpkgs-definitely-not-a-real-program", &[])
            .await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_real_runtime_output_captures_stdout_and_status() {
        let runtime = RealRuntime;

        let ok = runtime
            .output("sh", &["-c".to_string(), "printf 'a\\nb'".to_string()])
            .await
            .unwrap();
        assert!(ok.success);
        assert_eq!(ok.code, Some(0));
        assert_eq!(ok.stdout, b"a\nb");

        let failed = runtime
            .output("sh", &["-c".to_string(), "echo boom >&2; exit 3".to_string()])
            .await
            .unwrap();
        assert!(!failed.success);
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.stderr, b"boom\n");
    }
}
