//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Process environment (current directory)
//! - `fs` - File system operations (read, directory listing)
//! - `process` - Spawning external programs and capturing their output

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Captured result of running an external program to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    /// Output of a process that exited with status 0.
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// Output of a process that exited with the given non-zero status.
    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn current_dir(&self) -> Result<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// True if the path is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    // Processes
    /// Run `program` with `args` to completion, capturing stdout and stderr.
    /// Fails only if the program could not be started; a non-zero exit is
    /// reported through [`ProcessOutput`].
    async fn output(&self, program: &str, args: &[String]) -> Result<ProcessOutput>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    async fn output(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        self.output_impl(program, args).await
    }
}
