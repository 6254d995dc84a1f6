//! Shared test utilities for integration tests.
//!
//! Provides helpers for scratch directories and for running the compiled
//! binary with stdin input.

#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Creates temporary directory for generated files.
pub fn create_workspace() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Writes file to directory, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Runs the toolshed binary with arguments and stdin content.
///
/// # Arguments
///
/// * `args`: Command line arguments after the binary name
/// * `stdin`: Bytes piped to the process
///
/// # Returns
///
/// Captured process output
///
/// # Errors
///
/// Returns error if the process cannot be spawned or awaited
pub fn run_toolshed(args: &[&str], stdin: &[u8]) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_toolshed"))
        .args(args)
        .env_remove("TOOLSHED_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin)?;
    }

    Ok(child.wait_with_output()?)
}
