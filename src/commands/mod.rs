//! Command implementations for codefence.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the input helper they share.

mod check;
mod resolve;

use crate::cli::Command;
use codefence::{CodefenceError, Result};
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Resolve(args) => resolve::cmd_resolve(args),
        Command::Check(args) => check::cmd_check(args),
    }
}

/// Read a block from a file, or from stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CodefenceError::UserError(format!("failed to read stdin: {}", e)))?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        CodefenceError::UserError(format!(
            "failed to read block file '{}': {}",
            path.display(),
            e
        ))
    })
}
