//! Implementation of the `codefence check` command.

use super::read_input;
use crate::cli::CheckArgs;
use codefence::schema::check_document;
use codefence::split::split_block;
use codefence::{CodefenceError, Result};

/// Execute the `codefence check` command.
///
/// Prints every diagnostic. Warnings alone pass; any error fails the
/// command with the schema exit code.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let raw = read_input(&args.block)?;
    let split = split_block(&raw);

    if split.document.is_null() {
        println!("No configuration found; the block is literal content.");
        return Ok(());
    }

    let report = check_document(&split.document);
    print!("{}", report.format_report());

    if report.passed() {
        println!(
            "Configuration OK ({} warning(s))",
            report.warning_count()
        );
        Ok(())
    } else {
        Err(CodefenceError::SchemaError(format!(
            "{} error(s), {} warning(s)",
            report.error_count(),
            report.warning_count()
        )))
    }
}
