//! Exit code constants for the codefence CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid input files)
//! - 2: Filter failure (marker not found, empty marker)
//! - 3: Schema errors found by `codefence check`

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid settings.
pub const USER_ERROR: i32 = 1;

/// The filter chain rejected the block content.
pub const FILTER_FAILURE: i32 = 2;

/// The schema check reported at least one error.
pub const SCHEMA_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, FILTER_FAILURE, SCHEMA_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
