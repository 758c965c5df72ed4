//! Exit code constants for the linescope CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: The input diff was rejected
//! - 3: One or more files could not be rewritten

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Parse failure: the diff on stdin is malformed; no file was touched.
pub const PARSE_FAILURE: i32 = 2;

/// Rewrite failure: at least one destination file could not be rewritten.
pub const REWRITE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PARSE_FAILURE, REWRITE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
