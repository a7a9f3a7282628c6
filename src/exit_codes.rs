//! Exit code constants for the fieldcheck CLI.
//!
//! - 0: Success, every rule passed
//! - 1: User error (bad args, unreadable file, invalid config or rule)
//! - 2: Validation failure (one or more rules reported failures)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or an unusable rule set.
pub const USER_ERROR: i32 = 1;

/// Validation failure: evaluation finished with at least one failure.
pub const VALIDATION_FAILURE: i32 = 2;
