//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes.
//!
//! | Code | Description                                    |
//! |------|------------------------------------------------|
//! | 0    | Success                                        |
//! | 1    | General error (unspecified)                    |
//! | 2    | Usage error (bad reference, unknown sheet/col) |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, unresolved reference.
pub const EXIT_USAGE: u8 = 2;
