//! Exit codes (BSD sysexits.h compatible where applicable)

/// Generic failure, used for unrecognized arguments
pub const FAILURE: i32 = 1;

/// Data format error (embedded dataset)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;

/// Input/output error
pub const IOERR: i32 = 74;
