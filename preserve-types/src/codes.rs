//! Stable wire error codes.
//!
//! Every failing entry point surfaces exactly one of these codes to the
//! host. The codes are part of the contract ABI and must never change.

/// Numeric precondition failed on a transfer (sender balance too low).
pub const INSUFFICIENT_BALANCE: u32 = 1;

/// Operation not permitted given current state or caller identity.
pub const FORBIDDEN: u32 = 403;

/// Referenced id has no corresponding record.
pub const NOT_FOUND: u32 = 404;

/// Arithmetic overflow. Not part of the three-code contract taxonomy;
/// marks a fault the host should treat as fatal, never a wraparound.
pub const ARITHMETIC_FAULT: u32 = 500;
