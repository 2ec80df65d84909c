//! Capsule Registry Errors

use preserve_types::{codes, CapsuleId};
use thiserror::Error;

/// Error during capsule operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapsuleError {
    #[error("Capsule not found: {0}")]
    CapsuleNotFound(CapsuleId),

    #[error("Caller is not the current holder of capsule {0}")]
    NotHolder(CapsuleId),

    #[error("Arithmetic overflow")]
    Overflow,
}

impl CapsuleError {
    /// Stable wire code surfaced to contract callers.
    pub fn code(&self) -> u32 {
        match self {
            CapsuleError::CapsuleNotFound(_) => codes::NOT_FOUND,
            CapsuleError::NotHolder(_) => codes::FORBIDDEN,
            CapsuleError::Overflow => codes::ARITHMETIC_FAULT,
        }
    }
}

/// Result type for capsule operations
pub type CapsuleResult<T> = Result<T, CapsuleError>;
