//! Token Ledger Errors

use preserve_types::{codes, Amount};
use thiserror::Error;

/// Error during ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("Arithmetic overflow")]
    Overflow,
}

impl LedgerError {
    /// Stable wire code surfaced to contract callers.
    pub fn code(&self) -> u32 {
        match self {
            LedgerError::InsufficientBalance { .. } => codes::INSUFFICIENT_BALANCE,
            LedgerError::Overflow => codes::ARITHMETIC_FAULT,
        }
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
