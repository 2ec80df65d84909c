//! Preserve Token Ledger
//!
//! Fungible balance accounting for the preservation token.
//!
//! # Key Types
//!
//! - [`TokenLedger`]: per-principal balances plus the global total supply
//!
//! # Invariants
//!
//! - `total_supply` always equals the sum of all balances
//! - A failing operation leaves the ledger untouched
//! - Arithmetic never wraps; overflow is surfaced as [`LedgerError::Overflow`]

pub mod errors;
pub mod ledger;

pub use errors::{LedgerError, LedgerResult};
pub use ledger::TokenLedger;
