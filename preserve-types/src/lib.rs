//! Preserve primitives: stable, behavior-free building blocks shared by the
//! ledger, governance, and capsule components.
//!
//! Identities in consensus state are fixed-size byte newtypes, never
//! strings.

pub mod codes;
pub mod primitives;

pub use codes::{ARITHMETIC_FAULT, FORBIDDEN, INSUFFICIENT_BALANCE, NOT_FOUND};
pub use primitives::{Amount, BlockHeight, CapsuleId, Principal, ProposalId};
