//! Preserve Governance
//!
//! Proposal creation, voting, and execution for the Preserve DAO.
//!
//! # State machine
//!
//! Each proposal moves `Active → Passed` or `Active → Rejected`, decided at
//! execution by a strict-majority rule (a tie rejects). Both outcomes are
//! terminal: any further vote or execute call is refused.
//!
//! # Key Types
//!
//! - [`ProposalGovernor`]: the proposal store and its entry points
//! - [`Proposal`], [`ProposalStatus`]: per-proposal record and lifecycle

pub mod errors;
pub mod governor;
pub mod proposal;

pub use errors::{GovernanceError, GovernanceResult};
pub use governor::ProposalGovernor;
pub use proposal::{Proposal, ProposalStatus};
