//! Proposal record and lifecycle types

use serde::{Deserialize, Serialize};

use preserve_types::{Principal, ProposalId};

/// Proposal status.
///
/// Created `Active`; transitions exactly once to `Passed` or `Rejected` at
/// execution. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Open for voting and execution
    #[default]
    Active,
    /// Executed with votes_for > votes_against
    Passed,
    /// Executed with votes_for <= votes_against (a tie rejects)
    Rejected,
}

impl ProposalStatus {
    /// Whether votes and execution are still accepted
    pub fn is_active(&self) -> bool {
        matches!(self, ProposalStatus::Active)
    }
}

/// Individual governance proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Unique proposal ID (counter-assigned, starts at 1, never reused)
    pub id: ProposalId,
    /// Principal that created the proposal
    pub proposer: Principal,
    /// Free-form proposal description
    pub description: String,
    /// Votes in favor
    pub votes_for: u64,
    /// Votes against
    pub votes_against: u64,
    /// Current lifecycle status
    pub status: ProposalStatus,
}

impl Proposal {
    /// Create a fresh proposal in the `Active` state with empty tallies
    pub fn new(id: ProposalId, proposer: Principal, description: String) -> Self {
        Self {
            id,
            proposer,
            description,
            votes_for: 0,
            votes_against: 0,
            status: ProposalStatus::Active,
        }
    }
}
