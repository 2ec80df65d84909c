//! Proposal Governor State & Operations
//!
//! One governor per deployed instance; the host sequences transactions so
//! each entry point runs to completion before the next. Every precondition
//! check short-circuits before any mutation, so a failing call leaves the
//! store exactly as it found it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use preserve_types::{Principal, ProposalId};

use crate::errors::{GovernanceError, GovernanceResult};
use crate::proposal::{Proposal, ProposalStatus};

/// Counter-indexed proposal store with vote tallies and terminal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalGovernor {
    /// All proposals, keyed by id. Never pruned.
    proposals: BTreeMap<ProposalId, Proposal>,
    /// Next proposal ID to assign
    next_proposal_id: ProposalId,
}

impl ProposalGovernor {
    /// Create an empty governor
    pub fn new() -> Self {
        Self {
            proposals: BTreeMap::new(),
            next_proposal_id: 1,
        }
    }

    // ========================================================================
    // PROPOSAL CREATION
    // ========================================================================

    /// Create a new proposal.
    ///
    /// Allocates the next id (starting at 1, never reused), records
    /// `proposer` as the caller, and opens the proposal in the `Active`
    /// state with zero tallies.
    pub fn create_proposal(
        &mut self,
        proposer: Principal,
        description: String,
    ) -> GovernanceResult<ProposalId> {
        let proposal_id = self.next_proposal_id;
        self.next_proposal_id = proposal_id
            .checked_add(1)
            .ok_or(GovernanceError::Overflow)?;

        self.proposals
            .insert(proposal_id, Proposal::new(proposal_id, proposer, description));

        debug!(proposal_id, proposer = %proposer, "proposal created");
        Ok(proposal_id)
    }

    // ========================================================================
    // VOTING
    // ========================================================================

    /// Cast a vote on an active proposal.
    ///
    /// Increments the for-tally (`support = true`) or against-tally by
    /// exactly 1. Voter identity is not recorded: repeat votes by the same
    /// principal are accepted while the proposal is active.
    ///
    /// # Errors
    ///
    /// - `ProposalNotFound` if no proposal with `id` exists
    /// - `ProposalNotActive` if the proposal already reached an outcome
    pub fn vote(
        &mut self,
        voter: Principal,
        id: ProposalId,
        support: bool,
    ) -> GovernanceResult<()> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;

        if !proposal.status.is_active() {
            return Err(GovernanceError::ProposalNotActive {
                id,
                status: proposal.status,
            });
        }

        if support {
            proposal.votes_for = proposal
                .votes_for
                .checked_add(1)
                .ok_or(GovernanceError::Overflow)?;
        } else {
            proposal.votes_against = proposal
                .votes_against
                .checked_add(1)
                .ok_or(GovernanceError::Overflow)?;
        }

        debug!(
            proposal_id = id,
            voter = %voter,
            support,
            votes_for = proposal.votes_for,
            votes_against = proposal.votes_against,
            "vote recorded"
        );
        Ok(())
    }

    // ========================================================================
    // EXECUTION
    // ========================================================================

    /// Execute an active proposal, fixing its terminal outcome.
    ///
    /// Decision rule: `Passed` iff `votes_for > votes_against`; a tie
    /// rejects. The status check is the only idempotence guard — a second
    /// execute call returns `ProposalNotActive` and never re-evaluates the
    /// tally.
    ///
    /// # Errors
    ///
    /// - `ProposalNotFound` if no proposal with `id` exists
    /// - `ProposalNotActive` if the proposal already reached an outcome
    pub fn execute(&mut self, caller: Principal, id: ProposalId) -> GovernanceResult<()> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;

        if !proposal.status.is_active() {
            return Err(GovernanceError::ProposalNotActive {
                id,
                status: proposal.status,
            });
        }

        proposal.status = if proposal.votes_for > proposal.votes_against {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        };

        debug!(
            proposal_id = id,
            caller = %caller,
            status = ?proposal.status,
            "proposal executed"
        );
        Ok(())
    }

    // ========================================================================
    // READ OPERATIONS
    // ========================================================================

    /// Get a proposal by ID
    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Number of proposals ever created
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// The id the next successful creation will be assigned
    pub fn next_proposal_id(&self) -> ProposalId {
        self.next_proposal_id
    }
}

impl Default for ProposalGovernor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(byte: u8) -> Principal {
        Principal::new([byte; 32])
    }

    #[test]
    fn test_create_assigns_sequential_ids_from_one() {
        let mut gov = ProposalGovernor::new();
        assert_eq!(gov.create_proposal(p(1), "first".into()).unwrap(), 1);
        assert_eq!(gov.create_proposal(p(2), "second".into()).unwrap(), 2);
        assert_eq!(gov.create_proposal(p(1), "third".into()).unwrap(), 3);
        assert_eq!(gov.proposal_count(), 3);
        assert_eq!(gov.next_proposal_id(), 4);
    }

    #[test]
    fn test_create_records_proposer_and_description() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(7), "fund the archive".into()).unwrap();

        let proposal = gov.proposal(id).unwrap();
        assert_eq!(proposal.proposer, p(7));
        assert_eq!(proposal.description, "fund the archive");
        assert_eq!(proposal.status, ProposalStatus::Active);
    }

    #[test]
    fn test_vote_increments_tally() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();

        gov.vote(p(2), id, true).unwrap();
        gov.vote(p(3), id, false).unwrap();

        let proposal = gov.proposal(id).unwrap();
        assert_eq!(proposal.votes_for, 1);
        assert_eq!(proposal.votes_against, 1);
    }

    #[test]
    fn test_repeat_votes_by_same_principal_accepted() {
        // Voter identity is not tracked; the observed contract allows this.
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();

        gov.vote(p(2), id, true).unwrap();
        gov.vote(p(2), id, true).unwrap();
        gov.vote(p(2), id, true).unwrap();

        assert_eq!(gov.proposal(id).unwrap().votes_for, 3);
    }

    #[test]
    fn test_vote_unknown_proposal_is_not_found() {
        let mut gov = ProposalGovernor::new();
        let before = gov.clone();

        let result = gov.vote(p(1), 999, true);
        assert_eq!(result, Err(GovernanceError::ProposalNotFound(999)));
        assert_eq!(result.unwrap_err().code(), 404);
        assert_eq!(gov, before);
    }

    #[test]
    fn test_execute_majority_passes() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();
        gov.vote(p(2), id, true).unwrap();
        gov.vote(p(3), id, true).unwrap();
        gov.vote(p(4), id, false).unwrap();

        gov.execute(p(1), id).unwrap();
        assert_eq!(gov.proposal(id).unwrap().status, ProposalStatus::Passed);
    }

    #[test]
    fn test_execute_tie_rejects() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();
        gov.vote(p(2), id, true).unwrap();
        gov.vote(p(3), id, false).unwrap();

        gov.execute(p(1), id).unwrap();
        assert_eq!(gov.proposal(id).unwrap().status, ProposalStatus::Rejected);
    }

    #[test]
    fn test_execute_no_votes_rejects() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();

        gov.execute(p(1), id).unwrap();
        assert_eq!(gov.proposal(id).unwrap().status, ProposalStatus::Rejected);
    }

    #[test]
    fn test_execute_unknown_proposal_is_not_found() {
        let mut gov = ProposalGovernor::new();
        let result = gov.execute(p(1), 999);
        assert_eq!(result, Err(GovernanceError::ProposalNotFound(999)));
    }

    #[test]
    fn test_outcome_is_terminal() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "x".into()).unwrap();
        gov.vote(p(2), id, true).unwrap();
        gov.execute(p(1), id).unwrap();
        let before = gov.clone();

        // Further votes are refused and change nothing.
        let result = gov.vote(p(2), id, false);
        assert_eq!(
            result,
            Err(GovernanceError::ProposalNotActive {
                id,
                status: ProposalStatus::Passed,
            })
        );
        assert_eq!(result.unwrap_err().code(), 403);
        assert_eq!(gov, before);

        // A second execute never re-evaluates the tally.
        let result = gov.execute(p(1), id);
        assert_eq!(
            result,
            Err(GovernanceError::ProposalNotActive {
                id,
                status: ProposalStatus::Passed,
            })
        );
        assert_eq!(gov, before);
    }

    #[test]
    fn test_ids_not_reused_after_execution() {
        let mut gov = ProposalGovernor::new();
        let first = gov.create_proposal(p(1), "a".into()).unwrap();
        gov.execute(p(1), first).unwrap();

        let second = gov.create_proposal(p(1), "b".into()).unwrap();
        assert_eq!(second, 2);
        assert_eq!(gov.proposal(first).unwrap().status, ProposalStatus::Rejected);
    }

    #[test]
    fn test_state_serialization_roundtrip() {
        let mut gov = ProposalGovernor::new();
        let id = gov.create_proposal(p(1), "persist me".into()).unwrap();
        gov.vote(p(2), id, true).unwrap();

        let bytes = bincode::serialize(&gov).unwrap();
        let restored: ProposalGovernor = bincode::deserialize(&bytes).unwrap();
        assert_eq!(gov, restored);
    }
}
