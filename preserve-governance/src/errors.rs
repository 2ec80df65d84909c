//! Governance Errors

use preserve_types::{codes, ProposalId};
use thiserror::Error;

use crate::proposal::ProposalStatus;

/// Error during governance operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("Proposal not found: {0}")]
    ProposalNotFound(ProposalId),

    #[error("Proposal {id} is not active (status: {status:?})")]
    ProposalNotActive { id: ProposalId, status: ProposalStatus },

    #[error("Arithmetic overflow")]
    Overflow,
}

impl GovernanceError {
    /// Stable wire code surfaced to contract callers.
    pub fn code(&self) -> u32 {
        match self {
            GovernanceError::ProposalNotFound(_) => codes::NOT_FOUND,
            GovernanceError::ProposalNotActive { .. } => codes::FORBIDDEN,
            GovernanceError::Overflow => codes::ARITHMETIC_FAULT,
        }
    }
}

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
