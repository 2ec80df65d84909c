//! Capsule Registry State & Operations
//!
//! Immutable records and the mutable holder relation live in separate maps;
//! a transfer touches only the holder map. Precondition checks short-circuit
//! before any mutation, so a failing call leaves both maps unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use preserve_types::{BlockHeight, CapsuleId, Principal};

use crate::capsule::Capsule;
use crate::errors::{CapsuleError, CapsuleResult};

/// Counter-indexed capsule store with NFT ownership semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapsuleRegistry {
    /// Immutable creation records, keyed by id. Never pruned.
    capsules: BTreeMap<CapsuleId, Capsule>,
    /// Current holder per capsule. The only mutable ownership field.
    holders: BTreeMap<CapsuleId, Principal>,
    /// Next capsule ID to assign (independent of the proposal counter)
    next_capsule_id: CapsuleId,
}

impl CapsuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            capsules: BTreeMap::new(),
            holders: BTreeMap::new(),
            next_capsule_id: 1,
        }
    }

    // ========================================================================
    // CREATION
    // ========================================================================

    /// Create a new capsule.
    ///
    /// Allocates the next id and records `creator` both in the immutable
    /// record and as the initial holder.
    pub fn create_capsule(
        &mut self,
        creator: Principal,
        data: String,
        release_height: BlockHeight,
    ) -> CapsuleResult<CapsuleId> {
        let capsule_id = self.next_capsule_id;
        self.next_capsule_id = capsule_id.checked_add(1).ok_or(CapsuleError::Overflow)?;

        self.capsules.insert(
            capsule_id,
            Capsule::new(capsule_id, creator, data, release_height),
        );
        self.holders.insert(capsule_id, creator);

        debug!(capsule_id, creator = %creator, release_height, "capsule created");
        Ok(capsule_id)
    }

    // ========================================================================
    // TRANSFER
    // ========================================================================

    /// Transfer a capsule to `recipient`.
    ///
    /// Only the current holder recorded in the ownership map may transfer;
    /// the immutable creation record is untouched, so a recipient can
    /// transfer onward.
    ///
    /// # Errors
    ///
    /// - `CapsuleNotFound` if no capsule with `id` exists
    /// - `NotHolder` if `caller` is not the current holder
    pub fn transfer_capsule(
        &mut self,
        caller: Principal,
        id: CapsuleId,
        recipient: Principal,
    ) -> CapsuleResult<()> {
        if !self.capsules.contains_key(&id) {
            return Err(CapsuleError::CapsuleNotFound(id));
        }

        let holder = self
            .holders
            .get_mut(&id)
            .ok_or(CapsuleError::CapsuleNotFound(id))?;
        if *holder != caller {
            return Err(CapsuleError::NotHolder(id));
        }

        *holder = recipient;

        debug!(capsule_id = id, from = %caller, to = %recipient, "capsule transferred");
        Ok(())
    }

    // ========================================================================
    // READ OPERATIONS
    // ========================================================================

    /// Get the immutable creation record of a capsule.
    ///
    /// Does not reflect ownership transfers; query [`Self::holder_of`] for
    /// the current holder.
    ///
    /// # Errors
    ///
    /// - `CapsuleNotFound` if no capsule with `id` exists
    pub fn capsule(&self, id: CapsuleId) -> CapsuleResult<&Capsule> {
        self.capsules.get(&id).ok_or(CapsuleError::CapsuleNotFound(id))
    }

    /// Get the current holder of a capsule
    pub fn holder_of(&self, id: CapsuleId) -> Option<Principal> {
        self.holders.get(&id).copied()
    }

    /// Number of capsules ever created
    pub fn capsule_count(&self) -> usize {
        self.capsules.len()
    }

    /// The id the next successful creation will be assigned
    pub fn next_capsule_id(&self) -> CapsuleId {
        self.next_capsule_id
    }
}

impl Default for CapsuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
