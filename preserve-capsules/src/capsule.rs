//! Capsule record types

use serde::{Deserialize, Serialize};

use preserve_types::{BlockHeight, CapsuleId, Principal};

/// Immutable capsule creation record.
///
/// `creator` is fixed at creation and never reflects later ownership
/// transfers; the current holder lives in the registry's ownership map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capsule {
    /// Unique capsule ID (counter-assigned, starts at 1, never reused)
    pub id: CapsuleId,
    /// Principal that created the capsule
    pub creator: Principal,
    /// Opaque payload
    pub data: String,
    /// Block height after which the contents may be considered releasable
    pub release_height: BlockHeight,
}

impl Capsule {
    /// Create a new capsule record
    pub fn new(
        id: CapsuleId,
        creator: Principal,
        data: String,
        release_height: BlockHeight,
    ) -> Self {
        Self {
            id,
            creator,
            data,
            release_height,
        }
    }

    /// Whether the capsule's contents may be released at the given chain
    /// height.
    ///
    /// Pure predicate for host-side unlock layers; no registry entry point
    /// gates on it.
    pub fn is_releasable(&self, height: BlockHeight) -> bool {
        height >= self.release_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releasable_at_and_after_height() {
        let capsule = Capsule::new(1, Principal::new([1u8; 32]), "d".into(), 100_000);

        assert!(!capsule.is_releasable(0));
        assert!(!capsule.is_releasable(99_999));
        assert!(capsule.is_releasable(100_000));
        assert!(capsule.is_releasable(100_001));
    }
}
