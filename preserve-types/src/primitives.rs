//! Canonical Primitive Types for Preserve Consensus
//!
//! Everything here is fixed-size, cheap to copy and compare, and
//! deterministically serializable, so component stores keyed by these types
//! snapshot identically on every node.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Block height in the chain (0-indexed)
pub type BlockHeight = u64;

/// Token amounts (supports up to ~340 undecillion units)
pub type Amount = u128;

/// Governance proposal identifier (counter-assigned, starts at 1)
pub type ProposalId = u64;

/// Time capsule identifier (counter-assigned, starts at 1, independent of
/// the proposal counter)
pub type CapsuleId = u64;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// 32-byte principal (opaque caller/account identity supplied by the host)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default)]
pub struct Principal(pub [u8; 32]);

impl Principal {
    /// Create a new Principal from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed Principal
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero principal
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Principal {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_basics() {
        let p = Principal::new([3u8; 32]);
        assert!(!p.is_zero());
        assert_eq!(p.as_bytes(), &[3u8; 32]);

        let zero = Principal::zero();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_principal_debug_is_short_hex() {
        let p = Principal::new([0xabu8; 32]);
        assert_eq!(format!("{:?}", p), "Principal(abababababababab)");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let p = Principal::new([42u8; 32]);
        let serialized = bincode::serialize(&p).unwrap();
        let deserialized: Principal = bincode::deserialize(&serialized).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn test_from_array() {
        let bytes = [5u8; 32];
        let p: Principal = bytes.into();
        assert_eq!(p.0, bytes);
    }
}
