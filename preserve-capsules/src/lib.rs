//! Preserve Capsule Registry
//!
//! Time-locked capsule records with NFT-style ownership.
//!
//! A capsule is an immutable creation record (creator, opaque payload,
//! release height) paired with a separately tracked current holder. Only the
//! holder relation ever changes; release gating against chain height is a
//! host concern layered on top of [`Capsule::is_releasable`].
//!
//! # Key Types
//!
//! - [`CapsuleRegistry`]: capsule store plus ownership map
//! - [`Capsule`]: the immutable creation record

pub mod capsule;
pub mod errors;
pub mod registry;

pub use capsule::Capsule;
pub use errors::{CapsuleError, CapsuleResult};
pub use registry::CapsuleRegistry;
