//! Consistent hashing ring.
//!
//! Node ids and keys are placed on the same 32-bit CRC-32 space. A key is
//! owned by the first node at or after its position, wrapping around to the
//! lowest-hash node, so adding or removing a node only moves the keys that
//! sit between that node and its predecessor.

pub mod core;

#[cfg(test)]
mod tests;

pub use crate::core::domain::models::{DuplicateIdPolicy, Node, RingConfig, RingError, RingResult};
pub use crate::core::domain::services::ConsistentHasherService;
pub use crate::core::services::checksum::checksum;
pub use crate::core::services::ring::Ring;
