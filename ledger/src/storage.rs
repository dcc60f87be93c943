//! # Diamond Storage
//!
//! Facets are independent units that must read and write one shared state
//! without colliding. On-chain that is done by parking each module's struct
//! at a storage slot derived from a namespace string. Here the same contract
//! is kept explicitly: each module owns one layout type, each layout
//! declares its namespace, and the slot is `SHA-256(namespace)`.
//!
//! ```text
//! DiamondStorage
//! ├── ledger    @ SHA-256("gemstone.erc1155.ledger.storage")
//! ├── metadata  @ SHA-256("gemstone.erc1155.metadata.storage")
//! └── diamond   @ SHA-256("gemstone.diamond.standard.storage")
//! ```
//!
//! There is exactly one `DiamondStorage` per deployed diamond, owned by the
//! [`Host`](crate::host::Host) and handed to every engine by reference. No
//! module keeps state of its own.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::metadata::MetadataLayout;
use crate::registry::DiamondLayout;
use crate::token::LedgerLayout;

/// A 32-byte storage slot derived from a namespace string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StorageSlot(pub [u8; 32]);

impl StorageSlot {
    /// Derives the slot for a namespace.
    pub fn of(namespace: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(namespace.as_bytes());
        let mut slot = [0u8; 32];
        slot.copy_from_slice(&hasher.finalize());
        Self(slot)
    }
}

impl fmt::Display for StorageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for StorageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StorageSlot({self})")
    }
}

/// A storage layout bound to a namespace.
pub trait Namespaced {
    /// Human-readable namespace string.
    const NAMESPACE: &'static str;

    /// The slot this layout occupies.
    fn slot() -> StorageSlot {
        StorageSlot::of(Self::NAMESPACE)
    }
}

/// All state of one deployed diamond.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondStorage {
    /// Balances and operator approvals.
    pub ledger: LedgerLayout,
    /// Token URIs.
    pub metadata: MetadataLayout,
    /// Facet routing table, ERC-165 interfaces, owner.
    pub diamond: DiamondLayout,
}

impl DiamondStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(namespace, slot)` pair in use, in declaration order.
    pub fn slots() -> [(&'static str, StorageSlot); 3] {
        [
            (LedgerLayout::NAMESPACE, LedgerLayout::slot()),
            (MetadataLayout::NAMESPACE, MetadataLayout::slot()),
            (DiamondLayout::NAMESPACE, DiamondLayout::slot()),
        ]
    }

    /// Serializes the full storage to JSON, for export and inspection.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores storage from [`to_json`](Self::to_json) output.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
