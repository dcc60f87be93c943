//! # Ledger Configuration & Constants
//!
//! Every magic number the ledger depends on lives here: storage namespaces,
//! receiver acceptance codes, ERC-165 interface ids, and the call depth
//! limit. If a 4-byte constant shows up anywhere else, it should be a
//! reference to this module.
//!
//! The runtime knobs (initial owner, URIs, log setup) sit in
//! [`DiamondConfig`], which deserializes from JSON. An embedder loads one,
//! calls [`DiamondConfig::init_logging`] once, and hands the same config to
//! the diamond's deploy step.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tracing_subscriber::util::TryInitError;

use crate::logging::{self, LogFormat};
use crate::types::{Address, Selector};

// ---------------------------------------------------------------------------
// Storage Namespaces
// ---------------------------------------------------------------------------

/// Namespace of the balance and approval ledger.
pub const LEDGER_NAMESPACE: &str = "gemstone.erc1155.ledger.storage";

/// Namespace of the URI metadata module.
pub const METADATA_NAMESPACE: &str = "gemstone.erc1155.metadata.storage";

/// Namespace of the diamond's own bookkeeping: facet list, ERC-165 interface
/// set, contract owner.
pub const DIAMOND_NAMESPACE: &str = "gemstone.diamond.standard.storage";

// ---------------------------------------------------------------------------
// Receiver Acknowledgment
// ---------------------------------------------------------------------------

/// Returned by `onERC1155Received` to accept a single transfer. Equal to the
/// selector of `onERC1155Received(address,address,uint256,uint256,bytes)`.
pub const SINGLE_RECEIVED_MAGIC: Selector = Selector::from_u32(0xf23a_6e61);

/// Returned by `onERC1155BatchReceived` to accept a batch transfer. Equal to
/// the selector of
/// `onERC1155BatchReceived(address,address,uint256[],uint256[],bytes)`.
pub const BATCH_RECEIVED_MAGIC: Selector = Selector::from_u32(0xbc19_7c81);

// ---------------------------------------------------------------------------
// ERC-165 Interface Ids
// ---------------------------------------------------------------------------

pub const ERC165_INTERFACE_ID: Selector = Selector::from_u32(0x01ff_c9a7);
pub const ERC1155_INTERFACE_ID: Selector = Selector::from_u32(0xd9b6_7a26);
pub const ERC1155_METADATA_URI_INTERFACE_ID: Selector = Selector::from_u32(0x0e89_341c);
pub const ERC1155_RECEIVER_INTERFACE_ID: Selector = Selector::from_u32(0x4e23_12e0);
pub const DIAMOND_CUT_INTERFACE_ID: Selector = Selector::from_u32(0x1f93_1c1c);
pub const DIAMOND_LOUPE_INTERFACE_ID: Selector = Selector::from_u32(0x48e2_b093);
pub const ERC173_INTERFACE_ID: Selector = Selector::from_u32(0x7f58_28d0);

/// The interfaces a freshly deployed diamond advertises.
pub const DEFAULT_INTERFACES: [Selector; 6] = [
    ERC165_INTERFACE_ID,
    ERC1155_INTERFACE_ID,
    ERC1155_METADATA_URI_INTERFACE_ID,
    DIAMOND_CUT_INTERFACE_ID,
    DIAMOND_LOUPE_INTERFACE_ID,
    ERC173_INTERFACE_ID,
];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum nesting of atomic units of work. Reentrant receivers that keep
/// calling back hit this instead of the thread's stack limit.
pub const MAX_CALL_DEPTH: usize = 128;

/// Default `tracing` filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ---------------------------------------------------------------------------
// DiamondConfig
// ---------------------------------------------------------------------------

/// Deployment-time settings for a diamond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiamondConfig {
    /// Initial contract owner. Gates cuts, minting, and URI updates.
    pub owner: Address,
    /// URI returned for tokens without a per-token override.
    pub default_uri: String,
    /// Prefix applied to per-token URIs.
    pub base_uri: String,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// `"pretty"` or `"json"`.
    pub log_format: String,
}

impl Default for DiamondConfig {
    fn default() -> Self {
        Self {
            owner: Address::zero(),
            default_uri: String::new(),
            base_uri: String::new(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl DiamondConfig {
    /// Parses a config from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid diamond config JSON")
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in config file {}", path.display()))
    }

    /// The configured log format.
    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_str_lossy(&self.log_format)
    }

    /// Installs the global `tracing` subscriber with this config's level and
    /// format. `RUST_LOG` still takes precedence over `log_level`.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already installed.
    pub fn init_logging(&self) -> Result<(), TryInitError> {
        logging::try_init_logging(&self.log_level, self.log_format())
    }
}
