//! # Primitive Types
//!
//! The vocabulary every other module speaks: 160-bit addresses, 256-bit
//! token ids and amounts, and 4-byte call selectors.
//!
//! Addresses and wide integers come straight from `primitive-types`. The
//! selector is ours, because the registry needs a few things the raw
//! `[u8; 4]` doesn't give us: hex formatting, hex serde (so a
//! `HashMap<Selector, _>` survives a trip through JSON), and the packed
//! encoding facets use to self-report their selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

pub use primitive_types::{H160, U256};

/// An account or contract address. `Address::zero()` is the null address.
pub type Address = H160;

/// Identifier of a token type within the ledger.
pub type TokenId = U256;

/// A token balance or transfer amount.
pub type Amount = U256;

/// Width of a selector in bytes.
pub const SELECTOR_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// A 4-byte call selector (also used for ERC-165 interface ids and receiver
/// magic values, which share the width).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(pub [u8; SELECTOR_LENGTH]);

/// Errors from parsing a selector out of a hex string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorParseError {
    #[error("invalid selector hex: {0}")]
    InvalidHex(String),

    #[error("selector must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl Selector {
    /// Builds a selector from its big-endian `u32` form, e.g. `0x00fdd58e`.
    pub const fn from_u32(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    /// The raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SELECTOR_LENGTH] {
        &self.0
    }

    /// Packs selectors into a tight byte string, 4 bytes each, no padding.
    pub fn pack(selectors: &[Selector]) -> Vec<u8> {
        selectors.iter().flat_map(|s| s.0).collect()
    }

    /// Unpacks a tightly packed selector list, preserving order.
    ///
    /// Trailing bytes beyond a multiple of 4 are dropped.
    pub fn unpack(packed: &[u8]) -> Vec<Selector> {
        packed
            .chunks_exact(SELECTOR_LENGTH)
            .map(|chunk| {
                let mut raw = [0u8; SELECTOR_LENGTH];
                raw.copy_from_slice(chunk);
                Selector(raw)
            })
            .collect()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({self})")
    }
}

impl FromStr for Selector {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes =
            hex::decode(digits).map_err(|_| SelectorParseError::InvalidHex(s.to_string()))?;
        let raw: [u8; SELECTOR_LENGTH] =
            bytes
                .as_slice()
                .try_into()
                .map_err(|_| SelectorParseError::InvalidLength {
                    expected: SELECTOR_LENGTH,
                    actual: bytes.len(),
                })?;
        Ok(Selector(raw))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Address derivation
// ---------------------------------------------------------------------------

/// Derives a deterministic address from a label: the last 20 bytes of
/// `SHA-256(label)`.
///
/// The simulation has no deployer nonce to hash, so facets and test
/// contracts get addresses from their names instead.
pub fn derive_address(label: &str) -> Address {
    let digest = Sha256::digest(label.as_bytes());
    Address::from_slice(&digest[12..])
}
