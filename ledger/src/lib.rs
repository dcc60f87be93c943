// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Gemstone Ledger: Core Library
//!
//! A multi-token ledger with ERC-1155 semantics, built to live behind a
//! diamond proxy: many independently upgradeable facets, one shared storage
//! namespace. The facets themselves are thin (see the `gemstone-facets`
//! crate); everything that can actually go wrong lives here.
//!
//! ## Architecture
//!
//! - **types**: Addresses, 256-bit amounts, and 4-byte call selectors.
//! - **config**: Namespaces, magic values, interface ids, limits.
//! - **storage**: The diamond storage: one layout per logical module, each
//!   keyed by a slot derived from its namespace string.
//! - **host**: The atomic unit of work. Owns storage, the event log, and
//!   the code deployed at each address.
//! - **token**: Ledger store, transfer engine, mint/burn engine.
//! - **receiver**: The recipient acknowledgment protocol.
//! - **registry**: Selector-to-facet linked list, loupe read path, cuts.
//! - **metadata**: Default/base/per-token URIs.
//! - **call**: The call and output model the router dispatches on.
//! - **logging**: `tracing` subscriber setup.
//!
//! ## Ground Rules
//!
//! 1. Balances are `U256` and every mutation is checked. Wrapping arithmetic
//!    and token balances do not mix.
//! 2. Effects before interactions: balances move before any receiver hook
//!    runs, so a reentrant recipient always sees post-transfer state.
//! 3. Every failure is a typed [`LedgerError`] and rolls back the whole unit
//!    of work, events included.

pub mod call;
pub mod config;
pub mod error;
pub mod event;
pub mod host;
pub mod logging;
pub mod metadata;
pub mod receiver;
pub mod registry;
pub mod storage;
pub mod token;
pub mod types;

pub use call::{Call, Output};
pub use error::LedgerError;
pub use event::Event;
pub use host::{Contract, Host};
pub use receiver::TokenReceiver;
pub use registry::{Facet, FacetCut, FacetCutAction};
pub use storage::DiamondStorage;
pub use types::{derive_address, Address, Amount, Selector, TokenId, U256};
