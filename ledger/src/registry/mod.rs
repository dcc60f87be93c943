//! # Facet Registry
//!
//! The diamond's routing table: which facet handles which selector. The
//! router asks [`facet_address`](loupe::facet_address) on every call; the
//! loupe functions answer introspection queries; cuts change the table.
//!
//! ```text
//! list.rs    FacetList, intrusive doubly-linked list over selectors
//! loupe.rs   read path: facet_address, facet_addresses, selectors, pairs
//! cut.rs     FacetCut (Add / Replace / Remove) and diamond_cut
//! ```
//!
//! This module also owns the rest of the diamond's own bookkeeping, the
//! ERC-165 interface set and the ERC-173 contract owner, since all of it
//! shares one namespace.

pub mod cut;
pub mod list;
pub mod loupe;

pub use cut::{diamond_cut, FacetCut, FacetCutAction};
pub use list::{FacetList, FacetNode};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::call::{Call, Output};
use crate::config::DIAMOND_NAMESPACE;
use crate::error::LedgerError;
use crate::event::Event;
use crate::host::Host;
use crate::storage::Namespaced;
use crate::types::{Address, Selector};

/// A contract that handles a set of selectors on behalf of the diamond.
pub trait Facet {
    /// The selectors this facet implements, packed 4 bytes each.
    fn packed_selectors(&self) -> Vec<u8>;

    /// Executes `call` made by `sender` against the diamond's state.
    fn execute(&self, host: &mut Host, sender: Address, call: Call)
        -> Result<Output, LedgerError>;

    /// [`packed_selectors`](Self::packed_selectors), unpacked.
    fn selectors(&self) -> Vec<Selector> {
        Selector::unpack(&self.packed_selectors())
    }
}

/// Diamond bookkeeping storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondLayout {
    /// Selector routing table.
    pub facets: FacetList,
    /// ERC-165 interface ids this diamond claims to support.
    pub supported_interfaces: HashSet<Selector>,
    /// ERC-173 owner.
    pub contract_owner: Address,
}

impl Namespaced for DiamondLayout {
    const NAMESPACE: &'static str = DIAMOND_NAMESPACE;
}

// ---------------------------------------------------------------------------
// Ownership (ERC-173)
// ---------------------------------------------------------------------------

/// The current owner.
pub fn contract_owner(host: &Host) -> Address {
    host.storage().diamond.contract_owner
}

/// Fails unless `sender` is the owner.
pub fn enforce_contract_owner(host: &Host, sender: Address) -> Result<(), LedgerError> {
    let owner = contract_owner(host);
    if sender != owner {
        return Err(LedgerError::NotContractOwner { sender, owner });
    }
    Ok(())
}

/// Sets the owner and emits `OwnershipTransferred`. Transferring to the
/// null address renounces ownership.
pub fn set_contract_owner(host: &mut Host, new_owner: Address) {
    let previous_owner = contract_owner(host);
    host.storage_mut().diamond.contract_owner = new_owner;
    info!(
        previous = %format!("{previous_owner:#x}"),
        new = %format!("{new_owner:#x}"),
        "ownership transferred"
    );
    host.emit(Event::OwnershipTransferred {
        previous_owner,
        new_owner,
    });
}

// ---------------------------------------------------------------------------
// Interfaces (ERC-165)
// ---------------------------------------------------------------------------

/// Whether the diamond advertises `interface_id`.
pub fn supports_interface(host: &Host, interface_id: Selector) -> bool {
    host.storage()
        .diamond
        .supported_interfaces
        .contains(&interface_id)
}

/// Adds or removes an advertised interface.
pub fn set_supported_interface(host: &mut Host, interface_id: Selector, supported: bool) {
    let interfaces = &mut host.storage_mut().diamond.supported_interfaces;
    if supported {
        interfaces.insert(interface_id);
    } else {
        interfaces.remove(&interface_id);
    }
}
