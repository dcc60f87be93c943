//! # Host: the Atomic Unit of Work
//!
//! On-chain, atomicity is free: a failed call throws away every state change
//! it made. Off-chain we have to provide it ourselves. [`Host`] bundles the
//! three things a call can touch:
//!
//! - the diamond's [`DiamondStorage`],
//! - the ordered event log,
//! - the code deployed at each address (receivers, facets, the diamond).
//!
//! [`Host::atomic`] snapshots storage and the event-log length, runs the
//! body, and puts both back if the body fails. Units nest: a reentrant call
//! made from a receiver hook gets its own snapshot, so if the hook swallows
//! that call's failure, the failed call's effects are still gone.
//!
//! The snapshot is a clone of the whole [`DiamondStorage`] (all three
//! layouts), taken on entry to every unit, so a unit costs time linear in
//! the size of storage even if it touches one balance. A routed call opens
//! two units: one in the router and one in the engine.
//!
//! Deployed code is not journaled.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::MAX_CALL_DEPTH;
use crate::error::LedgerError;
use crate::event::Event;
use crate::receiver::TokenReceiver;
use crate::registry::Facet;
use crate::storage::DiamondStorage;
use crate::types::Address;

/// Code deployed at an address.
///
/// Capabilities are opt-in: a contract that is neither a receiver nor a
/// facet still "has code", which matters for the acknowledgment protocol (a
/// transfer to it fails with `InvalidReceiver`).
pub trait Contract {
    /// The receiver hooks, if this contract implements them.
    fn as_receiver(&self) -> Option<&dyn TokenReceiver> {
        None
    }

    /// The facet interface, if this contract is a facet.
    fn as_facet(&self) -> Option<&dyn Facet> {
        None
    }
}

/// Execution environment for one diamond.
pub struct Host {
    storage: DiamondStorage,
    events: Vec<Event>,
    code: HashMap<Address, Arc<dyn Contract>>,
    depth: usize,
}

impl Host {
    /// Creates a host with empty storage and nothing deployed.
    pub fn new() -> Self {
        Self {
            storage: DiamondStorage::new(),
            events: Vec::new(),
            code: HashMap::new(),
            depth: 0,
        }
    }

    /// Read access to the diamond storage.
    pub fn storage(&self) -> &DiamondStorage {
        &self.storage
    }

    /// Write access to the diamond storage. Changes made outside
    /// [`atomic`](Self::atomic) are not rolled back by anything.
    pub fn storage_mut(&mut self) -> &mut DiamondStorage {
        &mut self.storage
    }

    /// Appends an event to the log.
    pub fn emit(&mut self, event: Event) {
        trace!(?event, "event emitted");
        self.events.push(event);
    }

    /// Every event emitted by committed (or still running) units of work.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the event log.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Deploys `contract` at `address`, replacing whatever was there.
    pub fn deploy(&mut self, address: Address, contract: Arc<dyn Contract>) {
        debug!(address = %format!("{address:#x}"), "contract deployed");
        self.code.insert(address, contract);
    }

    /// Whether anything is deployed at `address`.
    pub fn has_code(&self, address: Address) -> bool {
        self.code.contains_key(&address)
    }

    /// The contract deployed at `address`, if any.
    ///
    /// Returns a cloned handle so the caller can invoke it with `&mut self`.
    pub fn code_at(&self, address: Address) -> Option<Arc<dyn Contract>> {
        self.code.get(&address).cloned()
    }

    /// Current nesting depth of atomic units.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Runs `f` as one atomic unit of work.
    ///
    /// On error, storage and the event log are restored to their state
    /// before `f` ran and the error is returned unchanged.
    pub fn atomic<T, F>(&mut self, f: F) -> Result<T, LedgerError>
    where
        F: FnOnce(&mut Host) -> Result<T, LedgerError>,
    {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(LedgerError::CallDepthExceeded {
                depth: self.depth + 1,
            });
        }

        let snapshot = self.storage.clone();
        let mark = self.events.len();

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;

        if let Err(e) = &result {
            debug!(error = %e, depth = self.depth, "unit of work reverted");
            self.storage = snapshot;
            self.events.truncate(mark);
        }
        result
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}
