//! # Diamond Cut
//!
//! Changes to the routing table, one selector at a time:
//!
//! - **Add**: selectors must be unrouted; appended at the tail.
//! - **Replace**: selectors must be routed to some other facet; rerouted
//!   in place.
//! - **Remove**: selectors must be routed; unlinked. The facet address in
//!   the cut must be zero.
//!
//! Add and Replace require code at the target facet. A list of cuts is
//! applied atomically and produces one `DiamondCut` event.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LedgerError;
use crate::event::Event;
use crate::host::Host;
use crate::types::{Address, Selector};

/// What a cut does to its selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetCutAction {
    Add,
    Replace,
    Remove,
}

/// One entry of a diamond cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCut {
    pub facet_address: Address,
    pub action: FacetCutAction,
    pub function_selectors: Vec<Selector>,
}

impl FacetCut {
    /// An `Add` cut.
    pub fn add(facet_address: Address, function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address,
            action: FacetCutAction::Add,
            function_selectors,
        }
    }

    /// A `Replace` cut.
    pub fn replace(facet_address: Address, function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address,
            action: FacetCutAction::Replace,
            function_selectors,
        }
    }

    /// A `Remove` cut.
    pub fn remove(function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address: Address::zero(),
            action: FacetCutAction::Remove,
            function_selectors,
        }
    }
}

/// Applies `cuts` in order. No ownership check; callers gate this.
///
/// # Errors
///
/// - [`LedgerError::NoSelectorsInFacet`] for a cut with no selectors.
/// - [`LedgerError::FacetHasNoCode`] for Add/Replace to an address without code.
/// - [`LedgerError::RemoveFacetAddressMustBeZero`] for Remove naming a facet.
/// - [`LedgerError::SelectorAlreadyRegistered`] on Add of a routed selector.
/// - [`LedgerError::SelectorNotRegistered`] on Replace/Remove of an unknown one.
/// - [`LedgerError::ReplaceWithSameFacet`] on a no-op Replace.
pub fn diamond_cut(host: &mut Host, cuts: &[FacetCut]) -> Result<(), LedgerError> {
    host.atomic(|host| {
        for cut in cuts {
            apply(host, cut)?;
        }
        info!(cuts = cuts.len(), "diamond cut applied");
        host.emit(Event::DiamondCut {
            cuts: cuts.to_vec(),
        });
        Ok(())
    })
}

fn apply(host: &mut Host, cut: &FacetCut) -> Result<(), LedgerError> {
    let facet = cut.facet_address;
    if cut.function_selectors.is_empty() {
        return Err(LedgerError::NoSelectorsInFacet { facet });
    }
    match cut.action {
        FacetCutAction::Remove if !facet.is_zero() => {
            return Err(LedgerError::RemoveFacetAddressMustBeZero { facet });
        }
        FacetCutAction::Add | FacetCutAction::Replace if !host.has_code(facet) => {
            return Err(LedgerError::FacetHasNoCode { facet });
        }
        _ => {}
    }

    let list = &mut host.storage_mut().diamond.facets;
    for selector in &cut.function_selectors {
        match cut.action {
            FacetCutAction::Add => list.push_back(*selector, facet)?,
            FacetCutAction::Replace => {
                list.reassign(*selector, facet)?;
            }
            FacetCutAction::Remove => {
                list.unlink(*selector)?;
            }
        }
    }
    Ok(())
}
