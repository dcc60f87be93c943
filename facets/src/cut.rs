//! # Cut & Ownership Facets
//!
//! `diamondCut` rewires the routing table; `owner`/`transferOwnership`
//! implement ERC-173. Everything here except `owner()` requires the caller
//! to be the current owner.

use gemstone_ledger::call::selectors;
use gemstone_ledger::registry::{
    contract_owner, diamond_cut, enforce_contract_owner, set_contract_owner,
};
use gemstone_ledger::{Address, Call, Contract, Facet, Host, LedgerError, Output, Selector};

use crate::unsupported;

#[derive(Debug, Default, Clone, Copy)]
pub struct DiamondCutFacet;

impl DiamondCutFacet {
    pub const SELECTORS: [Selector; 1] = [selectors::DIAMOND_CUT];
}

impl Contract for DiamondCutFacet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for DiamondCutFacet {
    fn packed_selectors(&self) -> Vec<u8> {
        Selector::pack(&Self::SELECTORS)
    }

    fn execute(&self, host: &mut Host, sender: Address, call: Call) -> Result<Output, LedgerError> {
        match call {
            Call::DiamondCut { cuts } => {
                enforce_contract_owner(host, sender)?;
                diamond_cut(host, &cuts)?;
                Ok(Output::Empty)
            }
            other => Err(unsupported(&other)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OwnershipFacet;

impl OwnershipFacet {
    pub const SELECTORS: [Selector; 2] = [selectors::OWNER, selectors::TRANSFER_OWNERSHIP];
}

impl Contract for OwnershipFacet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for OwnershipFacet {
    fn packed_selectors(&self) -> Vec<u8> {
        Selector::pack(&Self::SELECTORS)
    }

    fn execute(&self, host: &mut Host, sender: Address, call: Call) -> Result<Output, LedgerError> {
        match call {
            Call::Owner => Ok(Output::Address(contract_owner(host))),
            Call::TransferOwnership { new_owner } => {
                enforce_contract_owner(host, sender)?;
                set_contract_owner(host, new_owner);
                Ok(Output::Empty)
            }
            other => Err(unsupported(&other)),
        }
    }
}
