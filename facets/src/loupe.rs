//! # Loupe Facet
//!
//! Registry introspection plus ERC-165 `supportsInterface`. Read-only.

use gemstone_ledger::call::selectors;
use gemstone_ledger::registry::{loupe, supports_interface};
use gemstone_ledger::{Address, Call, Contract, Facet, Host, LedgerError, Output, Selector};

use crate::unsupported;

#[derive(Debug, Default, Clone, Copy)]
pub struct LoupeFacet;

impl LoupeFacet {
    pub const SELECTORS: [Selector; 5] = [
        selectors::FACETS,
        selectors::FACET_FUNCTION_SELECTORS,
        selectors::FACET_ADDRESSES,
        selectors::FACET_ADDRESS,
        selectors::SUPPORTS_INTERFACE,
    ];
}

impl Contract for LoupeFacet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for LoupeFacet {
    fn packed_selectors(&self) -> Vec<u8> {
        Selector::pack(&Self::SELECTORS)
    }

    fn execute(&self, host: &mut Host, _sender: Address, call: Call) -> Result<Output, LedgerError> {
        let host: &Host = host;
        match call {
            Call::Facets => Ok(Output::Pairs(loupe::facets(host))),
            Call::FacetFunctionSelectors { facet } => Ok(Output::Selectors(
                loupe::facet_function_selectors(host, facet),
            )),
            Call::FacetAddresses => Ok(Output::Addresses(loupe::facet_addresses(host))),
            Call::FacetAddress { selector } => {
                Ok(Output::FacetAddress(loupe::facet_address(host, selector)))
            }
            Call::SupportsInterface { interface_id } => {
                Ok(Output::Bool(supports_interface(host, interface_id)))
            }
            other => Err(unsupported(&other)),
        }
    }
}
