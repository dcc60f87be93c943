//! # Metadata Facet
//!
//! `uri(id)` for everyone; URI setters for the contract owner.

use gemstone_ledger::call::selectors;
use gemstone_ledger::metadata;
use gemstone_ledger::registry::enforce_contract_owner;
use gemstone_ledger::{Address, Call, Contract, Facet, Host, LedgerError, Output, Selector};

use crate::unsupported;

#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataFacet;

impl MetadataFacet {
    pub const SELECTORS: [Selector; 4] = [
        selectors::URI,
        selectors::SET_DEFAULT_URI,
        selectors::SET_BASE_URI,
        selectors::SET_TOKEN_URI,
    ];
}

impl Contract for MetadataFacet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for MetadataFacet {
    fn packed_selectors(&self) -> Vec<u8> {
        Selector::pack(&Self::SELECTORS)
    }

    fn execute(
        &self,
        host: &mut Host,
        sender: Address,
        call: Call,
    ) -> Result<Output, LedgerError> {
        match call {
            Call::Uri { id } => return Ok(Output::Uri(metadata::uri(host, id))),
            Call::SetDefaultUri { uri } => {
                enforce_contract_owner(host, sender)?;
                metadata::set_default_uri(host, uri);
            }
            Call::SetBaseUri { uri } => {
                enforce_contract_owner(host, sender)?;
                metadata::set_base_uri(host, uri);
            }
            Call::SetTokenUri { id, uri } => {
                enforce_contract_owner(host, sender)?;
                metadata::set_token_uri(host, id, uri);
            }
            other => return Err(unsupported(&other)),
        }
        Ok(Output::Empty)
    }
}
