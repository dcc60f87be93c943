//! # Diamond
//!
//! The proxy in front of the facets. Deployment wires a fresh [`Host`] into a
//! working multi-token contract; [`Diamond::call`] then routes each call to
//! whichever facet the routing table names for its selector.

use std::sync::Arc;

use gemstone_ledger::config::{DiamondConfig, DEFAULT_INTERFACES};
use gemstone_ledger::registry::{self, diamond_cut, loupe};
use gemstone_ledger::{
    derive_address, metadata, Address, Call, Contract, FacetCut, Host, LedgerError, Output,
    Selector,
};
use tracing::{debug, info};

use crate::{
    DiamondCutFacet, Erc1155Facet, LoupeFacet, MetadataFacet, OwnershipFacet, SupplyFacet,
};

/// Label the diamond's own address is derived from.
pub const DIAMOND_LABEL: &str = "gemstone.diamond";

/// The diamond's own code: no hooks, no facet surface.
struct DiamondProxy;

impl Contract for DiamondProxy {}

/// A deployed diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diamond {
    address: Address,
}

impl Diamond {
    /// Deploys the standard facet set into `host` and configures the diamond.
    ///
    /// Records `config.owner` as contract owner, seeds the default and base
    /// URIs, advertises the standard interface ids and registers every facet
    /// selector in one initial cut.
    pub fn deploy(host: &mut Host, config: &DiamondConfig) -> Result<Self, LedgerError> {
        let address = derive_address(DIAMOND_LABEL);

        host.atomic(|host| {
            host.deploy(address, Arc::new(DiamondProxy));

            let facets: [(&str, Arc<dyn Contract>, &[Selector]); 6] = [
                ("erc1155", Arc::new(Erc1155Facet), &Erc1155Facet::SELECTORS),
                ("supply", Arc::new(SupplyFacet), &SupplyFacet::SELECTORS),
                ("metadata", Arc::new(MetadataFacet), &MetadataFacet::SELECTORS),
                ("loupe", Arc::new(LoupeFacet), &LoupeFacet::SELECTORS),
                ("cut", Arc::new(DiamondCutFacet), &DiamondCutFacet::SELECTORS),
                ("ownership", Arc::new(OwnershipFacet), &OwnershipFacet::SELECTORS),
            ];

            let mut cuts = Vec::with_capacity(facets.len());
            for (name, code, selectors) in facets {
                let facet = Self::facet_address(name);
                host.deploy(facet, code);
                cuts.push(FacetCut::add(facet, selectors.to_vec()));
            }

            registry::set_contract_owner(host, config.owner);
            if !config.default_uri.is_empty() {
                metadata::set_default_uri(host, config.default_uri.clone());
            }
            if !config.base_uri.is_empty() {
                metadata::set_base_uri(host, config.base_uri.clone());
            }
            for interface_id in DEFAULT_INTERFACES {
                registry::set_supported_interface(host, interface_id, true);
            }
            diamond_cut(host, &cuts)
        })?;

        info!(
            diamond = %format!("{address:#x}"),
            owner = %format!("{:#x}", config.owner),
            "diamond deployed"
        );
        Ok(Self { address })
    }

    /// Address a standard facet is deployed at.
    pub fn facet_address(name: &str) -> Address {
        derive_address(&format!("gemstone.facet.{name}"))
    }

    /// The diamond's own address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Routes `call` from `sender` to the facet registered for its selector
    /// and runs it as one atomic unit.
    ///
    /// # Errors
    ///
    /// [`LedgerError::FunctionNotFound`] if no facet is registered for the
    /// selector, or the registered address does not hold facet code.
    /// Otherwise whatever the facet returns.
    pub fn call(&self, host: &mut Host, sender: Address, call: Call) -> Result<Output, LedgerError> {
        let selector = call.selector();
        let not_found = || LedgerError::FunctionNotFound { selector };

        let facet = loupe::facet_address(host, selector).ok_or_else(not_found)?;
        let code = host.code_at(facet).ok_or_else(not_found)?;
        let handler = code.as_facet().ok_or_else(not_found)?;

        debug!(
            %selector,
            facet = %format!("{facet:#x}"),
            sender = %format!("{sender:#x}"),
            "routing call"
        );
        host.atomic(|host| handler.execute(host, sender, call))
    }
}
