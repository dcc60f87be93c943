//! # Supply Facet
//!
//! Minting is restricted to the contract owner. Burning is open to the token
//! owner and their approved operators, through the authenticated burn
//! wrappers.

use gemstone_ledger::call::selectors;
use gemstone_ledger::registry::enforce_contract_owner;
use gemstone_ledger::token;
use gemstone_ledger::{Address, Call, Contract, Facet, Host, LedgerError, Output, Selector};

use crate::unsupported;

/// `mint`, `mintBatch`, `burn`, `burnBatch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SupplyFacet;

impl SupplyFacet {
    pub const SELECTORS: [Selector; 4] = [
        selectors::MINT,
        selectors::MINT_BATCH,
        selectors::BURN,
        selectors::BURN_BATCH,
    ];
}

impl Contract for SupplyFacet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for SupplyFacet {
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
            Call::Mint {
                to,
                id,
                value,
                data,
            } => {
                enforce_contract_owner(host, sender)?;
                token::mint(host, sender, to, id, value, &data)?;
            }
            Call::MintBatch {
                to,
                ids,
                values,
                data,
            } => {
                enforce_contract_owner(host, sender)?;
                token::mint_batch(host, sender, to, &ids, &values, &data)?;
            }
            Call::Burn { from, id, value } => {
                token::burn_authorized(host, sender, from, id, value)?;
            }
            Call::BurnBatch { from, ids, values } => {
                token::burn_batch_authorized(host, sender, from, &ids, &values)?;
            }
            other => return Err(unsupported(&other)),
        }
        Ok(Output::Empty)
    }
}
