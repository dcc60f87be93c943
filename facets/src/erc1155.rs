//! # ERC-1155 Facet
//!
//! The standard token surface. The caller (`sender`) is the operator for
//! approvals and transfers.

use gemstone_ledger::call::selectors;
use gemstone_ledger::token;
use gemstone_ledger::{Address, Call, Contract, Facet, Host, LedgerError, Output, Selector};

use crate::unsupported;

/// Balance queries, approvals and safe transfers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Erc1155Facet;

impl Erc1155Facet {
    pub const SELECTORS: [Selector; 6] = [
        selectors::BALANCE_OF,
        selectors::BALANCE_OF_BATCH,
        selectors::SET_APPROVAL_FOR_ALL,
        selectors::IS_APPROVED_FOR_ALL,
        selectors::SAFE_TRANSFER_FROM,
        selectors::SAFE_BATCH_TRANSFER_FROM,
    ];
}

impl Contract for Erc1155Facet {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for Erc1155Facet {
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
            Call::BalanceOf { account, id } => {
                Ok(Output::Amount(token::balance_of(host, account, id)))
            }
            Call::BalanceOfBatch { accounts, ids } => Ok(Output::Amounts(
                token::balance_of_batch(host, &accounts, &ids)?,
            )),
            Call::SetApprovalForAll { operator, approved } => {
                token::set_approval_for_all(host, sender, operator, approved)?;
                Ok(Output::Empty)
            }
            Call::IsApprovedForAll { account, operator } => Ok(Output::Bool(
                token::is_approved_for_all(host, account, operator),
            )),
            Call::SafeTransferFrom {
                from,
                to,
                id,
                value,
                data,
            } => {
                token::safe_transfer_from(host, sender, from, to, id, value, &data)?;
                Ok(Output::Empty)
            }
            Call::SafeBatchTransferFrom {
                from,
                to,
                ids,
                values,
                data,
            } => {
                token::safe_batch_transfer_from(host, sender, from, to, &ids, &values, &data)?;
                Ok(Output::Empty)
            }
            other => Err(unsupported(&other)),
        }
    }
}
