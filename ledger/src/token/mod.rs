//! # Multi-Token Ledger
//!
//! ERC-1155 semantics over the shared diamond storage.
//!
//! ```text
//! balances.rs   LedgerLayout, balance/approval maps and their accessors
//! transfer.rs   safeTransferFrom / safeBatchTransferFrom
//! supply.rs     mint, mintBatch, burn, burnBatch (+ authenticated burns)
//! ```
//!
//! Every entry point follows the same shape:
//!
//! ```text
//! Validate → Debit/Credit → Emit → Acknowledge (contract recipients only)
//! ```
//!
//! all inside one [`Host::atomic`](crate::host::Host::atomic) unit, so a
//! failure anywhere, including inside the recipient's hook, leaves no trace.

pub mod balances;
pub mod supply;
pub mod transfer;

pub use balances::{
    balance_of, balance_of_batch, is_approved_for_all, set_approval_for_all, LedgerLayout,
};
pub use supply::{burn, burn_authorized, burn_batch, burn_batch_authorized, mint, mint_batch};
pub use transfer::{safe_batch_transfer_from, safe_transfer_from};

use crate::error::LedgerError;
use crate::types::Address;

/// Rejects a null source address.
pub(crate) fn ensure_sender(from: Address) -> Result<(), LedgerError> {
    if from.is_zero() {
        return Err(LedgerError::InvalidSender { sender: from });
    }
    Ok(())
}

/// Rejects a null destination address.
pub(crate) fn ensure_receiver(to: Address) -> Result<(), LedgerError> {
    if to.is_zero() {
        return Err(LedgerError::InvalidReceiver { receiver: to });
    }
    Ok(())
}

/// Rejects an operator that is neither `owner` nor approved by them.
pub(crate) fn ensure_authorized(
    ledger: &LedgerLayout,
    operator: Address,
    owner: Address,
) -> Result<(), LedgerError> {
    if operator != owner && !ledger.is_approved_for_all(owner, operator) {
        return Err(LedgerError::MissingApprovalForAll { operator, owner });
    }
    Ok(())
}
