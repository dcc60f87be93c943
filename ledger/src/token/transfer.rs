//! # Transfer Engine
//!
//! `safeTransferFrom` and `safeBatchTransferFrom`. Both run as one atomic
//! unit:
//!
//! 1. Validate: non-null `from` and `to`, operator is owner or approved,
//!    paired arrays line up.
//! 2. Debit/credit, index by index against the running balance.
//! 3. Emit `TransferSingle` / `TransferBatch`.
//! 4. If `to` has code, run its acknowledgment hook.
//!
//! Self-transfers and zero-value transfers go through the same path; they
//! net to no balance change but still emit and still acknowledge.

use tracing::debug;

use super::{ensure_authorized, ensure_receiver, ensure_sender};
use crate::error::LedgerError;
use crate::event::Event;
use crate::host::Host;
use crate::receiver::{acknowledge_batch, acknowledge_single};
use crate::types::{Address, Amount, TokenId};

/// Moves `value` of token `id` from `from` to `to` on behalf of `operator`.
///
/// # Errors
///
/// - [`LedgerError::InvalidSender`] if `from` is null.
/// - [`LedgerError::InvalidReceiver`] if `to` is null or rejects the tokens.
/// - [`LedgerError::MissingApprovalForAll`] if `operator` may not act for `from`.
/// - [`LedgerError::InsufficientBalance`] if `from` holds less than `value`.
/// - Any descriptive error raised by the recipient's hook.
pub fn safe_transfer_from(
    host: &mut Host,
    operator: Address,
    from: Address,
    to: Address,
    id: TokenId,
    value: Amount,
    data: &[u8],
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_sender(from)?;
        ensure_receiver(to)?;
        ensure_authorized(&host.storage().ledger, operator, from)?;

        host.storage_mut()
            .ledger
            .update(from, to, &[id], &[value])?;

        debug!(
            operator = %format!("{operator:#x}"),
            from = %format!("{from:#x}"),
            to = %format!("{to:#x}"),
            %id,
            %value,
            "transfer single"
        );
        host.emit(Event::TransferSingle {
            operator,
            from,
            to,
            id,
            value,
        });

        acknowledge_single(host, operator, from, to, id, value, data)
    })
}

/// Moves `values[i]` of `ids[i]` from `from` to `to` on behalf of `operator`.
///
/// Duplicate ids are applied as independent, sequential moves. Empty arrays
/// are valid; a contract recipient is still asked to acknowledge them.
///
/// # Errors
///
/// Same as [`safe_transfer_from`], plus [`LedgerError::InvalidArrayLength`]
/// if `ids` and `values` differ in length. A failure at any index leaves
/// every balance untouched.
pub fn safe_batch_transfer_from(
    host: &mut Host,
    operator: Address,
    from: Address,
    to: Address,
    ids: &[TokenId],
    values: &[Amount],
    data: &[u8],
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_sender(from)?;
        ensure_receiver(to)?;
        ensure_authorized(&host.storage().ledger, operator, from)?;

        host.storage_mut().ledger.update(from, to, ids, values)?;

        debug!(
            operator = %format!("{operator:#x}"),
            from = %format!("{from:#x}"),
            to = %format!("{to:#x}"),
            count = ids.len(),
            "transfer batch"
        );
        host.emit(Event::TransferBatch {
            operator,
            from,
            to,
            ids: ids.to_vec(),
            values: values.to_vec(),
        });

        acknowledge_batch(host, operator, from, to, ids, values, data)
    })
}
