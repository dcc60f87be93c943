//! # Mint/Burn Engine
//!
//! Supply-changing operations. They share validation, the checked ledger
//! update, and the acknowledgment protocol with the transfer engine.
//!
//! ## Authorization
//!
//! - `mint`/`mint_batch` perform no authorization. Whoever exposes them is
//!   responsible for gating (the supply facet checks contract ownership).
//! - `burn`/`burn_batch` are the unauthenticated primitives for privileged
//!   callers.
//! - `burn_authorized`/`burn_batch_authorized` check that the operator is
//!   the owner or approved by them, then delegate to the primitives.
//!
//! Burns never call a receiver hook: tokens go to the null address, and the
//! null address has no code.

use tracing::debug;

use super::{ensure_authorized, ensure_receiver, ensure_sender};
use crate::error::LedgerError;
use crate::event::Event;
use crate::host::Host;
use crate::receiver::{acknowledge_batch, acknowledge_single};
use crate::types::{Address, Amount, TokenId};

/// Creates `value` of token `id` for `to`.
///
/// # Errors
///
/// - [`LedgerError::InvalidReceiver`] if `to` is null or rejects the tokens.
/// - [`LedgerError::ArithmeticOverflow`] if the balance would overflow.
pub fn mint(
    host: &mut Host,
    operator: Address,
    to: Address,
    id: TokenId,
    value: Amount,
    data: &[u8],
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_receiver(to)?;

        let from = Address::zero();
        host.storage_mut()
            .ledger
            .update(from, to, &[id], &[value])?;

        debug!(to = %format!("{to:#x}"), %id, %value, "mint");
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

/// Creates `values[i]` of `ids[i]` for `to`.
///
/// # Errors
///
/// Same as [`mint`], plus [`LedgerError::InvalidArrayLength`].
pub fn mint_batch(
    host: &mut Host,
    operator: Address,
    to: Address,
    ids: &[TokenId],
    values: &[Amount],
    data: &[u8],
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_receiver(to)?;

        let from = Address::zero();
        host.storage_mut().ledger.update(from, to, ids, values)?;

        debug!(to = %format!("{to:#x}"), count = ids.len(), "mint batch");
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

/// Destroys `value` of token `id` held by `from`. No authorization.
///
/// # Errors
///
/// - [`LedgerError::InvalidSender`] if `from` is null.
/// - [`LedgerError::InsufficientBalance`] if `from` holds less than `value`.
pub fn burn(
    host: &mut Host,
    operator: Address,
    from: Address,
    id: TokenId,
    value: Amount,
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_sender(from)?;

        let to = Address::zero();
        host.storage_mut()
            .ledger
            .update(from, to, &[id], &[value])?;

        debug!(from = %format!("{from:#x}"), %id, %value, "burn");
        host.emit(Event::TransferSingle {
            operator,
            from,
            to,
            id,
            value,
        });
        Ok(())
    })
}

/// Destroys `values[i]` of `ids[i]` held by `from`. No authorization.
///
/// # Errors
///
/// Same as [`burn`], plus [`LedgerError::InvalidArrayLength`].
pub fn burn_batch(
    host: &mut Host,
    operator: Address,
    from: Address,
    ids: &[TokenId],
    values: &[Amount],
) -> Result<(), LedgerError> {
    host.atomic(|host| {
        ensure_sender(from)?;

        let to = Address::zero();
        host.storage_mut().ledger.update(from, to, ids, values)?;

        debug!(from = %format!("{from:#x}"), count = ids.len(), "burn batch");
        host.emit(Event::TransferBatch {
            operator,
            from,
            to,
            ids: ids.to_vec(),
            values: values.to_vec(),
        });
        Ok(())
    })
}

/// [`burn`] for callers that must own the tokens or be approved.
///
/// # Errors
///
/// [`LedgerError::MissingApprovalForAll`] before anything else, then the
/// errors of [`burn`].
pub fn burn_authorized(
    host: &mut Host,
    operator: Address,
    from: Address,
    id: TokenId,
    value: Amount,
) -> Result<(), LedgerError> {
    ensure_authorized(&host.storage().ledger, operator, from)?;
    burn(host, operator, from, id, value)
}

/// [`burn_batch`] for callers that must own the tokens or be approved.
pub fn burn_batch_authorized(
    host: &mut Host,
    operator: Address,
    from: Address,
    ids: &[TokenId],
    values: &[Amount],
) -> Result<(), LedgerError> {
    ensure_authorized(&host.storage().ledger, operator, from)?;
    burn_batch(host, operator, from, ids, values)
}
