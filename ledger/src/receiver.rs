//! # Receiver Acknowledgment
//!
//! A transfer or mint to an address with code is only final once the
//! recipient says so. The recipient's hook runs after balances have moved
//! (effects before interactions) and gets `&mut Host`, so it may re-enter the
//! ledger and will see post-transfer state.
//!
//! Outcome mapping, identical for the single and batch hooks except for the
//! expected magic value:
//!
//! | hook outcome                  | result                       |
//! |-------------------------------|------------------------------|
//! | returns the magic value       | accepted                     |
//! | returns anything else         | `InvalidReceiver(to)`        |
//! | fails with `EmptyRevert`      | `InvalidReceiver(to)`        |
//! | fails with any other error    | that error, unchanged        |
//! | code without the hooks        | `InvalidReceiver(to)`        |
//! | no code at all                | accepted, hook never called  |

use tracing::debug;

use crate::config::{BATCH_RECEIVED_MAGIC, SINGLE_RECEIVED_MAGIC};
use crate::error::LedgerError;
use crate::host::Host;
use crate::types::{Address, Amount, Selector, TokenId};

/// Hooks a contract implements to accept ERC-1155 tokens.
pub trait TokenReceiver {
    /// Called after a single transfer or mint credited this contract.
    /// Must return [`SINGLE_RECEIVED_MAGIC`] to accept.
    fn on_erc1155_received(
        &self,
        host: &mut Host,
        operator: Address,
        from: Address,
        id: TokenId,
        value: Amount,
        data: &[u8],
    ) -> Result<Selector, LedgerError>;

    /// Called after a batch transfer or mint credited this contract.
    /// Must return [`BATCH_RECEIVED_MAGIC`] to accept.
    fn on_erc1155_batch_received(
        &self,
        host: &mut Host,
        operator: Address,
        from: Address,
        ids: &[TokenId],
        values: &[Amount],
        data: &[u8],
    ) -> Result<Selector, LedgerError>;
}

/// Runs the single acknowledgment hook on `to` if it has code.
pub fn acknowledge_single(
    host: &mut Host,
    operator: Address,
    from: Address,
    to: Address,
    id: TokenId,
    value: Amount,
    data: &[u8],
) -> Result<(), LedgerError> {
    let Some(code) = host.code_at(to) else {
        return Ok(());
    };
    let outcome = match code.as_receiver() {
        Some(receiver) => receiver.on_erc1155_received(host, operator, from, id, value, data),
        None => Err(LedgerError::EmptyRevert),
    };
    settle(to, outcome, SINGLE_RECEIVED_MAGIC)
}

/// Runs the batch acknowledgment hook on `to` if it has code. Fires even for
/// empty batches.
pub fn acknowledge_batch(
    host: &mut Host,
    operator: Address,
    from: Address,
    to: Address,
    ids: &[TokenId],
    values: &[Amount],
    data: &[u8],
) -> Result<(), LedgerError> {
    let Some(code) = host.code_at(to) else {
        return Ok(());
    };
    let outcome = match code.as_receiver() {
        Some(receiver) => {
            receiver.on_erc1155_batch_received(host, operator, from, ids, values, data)
        }
        None => Err(LedgerError::EmptyRevert),
    };
    settle(to, outcome, BATCH_RECEIVED_MAGIC)
}

fn settle(
    to: Address,
    outcome: Result<Selector, LedgerError>,
    expected: Selector,
) -> Result<(), LedgerError> {
    match outcome {
        Ok(returned) if returned == expected => Ok(()),
        Ok(returned) => {
            debug!(receiver = %format!("{to:#x}"), %returned, %expected, "receiver returned wrong magic value");
            Err(LedgerError::InvalidReceiver { receiver: to })
        }
        Err(LedgerError::EmptyRevert) => {
            debug!(receiver = %format!("{to:#x}"), "receiver reverted without reason");
            Err(LedgerError::InvalidReceiver { receiver: to })
        }
        Err(e) => Err(e),
    }
}
