//! # Ledger Store
//!
//! The single source of truth for balances and operator approvals. The
//! layout's methods are plain accessors plus checked debit/credit; the
//! business rules (who may move what, when to call the recipient) live in
//! `transfer.rs` and `supply.rs`.
//!
//! Zero balances and revoked approvals are pruned, so "never touched" and
//! "touched but back to zero" are the same storage state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LEDGER_NAMESPACE;
use crate::error::LedgerError;
use crate::event::Event;
use crate::host::Host;
use crate::storage::Namespaced;
use crate::types::{Address, Amount, TokenId};

/// Balance and approval maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLayout {
    /// `id -> account -> balance`.
    balances: HashMap<TokenId, HashMap<Address, Amount>>,
    /// `owner -> operator -> approved`. Only `true` entries are stored.
    operator_approvals: HashMap<Address, HashMap<Address, bool>>,
}

impl Namespaced for LedgerLayout {
    const NAMESPACE: &'static str = LEDGER_NAMESPACE;
}

impl LedgerLayout {
    /// Balance of `account` for token `id`. Zero for untouched pairs.
    pub fn balance_of(&self, account: Address, id: TokenId) -> Amount {
        self.balances
            .get(&id)
            .and_then(|holders| holders.get(&account))
            .copied()
            .unwrap_or_default()
    }

    /// Pairwise balances for `(accounts[i], ids[i])`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidArrayLength`] with `(ids.len(), accounts.len())`
    /// if the lengths differ.
    pub fn balance_of_batch(
        &self,
        accounts: &[Address],
        ids: &[TokenId],
    ) -> Result<Vec<Amount>, LedgerError> {
        if accounts.len() != ids.len() {
            return Err(LedgerError::InvalidArrayLength {
                left: ids.len(),
                right: accounts.len(),
            });
        }
        Ok(accounts
            .iter()
            .zip(ids)
            .map(|(account, id)| self.balance_of(*account, *id))
            .collect())
    }

    /// Whether `operator` may move all of `owner`'s tokens.
    pub fn is_approved_for_all(&self, owner: Address, operator: Address) -> bool {
        self.operator_approvals
            .get(&owner)
            .and_then(|ops| ops.get(&operator))
            .copied()
            .unwrap_or(false)
    }

    /// Overwrites the approval flag. No validation, no event.
    pub fn set_approval(&mut self, owner: Address, operator: Address, approved: bool) {
        if approved {
            self.operator_approvals
                .entry(owner)
                .or_default()
                .insert(operator, true);
        } else if let Some(ops) = self.operator_approvals.get_mut(&owner) {
            ops.remove(&operator);
            if ops.is_empty() {
                self.operator_approvals.remove(&owner);
            }
        }
    }

    /// Adds `value` to `account`'s balance of `id`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::ArithmeticOverflow`] if the balance would exceed
    /// `U256::MAX`.
    pub fn credit(
        &mut self,
        account: Address,
        id: TokenId,
        value: Amount,
    ) -> Result<(), LedgerError> {
        let updated = self
            .balance_of(account, id)
            .checked_add(value)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.store(account, id, updated);
        Ok(())
    }

    /// Subtracts `value` from `account`'s balance of `id`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InsufficientBalance`] with the current balance, the
    /// amount needed, and the id if the balance is too low.
    pub fn debit(
        &mut self,
        account: Address,
        id: TokenId,
        value: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.balance_of(account, id);
        let updated = balance
            .checked_sub(value)
            .ok_or(LedgerError::InsufficientBalance {
                sender: account,
                balance,
                needed: value,
                token_id: id,
            })?;
        self.store(account, id, updated);
        Ok(())
    }

    /// Moves `values[i]` of `ids[i]` from `from` to `to`, index by index.
    ///
    /// A null `from` skips the debit (mint), a null `to` skips the credit
    /// (burn). Each index is applied against the balance left by the
    /// previous one, so duplicate ids accumulate. Partial application on
    /// error is undone by the enclosing atomic unit, not here.
    pub fn update(
        &mut self,
        from: Address,
        to: Address,
        ids: &[TokenId],
        values: &[Amount],
    ) -> Result<(), LedgerError> {
        if ids.len() != values.len() {
            return Err(LedgerError::InvalidArrayLength {
                left: ids.len(),
                right: values.len(),
            });
        }

        for (id, value) in ids.iter().zip(values) {
            if !from.is_zero() {
                self.debit(from, *id, *value)?;
            }
            if !to.is_zero() {
                self.credit(to, *id, *value)?;
            }
        }
        Ok(())
    }

    /// Number of distinct token ids with at least one non-zero balance.
    pub fn token_count(&self) -> usize {
        self.balances.len()
    }

    fn store(&mut self, account: Address, id: TokenId, amount: Amount) {
        if amount.is_zero() {
            if let Some(holders) = self.balances.get_mut(&id) {
                holders.remove(&account);
                if holders.is_empty() {
                    self.balances.remove(&id);
                }
            }
        } else {
            self.balances.entry(id).or_default().insert(account, amount);
        }
    }
}

// ---------------------------------------------------------------------------
// Host-level operations
// ---------------------------------------------------------------------------

/// `balanceOf(account, id)`.
pub fn balance_of(host: &Host, account: Address, id: TokenId) -> Amount {
    host.storage().ledger.balance_of(account, id)
}

/// `balanceOfBatch(accounts, ids)`.
pub fn balance_of_batch(
    host: &Host,
    accounts: &[Address],
    ids: &[TokenId],
) -> Result<Vec<Amount>, LedgerError> {
    host.storage().ledger.balance_of_batch(accounts, ids)
}

/// `isApprovedForAll(owner, operator)`.
pub fn is_approved_for_all(host: &Host, owner: Address, operator: Address) -> bool {
    host.storage().ledger.is_approved_for_all(owner, operator)
}

/// `setApprovalForAll(operator, approved)` called by `owner`.
///
/// Overwrites the flag unconditionally and emits `ApprovalForAll`, even when
/// nothing changed. Self-approval is allowed and means nothing extra.
///
/// # Errors
///
/// [`LedgerError::InvalidOperator`] if `operator` is the null address.
pub fn set_approval_for_all(
    host: &mut Host,
    owner: Address,
    operator: Address,
    approved: bool,
) -> Result<(), LedgerError> {
    if operator.is_zero() {
        return Err(LedgerError::InvalidOperator { operator });
    }

    host.storage_mut()
        .ledger
        .set_approval(owner, operator, approved);
    debug!(
        owner = %format!("{owner:#x}"),
        operator = %format!("{operator:#x}"),
        approved,
        "approval for all updated"
    );
    host.emit(Event::ApprovalForAll {
        account: owner,
        operator,
        approved,
    });
    Ok(())
}
