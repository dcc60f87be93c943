//! # Ledger Errors
//!
//! One enum for every way a call can fail. A failure aborts the whole unit
//! of work (see [`Host::atomic`](crate::host::Host::atomic)), so each variant
//! carries enough structure for the caller to tell exactly what went wrong.
//!
//! External contracts fail with the same type. A receiver that wants to
//! explain itself returns [`LedgerError::Revert`] (or any other variant);
//! one that fails silently returns [`LedgerError::EmptyRevert`], which the
//! acknowledgment protocol turns into [`LedgerError::InvalidReceiver`].

use thiserror::Error;

use crate::types::{Address, Amount, Selector, TokenId};

/// Errors raised by the ledger, the registry, the router, and by external
/// contracts called during a unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // -- ERC-1155 taxonomy ---------------------------------------------------
    /// The source address is null where a real source is required.
    #[error("invalid sender: {sender:#x}")]
    InvalidSender { sender: Address },

    /// The destination is null, or a contract that rejected the transfer.
    #[error("invalid receiver: {receiver:#x}")]
    InvalidReceiver { receiver: Address },

    /// The debit exceeds the current balance.
    #[error(
        "insufficient balance: {sender:#x} has {balance} of token {token_id}, needs {needed}"
    )]
    InsufficientBalance {
        sender: Address,
        balance: Amount,
        needed: Amount,
        token_id: TokenId,
    },

    /// The operator is neither the owner nor approved by them.
    #[error("missing approval: {operator:#x} is not approved for {owner:#x}")]
    MissingApprovalForAll { operator: Address, owner: Address },

    /// Paired array arguments differ in length. `left` is the ids array;
    /// `right` is the values array, or the accounts array for
    /// `balanceOfBatch`.
    #[error("invalid array length: {left} ids against {right}")]
    InvalidArrayLength {
        left: usize,
        right: usize,
    },

    /// The approval target is null.
    #[error("invalid operator: {operator:#x}")]
    InvalidOperator { operator: Address },

    /// A balance credit overflowed 256 bits.
    #[error("arithmetic overflow on balance update")]
    ArithmeticOverflow,

    // -- Diamond -------------------------------------------------------------
    /// No facet is registered for the selector.
    #[error("function does not exist: {selector}")]
    FunctionNotFound { selector: Selector },

    /// The caller is not the diamond's owner.
    #[error("not contract owner: {sender:#x} (owner is {owner:#x})")]
    NotContractOwner { sender: Address, owner: Address },

    /// A cut entry listed no selectors.
    #[error("no selectors in facet cut for {facet:#x}")]
    NoSelectorsInFacet { facet: Address },

    /// A cut tried to route selectors to an address with no code.
    #[error("facet {facet:#x} has no code")]
    FacetHasNoCode { facet: Address },

    /// `Remove` carried a facet address other than zero.
    #[error("remove facet address must be zero, got {facet:#x}")]
    RemoveFacetAddressMustBeZero { facet: Address },

    /// `Add` of a selector that is already routed.
    #[error("selector {selector} already registered to {facet:#x}")]
    SelectorAlreadyRegistered { selector: Selector, facet: Address },

    /// `Replace`/`Remove` of a selector that is not routed.
    #[error("selector {selector} is not registered")]
    SelectorNotRegistered { selector: Selector },

    /// `Replace` with the facet that already handles the selector.
    #[error("selector {selector} already routes to {facet:#x}")]
    ReplaceWithSameFacet { selector: Selector, facet: Address },

    // -- External failures ---------------------------------------------------
    /// An external contract failed with a descriptive reason.
    #[error("reverted: {0}")]
    Revert(String),

    /// An external contract failed without any reason payload.
    #[error("reverted without reason")]
    EmptyRevert,

    /// Nested units of work exceeded the host's depth limit.
    #[error("call depth {depth} exceeds limit")]
    CallDepthExceeded { depth: usize },
}
