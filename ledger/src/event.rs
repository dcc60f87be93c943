//! # Events
//!
//! Notifications emitted by state-changing operations. They are appended to
//! the host's log in emission order and discarded together with the state
//! changes of a failed unit of work. Observers rely on that order: mutation
//! events always precede the receiver hook that follows them.

use serde::{Deserialize, Serialize};

use crate::registry::FacetCut;
use crate::types::{Address, Amount, TokenId};

/// A ledger or diamond notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A single-id transfer, mint (`from` null) or burn (`to` null).
    TransferSingle {
        operator: Address,
        from: Address,
        to: Address,
        id: TokenId,
        value: Amount,
    },
    /// A batch transfer, mint or burn.
    TransferBatch {
        operator: Address,
        from: Address,
        to: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
    },
    /// `operator` was granted or revoked full control over `account`'s tokens.
    ApprovalForAll {
        account: Address,
        operator: Address,
        approved: bool,
    },
    /// The URI of token `id` changed to `value`.
    Uri { value: String, id: TokenId },
    /// The selector routing table changed.
    DiamondCut { cuts: Vec<FacetCut> },
    /// Contract ownership moved (ERC-173).
    OwnershipTransferred {
        previous_owner: Address,
        new_owner: Address,
    },
}
