//! # Gemstone Facets
//!
//! The diamond's facets and its call router. Facets are deliberately thin:
//! each one decodes its calls, applies access control where the function
//! needs it, and hands off to the shared engines in `gemstone-ledger`.
//!
//! - **Erc1155Facet**: balances, approvals, safe transfers.
//! - **SupplyFacet**: owner-gated minting, owner-or-approved burning.
//! - **MetadataFacet**: token URIs.
//! - **LoupeFacet**: registry introspection and ERC-165.
//! - **DiamondCutFacet**: routing table changes (owner only).
//! - **OwnershipFacet**: ERC-173 owner query and transfer.
//!
//! [`Diamond`] deploys all of them, builds the initial routing table, and
//! routes calls by selector.

pub mod cut;
pub mod diamond;
pub mod erc1155;
pub mod loupe;
pub mod metadata;
pub mod supply;

pub use cut::{DiamondCutFacet, OwnershipFacet};
pub use diamond::Diamond;
pub use erc1155::Erc1155Facet;
pub use loupe::LoupeFacet;
pub use metadata::MetadataFacet;
pub use supply::SupplyFacet;

use gemstone_ledger::{Call, LedgerError};

/// The error a facet returns for a call it does not implement.
pub(crate) fn unsupported(call: &Call) -> LedgerError {
    LedgerError::FunctionNotFound {
        selector: call.selector(),
    }
}
