//! # Call Model
//!
//! What the router dispatches: one [`Call`] variant per entry point, each
//! bound to the 4-byte selector of its EVM signature, and the [`Output`] it
//! produces. Arguments are already decoded; there is no ABI codec here.

use serde::{Deserialize, Serialize};

use crate::registry::FacetCut;
use crate::types::{Address, Amount, Selector, TokenId};

/// Selectors of every routed function.
pub mod selectors {
    use crate::types::Selector;

    // ERC-1155
    /// `balanceOf(address,uint256)`
    pub const BALANCE_OF: Selector = Selector::from_u32(0x00fd_d58e);
    /// `balanceOfBatch(address[],uint256[])`
    pub const BALANCE_OF_BATCH: Selector = Selector::from_u32(0x4e12_73f4);
    /// `setApprovalForAll(address,bool)`
    pub const SET_APPROVAL_FOR_ALL: Selector = Selector::from_u32(0xa22c_b465);
    /// `isApprovedForAll(address,address)`
    pub const IS_APPROVED_FOR_ALL: Selector = Selector::from_u32(0xe985_e9c5);
    /// `safeTransferFrom(address,address,uint256,uint256,bytes)`
    pub const SAFE_TRANSFER_FROM: Selector = Selector::from_u32(0xf242_432a);
    /// `safeBatchTransferFrom(address,address,uint256[],uint256[],bytes)`
    pub const SAFE_BATCH_TRANSFER_FROM: Selector = Selector::from_u32(0x2eb2_c2d6);

    // Supply
    /// `mint(address,uint256,uint256,bytes)`
    pub const MINT: Selector = Selector::from_u32(0x7311_33e9);
    /// `mintBatch(address,uint256[],uint256[],bytes)`
    pub const MINT_BATCH: Selector = Selector::from_u32(0x1f7f_dffa);
    /// `burn(address,uint256,uint256)`
    pub const BURN: Selector = Selector::from_u32(0xf529_8aca);
    /// `burnBatch(address,uint256[],uint256[])`
    pub const BURN_BATCH: Selector = Selector::from_u32(0x6b20_c454);

    // Metadata
    /// `uri(uint256)`
    pub const URI: Selector = Selector::from_u32(0x0e89_341c);
    /// `setURI(string)`
    pub const SET_DEFAULT_URI: Selector = Selector::from_u32(0x02fe_5305);
    /// `setBaseURI(string)`
    pub const SET_BASE_URI: Selector = Selector::from_u32(0x55f8_04b3);
    /// `setTokenURI(uint256,string)`
    pub const SET_TOKEN_URI: Selector = Selector::from_u32(0x1620_94c4);

    // Loupe + ERC-165
    /// `facets()`
    pub const FACETS: Selector = Selector::from_u32(0x7a0e_d627);
    /// `facetFunctionSelectors(address)`
    pub const FACET_FUNCTION_SELECTORS: Selector = Selector::from_u32(0xadfc_a15e);
    /// `facetAddresses()`
    pub const FACET_ADDRESSES: Selector = Selector::from_u32(0x52ef_6b2c);
    /// `facetAddress(bytes4)`
    pub const FACET_ADDRESS: Selector = Selector::from_u32(0xcdff_acc6);
    /// `supportsInterface(bytes4)`
    pub const SUPPORTS_INTERFACE: Selector = Selector::from_u32(0x01ff_c9a7);

    // Cut + ERC-173
    /// `diamondCut((address,uint8,bytes4[])[],address,bytes)`
    pub const DIAMOND_CUT: Selector = Selector::from_u32(0x1f93_1c1c);
    /// `owner()`
    pub const OWNER: Selector = Selector::from_u32(0x8da5_cb5b);
    /// `transferOwnership(address)`
    pub const TRANSFER_OWNERSHIP: Selector = Selector::from_u32(0xf2fd_e38b);

    /// Every selector above.
    pub const ALL: [Selector; 22] = [
        BALANCE_OF,
        BALANCE_OF_BATCH,
        SET_APPROVAL_FOR_ALL,
        IS_APPROVED_FOR_ALL,
        SAFE_TRANSFER_FROM,
        SAFE_BATCH_TRANSFER_FROM,
        MINT,
        MINT_BATCH,
        BURN,
        BURN_BATCH,
        URI,
        SET_DEFAULT_URI,
        SET_BASE_URI,
        SET_TOKEN_URI,
        FACETS,
        FACET_FUNCTION_SELECTORS,
        FACET_ADDRESSES,
        FACET_ADDRESS,
        SUPPORTS_INTERFACE,
        DIAMOND_CUT,
        OWNER,
        TRANSFER_OWNERSHIP,
    ];
}

/// A decoded call to the diamond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Call {
    BalanceOf {
        account: Address,
        id: TokenId,
    },
    BalanceOfBatch {
        accounts: Vec<Address>,
        ids: Vec<TokenId>,
    },
    SetApprovalForAll {
        operator: Address,
        approved: bool,
    },
    IsApprovedForAll {
        account: Address,
        operator: Address,
    },
    SafeTransferFrom {
        from: Address,
        to: Address,
        id: TokenId,
        value: Amount,
        data: Vec<u8>,
    },
    SafeBatchTransferFrom {
        from: Address,
        to: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
        data: Vec<u8>,
    },
    Mint {
        to: Address,
        id: TokenId,
        value: Amount,
        data: Vec<u8>,
    },
    MintBatch {
        to: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
        data: Vec<u8>,
    },
    Burn {
        from: Address,
        id: TokenId,
        value: Amount,
    },
    BurnBatch {
        from: Address,
        ids: Vec<TokenId>,
        values: Vec<Amount>,
    },
    Uri {
        id: TokenId,
    },
    SetDefaultUri {
        uri: String,
    },
    SetBaseUri {
        uri: String,
    },
    SetTokenUri {
        id: TokenId,
        uri: String,
    },
    Facets,
    FacetFunctionSelectors {
        facet: Address,
    },
    FacetAddresses,
    FacetAddress {
        selector: Selector,
    },
    SupportsInterface {
        interface_id: Selector,
    },
    DiamondCut {
        cuts: Vec<FacetCut>,
    },
    Owner,
    TransferOwnership {
        new_owner: Address,
    },
}

impl Call {
    /// The selector the router looks up for this call.
    pub fn selector(&self) -> Selector {
        use selectors::*;
        match self {
            Call::BalanceOf { .. } => BALANCE_OF,
            Call::BalanceOfBatch { .. } => BALANCE_OF_BATCH,
            Call::SetApprovalForAll { .. } => SET_APPROVAL_FOR_ALL,
            Call::IsApprovedForAll { .. } => IS_APPROVED_FOR_ALL,
            Call::SafeTransferFrom { .. } => SAFE_TRANSFER_FROM,
            Call::SafeBatchTransferFrom { .. } => SAFE_BATCH_TRANSFER_FROM,
            Call::Mint { .. } => MINT,
            Call::MintBatch { .. } => MINT_BATCH,
            Call::Burn { .. } => BURN,
            Call::BurnBatch { .. } => BURN_BATCH,
            Call::Uri { .. } => URI,
            Call::SetDefaultUri { .. } => SET_DEFAULT_URI,
            Call::SetBaseUri { .. } => SET_BASE_URI,
            Call::SetTokenUri { .. } => SET_TOKEN_URI,
            Call::Facets => FACETS,
            Call::FacetFunctionSelectors { .. } => FACET_FUNCTION_SELECTORS,
            Call::FacetAddresses => FACET_ADDRESSES,
            Call::FacetAddress { .. } => FACET_ADDRESS,
            Call::SupportsInterface { .. } => SUPPORTS_INTERFACE,
            Call::DiamondCut { .. } => DIAMOND_CUT,
            Call::Owner => OWNER,
            Call::TransferOwnership { .. } => TRANSFER_OWNERSHIP,
        }
    }
}

/// The result of a routed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// State-changing calls return nothing.
    Empty,
    Bool(bool),
    Amount(Amount),
    Amounts(Vec<Amount>),
    Uri(String),
    Address(Address),
    /// `facetAddress`: `None` when the selector is not routed.
    FacetAddress(Option<Address>),
    Addresses(Vec<Address>),
    Selectors(Vec<Selector>),
    /// `facets`: `(selector, facet)` pairs.
    Pairs(Vec<(Selector, Address)>),
}
