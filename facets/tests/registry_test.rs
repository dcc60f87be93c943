//! Integration tests for the facet registry: loupe queries, diamond cuts,
//! ERC-165 and ERC-173, all driven through the router.

mod common;

use common::*;
use gemstone_facets::{
    Diamond, DiamondCutFacet, Erc1155Facet, LoupeFacet, MetadataFacet, OwnershipFacet,
    SupplyFacet,
};
use gemstone_ledger::call::selectors;
use gemstone_ledger::config::{ERC1155_INTERFACE_ID, ERC1155_RECEIVER_INTERFACE_ID};
use gemstone_ledger::{
    Address, Call, Contract, Event, Facet, FacetCut, FacetCutAction, Host, LedgerError, Output,
    Selector,
};

/// Answers `uri` with a constant.
struct FrozenUri;

impl Contract for FrozenUri {
    fn as_facet(&self) -> Option<&dyn Facet> {
        Some(self)
    }
}

impl Facet for FrozenUri {
    fn packed_selectors(&self) -> Vec<u8> {
        Selector::pack(&[selectors::URI])
    }

    fn execute(&self, _: &mut Host, _: Address, call: Call) -> Result<Output, LedgerError> {
        match call {
            Call::Uri { .. } => Ok(Output::Uri("frozen".into())),
            other => Err(LedgerError::FunctionNotFound {
                selector: other.selector(),
            }),
        }
    }
}

fn frozen() -> Address {
    addr(0xf402e)
}

fn cut(env: &mut Env, sender: Address, cuts: Vec<FacetCut>) -> Result<Output, LedgerError> {
    env.call(sender, Call::DiamondCut { cuts })
}

fn facet_addresses(env: &mut Env) -> Vec<Address> {
    match env.call(carol(), Call::FacetAddresses).unwrap() {
        Output::Addresses(list) => list,
        other => panic!("unexpected output {other:?}"),
    }
}

fn facet_selectors(env: &mut Env, facet: Address) -> Vec<Selector> {
    match env.call(carol(), Call::FacetFunctionSelectors { facet }).unwrap() {
        Output::Selectors(list) => list,
        other => panic!("unexpected output {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Loupe
// ---------------------------------------------------------------------------

#[test]
fn facet_addresses_in_registration_order() {
    let mut env = Env::new();
    let expected: Vec<Address> = ["erc1155", "supply", "metadata", "loupe", "cut", "ownership"]
        .into_iter()
        .map(Diamond::facet_address)
        .collect();
    assert_eq!(facet_addresses(&mut env), expected);
}

#[test]
fn facet_function_selectors_round_trip() {
    let mut env = Env::new();
    let cases: [(&str, &[Selector]); 6] = [
        ("erc1155", &Erc1155Facet::SELECTORS),
        ("supply", &SupplyFacet::SELECTORS),
        ("metadata", &MetadataFacet::SELECTORS),
        ("loupe", &LoupeFacet::SELECTORS),
        ("cut", &DiamondCutFacet::SELECTORS),
        ("ownership", &OwnershipFacet::SELECTORS),
    ];

    for (name, expected) in cases {
        let facet = Diamond::facet_address(name);
        let reported = facet_selectors(&mut env, facet);
        assert_eq!(reported, expected.to_vec(), "facet {name}");
        for selector in reported {
            let routed = env.call(carol(), Call::FacetAddress { selector }).unwrap();
            assert_eq!(routed, Output::FacetAddress(Some(facet)));
        }
    }
}

#[test]
fn unknown_addresses_report_nothing() {
    let mut env = Env::new();
    assert!(facet_selectors(&mut env, alice()).is_empty());
    let diamond = env.diamond.address();
    assert!(facet_selectors(&mut env, diamond).is_empty());
    assert_eq!(
        env.call(
            carol(),
            Call::FacetAddress {
                selector: Selector::from_u32(0x1234_5678)
            }
        )
        .unwrap(),
        Output::FacetAddress(None)
    );
}

#[test]
fn facets_pairs_cover_every_selector() {
    let mut env = Env::new();
    let Output::Pairs(pairs) = env.call(carol(), Call::Facets).unwrap() else {
        panic!("expected pairs");
    };
    assert_eq!(pairs.len(), selectors::ALL.len());
    assert_eq!(
        pairs[0],
        (selectors::BALANCE_OF, Diamond::facet_address("erc1155"))
    );
}

// ---------------------------------------------------------------------------
// Cuts
// ---------------------------------------------------------------------------

#[test]
fn only_owner_cuts() {
    let mut env = Env::new();
    env.install(frozen(), FrozenUri);

    let err = cut(
        &mut env,
        alice(),
        vec![FacetCut::replace(frozen(), vec![selectors::URI])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        LedgerError::NotContractOwner {
            sender: alice(),
            owner: owner(),
        }
    );
}

#[test]
fn replace_reroutes_in_place() {
    let mut env = Env::new();
    env.install(frozen(), FrozenUri);

    cut(
        &mut env,
        owner(),
        vec![FacetCut::replace(frozen(), vec![selectors::URI])],
    )
    .unwrap();

    assert_eq!(
        env.call(carol(), Call::Uri { id: id(1) }).unwrap(),
        Output::Uri("frozen".into())
    );

    // The replacement takes the position of the selector it now owns.
    let list = facet_addresses(&mut env);
    assert_eq!(list.len(), 7);
    assert_eq!(list[2], frozen());
    assert_eq!(list[3], Diamond::facet_address("metadata"));

    assert!(matches!(
        env.host.events().last(),
        Some(Event::DiamondCut { cuts }) if cuts.len() == 1
    ));
}

#[test]
fn stale_self_report_is_discarded() {
    let mut env = Env::new();
    env.install(frozen(), FrozenUri);
    cut(
        &mut env,
        owner(),
        vec![FacetCut::replace(frozen(), vec![selectors::URI])],
    )
    .unwrap();

    // MetadataFacet still claims `uri` first, which no longer routes to it.
    let metadata = Diamond::facet_address("metadata");
    assert!(facet_selectors(&mut env, metadata).is_empty());
    assert_eq!(facet_selectors(&mut env, frozen()), vec![selectors::URI]);

    // `facets` does not validate, so `uri` appears under both.
    let Output::Pairs(pairs) = env.call(carol(), Call::Facets).unwrap() else {
        panic!("expected pairs");
    };
    assert!(pairs.contains(&(selectors::URI, metadata)));
    assert!(pairs.contains(&(selectors::URI, frozen())));
}

#[test]
fn add_rejects_registered_selector() {
    let mut env = Env::new();
    env.install(frozen(), FrozenUri);
    let err = cut(
        &mut env,
        owner(),
        vec![FacetCut::add(frozen(), vec![selectors::URI])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        LedgerError::SelectorAlreadyRegistered {
            selector: selectors::URI,
            facet: Diamond::facet_address("metadata"),
        }
    );
}

#[test]
fn cut_to_codeless_address_fails() {
    let mut env = Env::new();
    let err = cut(
        &mut env,
        owner(),
        vec![FacetCut::add(bob(), vec![Selector::from_u32(0x1234_5678)])],
    )
    .unwrap_err();
    assert_eq!(err, LedgerError::FacetHasNoCode { facet: bob() });
}

#[test]
fn failed_cut_changes_nothing() {
    let mut env = Env::new();
    env.install(frozen(), FrozenUri);
    let before = env.host.storage().clone();

    let err = cut(
        &mut env,
        owner(),
        vec![
            FacetCut::replace(frozen(), vec![selectors::URI]),
            FacetCut::remove(vec![Selector::from_u32(0x1234_5678)]),
        ],
    )
    .unwrap_err();
    assert!(matches!(err, LedgerError::SelectorNotRegistered { .. }));
    assert_eq!(env.host.storage(), &before);
    assert!(env.host.events().is_empty());
}

#[test]
fn removing_a_facet_drops_it_from_enumeration() {
    let mut env = Env::new();
    cut(
        &mut env,
        owner(),
        vec![FacetCut::remove(SupplyFacet::SELECTORS.to_vec())],
    )
    .unwrap();

    let list = facet_addresses(&mut env);
    assert_eq!(list.len(), 5);
    assert!(!list.contains(&Diamond::facet_address("supply")));

    let err = env
        .call(
            owner(),
            Call::Mint {
                to: alice(),
                id: id(1),
                value: amt(1),
                data: Vec::new(),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        LedgerError::FunctionNotFound {
            selector: selectors::MINT
        }
    );
}

#[test]
fn remove_naming_its_facet_is_rejected() {
    let mut env = Env::new();
    let supply = Diamond::facet_address("supply");
    let before = env.host.storage().clone();

    let err = cut(
        &mut env,
        owner(),
        vec![FacetCut {
            facet_address: supply,
            action: FacetCutAction::Remove,
            function_selectors: vec![selectors::MINT],
        }],
    )
    .unwrap_err();
    assert_eq!(
        err,
        LedgerError::RemoveFacetAddressMustBeZero { facet: supply }
    );
    assert_eq!(env.host.storage(), &before);
    env.mint(alice(), id(1), amt(1));
}

// ---------------------------------------------------------------------------
// ERC-165 / ERC-173
// ---------------------------------------------------------------------------

#[test]
fn supports_standard_interfaces() {
    let mut env = Env::new();
    let supported = |env: &mut Env, interface_id| {
        env.call(carol(), Call::SupportsInterface { interface_id })
            .unwrap()
    };
    assert_eq!(supported(&mut env, ERC1155_INTERFACE_ID), Output::Bool(true));
    assert_eq!(
        supported(&mut env, ERC1155_RECEIVER_INTERFACE_ID),
        Output::Bool(false)
    );
    assert_eq!(
        supported(&mut env, Selector::from_u32(0xffff_ffff)),
        Output::Bool(false)
    );
}

#[test]
fn ownership_transfer_moves_privileges() {
    let mut env = Env::new();
    env.call(owner(), Call::TransferOwnership { new_owner: alice() })
        .unwrap();

    assert_eq!(
        env.call(carol(), Call::Owner).unwrap(),
        Output::Address(alice())
    );
    assert!(matches!(
        env.host.events().last(),
        Some(Event::OwnershipTransferred { previous_owner, new_owner })
            if *previous_owner == owner() && *new_owner == alice()
    ));

    let err = env
        .call(owner(), Call::TransferOwnership { new_owner: bob() })
        .unwrap_err();
    assert!(matches!(err, LedgerError::NotContractOwner { .. }));

    env.call(
        alice(),
        Call::Mint {
            to: alice(),
            id: id(1),
            value: amt(1),
            data: Vec::new(),
        },
    )
    .unwrap();
    assert_eq!(env.balance(alice(), id(1)), amt(1));
}

#[test]
fn renounced_ownership_locks_cuts() {
    let mut env = Env::new();
    env.call(owner(), Call::TransferOwnership { new_owner: null() })
        .unwrap();

    let err = cut(
        &mut env,
        owner(),
        vec![FacetCut::remove(vec![selectors::URI])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        LedgerError::NotContractOwner {
            sender: owner(),
            owner: null(),
        }
    );
}
