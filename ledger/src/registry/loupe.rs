//! # Loupe: Registry Read Path
//!
//! Introspection over the routing table. Two of these queries ask the facet
//! itself which selectors it implements (its packed self-report) rather
//! than collecting them from the list:
//!
//! - [`facet_function_selectors`] trusts the self-report only if the list
//!   routes the reported first selector back to that facet. A stale or
//!   foreign address gets an empty answer.
//! - [`facets`] concatenates self-reports for every registered facet
//!   without that check.

use crate::host::Host;
use crate::types::{Address, Selector};

/// The facet `selector` routes to, if any.
pub fn facet_address(host: &Host, selector: Selector) -> Option<Address> {
    host.storage().diamond.facets.facet_address(selector)
}

/// Every registered facet, in list order.
pub fn facet_addresses(host: &Host) -> Vec<Address> {
    host.storage().diamond.facets.facet_addresses()
}

/// The selectors `facet` reports for itself, validated against the list.
///
/// Empty when `facet` has no facet code, reports no selectors, or the list
/// does not route its first reported selector to it.
pub fn facet_function_selectors(host: &Host, facet: Address) -> Vec<Selector> {
    let reported = self_reported(host, facet);
    match reported.first() {
        Some(first) if facet_address(host, *first) == Some(facet) => reported,
        _ => Vec::new(),
    }
}

/// `(selector, facet)` for every registered facet's self-reported
/// selectors. Facets in list order, selectors in reported order.
pub fn facets(host: &Host) -> Vec<(Selector, Address)> {
    facet_addresses(host)
        .into_iter()
        .flat_map(|facet| {
            self_reported(host, facet)
                .into_iter()
                .map(move |selector| (selector, facet))
        })
        .collect()
}

fn self_reported(host: &Host, facet: Address) -> Vec<Selector> {
    host.code_at(facet)
        .and_then(|code| code.as_facet().map(|f| f.selectors()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{Call, Output};
    use crate::error::LedgerError;
    use crate::host::Contract;
    use crate::registry::Facet;
    use std::sync::Arc;

    /// Reports a fixed packed byte string.
    struct Reporting(Vec<u8>);

    impl Contract for Reporting {
        fn as_facet(&self) -> Option<&dyn Facet> {
            Some(self)
        }
    }

    impl Facet for Reporting {
        fn packed_selectors(&self) -> Vec<u8> {
            self.0.clone()
        }

        fn execute(&self, _: &mut Host, _: Address, call: Call) -> Result<Output, LedgerError> {
            Err(LedgerError::FunctionNotFound {
                selector: call.selector(),
            })
        }
    }

    fn addr(n: u64) -> Address {
        Address::from_low_u64_be(n)
    }

    fn register(host: &mut Host, facet: Address, selectors: &[Selector]) {
        host.deploy(facet, Arc::new(Reporting(Selector::pack(selectors))));
        for s in selectors {
            host.storage_mut().diamond.facets.push_back(*s, facet).unwrap();
        }
    }

    #[test]
    fn enumerates_registered_facets() {
        let mut host = Host::new();
        let a = [Selector::from_u32(1), Selector::from_u32(2)];
        let b = [Selector::from_u32(3)];
        register(&mut host, addr(10), &a);
        register(&mut host, addr(20), &b);

        assert_eq!(facet_addresses(&host), vec![addr(10), addr(20)]);
        assert_eq!(facet_function_selectors(&host, addr(10)), a.to_vec());
        assert_eq!(facet_function_selectors(&host, addr(20)), b.to_vec());
        assert_eq!(
            facets(&host),
            vec![(a[0], addr(10)), (a[1], addr(10)), (b[0], addr(20))]
        );
        assert_eq!(facet_address(&host, b[0]), Some(addr(20)));
        assert_eq!(facet_address(&host, Selector::from_u32(99)), None);
    }

    #[test]
    fn foreign_facet_gets_empty_selectors() {
        let mut host = Host::new();
        register(&mut host, addr(10), &[Selector::from_u32(1)]);

        // Claims a selector the list routes elsewhere.
        host.deploy(
            addr(30),
            Arc::new(Reporting(Selector::pack(&[Selector::from_u32(1)]))),
        );
        assert!(facet_function_selectors(&host, addr(30)).is_empty());

        // No code at all.
        assert!(facet_function_selectors(&host, addr(40)).is_empty());
    }

    #[test]
    fn facet_reporting_nothing_gets_empty_selectors() {
        let mut host = Host::new();
        host.deploy(addr(10), Arc::new(Reporting(vec![0xab, 0xcd])));
        host.storage_mut()
            .diamond
            .facets
            .push_back(Selector::from_u32(1), addr(10))
            .unwrap();
        assert!(facet_function_selectors(&host, addr(10)).is_empty());
        assert!(facets(&host).is_empty());
    }

    #[test]
    fn pairs_are_not_revalidated() {
        let mut host = Host::new();
        // Registered under one selector, reports two (one unregistered).
        host.deploy(
            addr(10),
            Arc::new(Reporting(Selector::pack(&[
                Selector::from_u32(1),
                Selector::from_u32(2),
            ]))),
        );
        host.storage_mut()
            .diamond
            .facets
            .push_back(Selector::from_u32(1), addr(10))
            .unwrap();

        assert_eq!(facets(&host).len(), 2);
        assert_eq!(facet_function_selectors(&host, addr(10)).len(), 2);
    }
}
