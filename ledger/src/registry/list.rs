//! # Facet List
//!
//! An intrusive doubly-linked list over selectors, stored as an arena:
//! `selector -> { facet, prev selector, next selector }` plus list-level
//! metadata (facet count, selector count, first and last selector). Links
//! are selector keys, not pointers, so the whole thing is a plain
//! serializable map.
//!
//! Insertion is always at the tail, so list order is registration order.
//! Removal unlinks in O(1). Replacing a selector's facet rewrites the node
//! in place and keeps its position.
//!
//! The facet count is derived from a per-facet selector counter: a facet is
//! counted while it has at least one selector in the list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::types::{Address, Selector};

/// One selector's entry in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetNode {
    /// The facet the selector routes to.
    pub facet_address: Address,
    /// The selector registered just before this one.
    pub prev_selector: Option<Selector>,
    /// The selector registered just after this one.
    pub next_selector: Option<Selector>,
}

/// Selector routing table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetList {
    facet_count: usize,
    selector_count: usize,
    first_selector: Option<Selector>,
    last_selector: Option<Selector>,
    nodes: HashMap<Selector, FacetNode>,
    selectors_per_facet: HashMap<Address, usize>,
}

impl FacetList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct facets with at least one selector.
    pub fn facet_count(&self) -> usize {
        self.facet_count
    }

    /// Number of registered selectors.
    pub fn selector_count(&self) -> usize {
        self.selector_count
    }

    /// Head of the list.
    pub fn first_selector(&self) -> Option<Selector> {
        self.first_selector
    }

    /// Tail of the list.
    pub fn last_selector(&self) -> Option<Selector> {
        self.last_selector
    }

    /// The node of `selector`, if registered.
    pub fn node(&self, selector: Selector) -> Option<&FacetNode> {
        self.nodes.get(&selector)
    }

    /// The facet `selector` routes to, if any.
    pub fn facet_address(&self, selector: Selector) -> Option<Address> {
        self.nodes.get(&selector).map(|node| node.facet_address)
    }

    /// Number of selectors currently routed to `facet`.
    pub fn selectors_of(&self, facet: Address) -> usize {
        self.selectors_per_facet.get(&facet).copied().unwrap_or(0)
    }

    /// Walks the list from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.first_selector,
            remaining: self.selector_count,
        }
    }

    /// Distinct facets in the order their first selector appears.
    ///
    /// Starts at the head and takes exactly `facet_count` steps; each step
    /// advances to the next node owned by a facet not listed yet.
    pub fn facet_addresses(&self) -> Vec<Address> {
        let mut facets: Vec<Address> = Vec::with_capacity(self.facet_count);
        let mut cursor = self.first_selector;

        for _ in 0..self.facet_count {
            let mut found = None;
            while let Some(selector) = cursor {
                let Some(node) = self.nodes.get(&selector) else {
                    break;
                };
                cursor = node.next_selector;
                if !facets.contains(&node.facet_address) {
                    found = Some(node.facet_address);
                    break;
                }
            }
            match found {
                Some(facet) => facets.push(facet),
                None => break,
            }
        }
        facets
    }

    /// Appends `selector -> facet` at the tail.
    ///
    /// # Errors
    ///
    /// [`LedgerError::SelectorAlreadyRegistered`] if the selector is routed.
    pub fn push_back(&mut self, selector: Selector, facet: Address) -> Result<(), LedgerError> {
        if let Some(existing) = self.nodes.get(&selector) {
            return Err(LedgerError::SelectorAlreadyRegistered {
                selector,
                facet: existing.facet_address,
            });
        }

        let prev = self.last_selector;
        if let Some(tail) = prev.and_then(|s| self.nodes.get_mut(&s)) {
            tail.next_selector = Some(selector);
        }
        self.nodes.insert(
            selector,
            FacetNode {
                facet_address: facet,
                prev_selector: prev,
                next_selector: None,
            },
        );
        if self.first_selector.is_none() {
            self.first_selector = Some(selector);
        }
        self.last_selector = Some(selector);
        self.selector_count += 1;
        self.retain_facet(facet);
        Ok(())
    }

    /// Routes a registered `selector` to `facet`, keeping its position.
    /// Returns the facet it routed to before.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::SelectorNotRegistered`] if the selector is unknown.
    /// - [`LedgerError::ReplaceWithSameFacet`] if it already routes to `facet`.
    pub fn reassign(&mut self, selector: Selector, facet: Address) -> Result<Address, LedgerError> {
        let node = self
            .nodes
            .get_mut(&selector)
            .ok_or(LedgerError::SelectorNotRegistered { selector })?;
        if node.facet_address == facet {
            return Err(LedgerError::ReplaceWithSameFacet { selector, facet });
        }
        let previous = std::mem::replace(&mut node.facet_address, facet);
        self.release_facet(previous);
        self.retain_facet(facet);
        Ok(previous)
    }

    /// Unlinks `selector`. Returns the facet it routed to.
    ///
    /// # Errors
    ///
    /// [`LedgerError::SelectorNotRegistered`] if the selector is unknown.
    pub fn unlink(&mut self, selector: Selector) -> Result<Address, LedgerError> {
        let node = self
            .nodes
            .remove(&selector)
            .ok_or(LedgerError::SelectorNotRegistered { selector })?;

        match node.prev_selector {
            Some(prev) => {
                if let Some(prev_node) = self.nodes.get_mut(&prev) {
                    prev_node.next_selector = node.next_selector;
                }
            }
            None => self.first_selector = node.next_selector,
        }
        match node.next_selector {
            Some(next) => {
                if let Some(next_node) = self.nodes.get_mut(&next) {
                    next_node.prev_selector = node.prev_selector;
                }
            }
            None => self.last_selector = node.prev_selector,
        }

        self.selector_count -= 1;
        self.release_facet(node.facet_address);
        Ok(node.facet_address)
    }

    fn retain_facet(&mut self, facet: Address) {
        let count = self.selectors_per_facet.entry(facet).or_insert(0);
        if *count == 0 {
            self.facet_count += 1;
        }
        *count += 1;
    }

    fn release_facet(&mut self, facet: Address) {
        if let Some(count) = self.selectors_per_facet.get_mut(&facet) {
            *count -= 1;
            if *count == 0 {
                self.selectors_per_facet.remove(&facet);
                self.facet_count -= 1;
            }
        }
    }
}

/// Head-to-tail iterator over `(selector, node)`.
pub struct Iter<'a> {
    list: &'a FacetList,
    cursor: Option<Selector>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Selector, &'a FacetNode);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let selector = self.cursor?;
        let node = self.list.nodes.get(&selector)?;
        self.cursor = node.next_selector;
        self.remaining -= 1;
        Some((selector, node))
    }
}
