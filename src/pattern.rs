use std::slice;

use itertools::Itertools;

use crate::error::{Error, MineResult};
use crate::intern::Inventory;
use crate::types::{ItemId, Itemset, SupportCount};

/// One frequent itemset and its statistics. Immutable once built.
///
/// Two patterns are equal iff their item-id sets and supports are
/// equal. No ordering is defined; ranking keys are supplied by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    items: Itemset,
    support: SupportCount,
}

impl Pattern {
    /// Build a pattern over `items`, normalized to a sorted
    /// duplicate-free set, with the given support.
    pub fn new(mut items: Itemset, support: SupportCount) -> Self {
        items.sort_unstable();
        items.dedup();
        Pattern { items, support }
    }

    /// Cardinality of the itemset.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of transactions containing the itemset.
    pub fn support(&self) -> SupportCount {
        self.support
    }

    /// Item ids in ascending order. Finite; call again for a fresh
    /// pass.
    pub fn items(&self) -> slice::Iter<'_, ItemId> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.items
    }

    /// Resolve each item id to its original label, ascending id order.
    pub fn labels<'inv>(&self, inventory: &'inv Inventory) -> MineResult<Vec<&'inv str>> {
        self.items
            .iter()
            .map(|&item| inventory.label(item).ok_or(Error::UnknownItem(item)))
            .collect()
    }

    /// Labels joined with `|`, no trailing separator.
    pub fn label_string(&self, inventory: &Inventory) -> MineResult<String> {
        Ok(self.labels(inventory)?.into_iter().join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_items() {
        let pattern = Pattern::new(vec![3, 1, 3, 2], 7);
        assert_eq!(pattern.as_slice(), &[1, 2, 3]);
        assert_eq!(pattern.size(), 3);
        assert_eq!(pattern.support(), 7);
    }

    #[test]
    fn items_iterate_ascending_and_restart() {
        let pattern = Pattern::new(vec![5, 0, 2], 1);
        let first: Vec<ItemId> = pattern.items().copied().collect();
        let second: Vec<ItemId> = pattern.items().copied().collect();
        assert_eq!(first, vec![0, 2, 5]);
        assert_eq!(first, second);
    }

    #[test]
    fn equality_is_items_and_support() {
        assert_eq!(Pattern::new(vec![2, 1], 3), Pattern::new(vec![1, 2], 3));
        assert_ne!(Pattern::new(vec![1, 2], 3), Pattern::new(vec![1, 2], 4));
        assert_ne!(Pattern::new(vec![1, 2], 3), Pattern::new(vec![1, 3], 3));
    }

    #[test]
    fn label_string_joins_in_id_order() {
        let mut inventory = Inventory::new();
        let b = inventory.intern("b");
        let c = inventory.intern("c");
        let pattern = Pattern::new(vec![c, b], 3);
        assert_eq!(pattern.label_string(&inventory).unwrap(), "b|c");
    }

    #[test]
    fn unknown_id_fails_label_resolution() {
        let inventory = Inventory::new();
        let pattern = Pattern::new(vec![9], 1);
        match pattern.label_string(&inventory) {
            Err(Error::UnknownItem(9)) => {}
            other => panic!("expected UnknownItem, got {:?}", other),
        }
    }
}
