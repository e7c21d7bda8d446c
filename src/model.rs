//! Itemset aggregation: accumulate transactions, finalize exact
//! support statistics.

use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::error::{Error, MineResult};
use crate::pattern::Pattern;
use crate::types::{ItemCounts, ItemId, SupportCount, Transaction};

/// Accumulates transactions via [`add_set`](Self::add_set) and
/// finalizes statistics via [`compute`](Self::compute).
///
/// Every query except [`transaction_count`](Self::transaction_count)
/// fails with [`Error::NotReady`] until the first `compute()`. Adding
/// more data afterwards invalidates the computed statistics: queries
/// fail again until the next `compute()`. Not internally synchronized;
/// concurrent writers must serialize access externally.
#[derive(Debug, Default)]
pub struct ItemsetModel {
    transactions: Vec<Transaction>,
    item_counts: Option<ItemCounts>,
}

impl ItemsetModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut model = Self::new();
        for set in sets {
            model.add_set(set);
        }
        model
    }

    /// Accumulate one transaction, normalized to a sorted
    /// duplicate-free set.
    pub fn add_set(&mut self, mut set: Transaction) {
        set.sort_unstable();
        set.dedup();
        self.item_counts = None;
        self.transactions.push(set);
    }

    /// Finalize statistics: one blocking pass over the accumulated
    /// transactions, counting for every item the transactions that
    /// contain it.
    pub fn compute(&mut self) {
        debug!(
            "computing item supports over {} transactions",
            self.transactions.len()
        );
        let mut counts: ItemCounts = HashMap::new();
        for transaction in &self.transactions {
            for &item in transaction {
                *counts.entry(item).or_insert(0) += 1;
            }
        }
        self.item_counts = Some(counts);
    }

    pub fn is_computed(&self) -> bool {
        self.item_counts.is_some()
    }

    /// Number of accumulated transactions. A property of the input, not
    /// a computed statistic, so it is not gated on `compute()`.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    fn counts(&self) -> MineResult<&ItemCounts> {
        self.item_counts.as_ref().ok_or(Error::NotReady)
    }

    /// Exact number of transactions containing `item`. Never-seen ids
    /// have support 0.
    pub fn support(&self, item: ItemId) -> MineResult<SupportCount> {
        Ok(self.counts()?.get(&item).copied().unwrap_or(0))
    }

    /// Exact number of transactions containing every item of `items`.
    pub fn itemset_support(&self, items: &[ItemId]) -> MineResult<SupportCount> {
        self.counts()?;
        Ok(count_containing(&self.transactions, items))
    }

    /// All single items with support >= `min_count`, as patterns. Order
    /// is unspecified; rank the result.
    pub fn frequent_items(&self, min_count: SupportCount) -> MineResult<Vec<Pattern>> {
        Ok(self
            .counts()?
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(&item, &count)| Pattern::new(vec![item], count))
            .collect())
    }

    /// All item pairs with support >= `min_count`. Candidate pairs are
    /// drawn from frequent single items, then counted exactly.
    pub fn frequent_pairs(&self, min_count: SupportCount) -> MineResult<Vec<Pattern>> {
        let counts = self.counts()?;
        let mut frequent: Vec<ItemId> = counts
            .iter()
            .filter(|&(_, &count)| count >= min_count)
            .map(|(&item, _)| item)
            .collect();
        frequent.sort_unstable();
        debug!("counting pairs over {} frequent items", frequent.len());

        Ok(frequent
            .iter()
            .combinations(2)
            .filter_map(|pair| {
                let candidate = [*pair[0], *pair[1]];
                let count = count_containing(&self.transactions, &candidate);
                if count >= min_count {
                    Some(Pattern::new(candidate.to_vec(), count))
                } else {
                    None
                }
            })
            .collect())
    }

    /// The pattern for an arbitrary itemset, with its exact support.
    pub fn pattern(&self, items: &[ItemId]) -> MineResult<Pattern> {
        self.counts()?;
        let support = count_containing(&self.transactions, items);
        Ok(Pattern::new(items.to_vec(), support))
    }
}

/// Transactions are sorted, so containment is a binary search per item.
fn count_containing(transactions: &[Transaction], items: &[ItemId]) -> SupportCount {
    transactions
        .iter()
        .filter(|transaction| {
            items
                .iter()
                .all(|item| transaction.binary_search(item).is_ok())
        })
        .count() as SupportCount
}
