use std::collections::HashMap;

pub type ItemId = usize;
pub type Itemset = Vec<ItemId>;

/// One parsed line: a sorted, duplicate-free set of item ids.
pub type Transaction = Vec<ItemId>;

pub type SupportCount = u32;
pub type ItemCounts = HashMap<ItemId, SupportCount>;
