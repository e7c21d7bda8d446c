//! Frequent-itemset support primitives: parse line-oriented transaction
//! data, aggregate exact support counts, represent discovered patterns
//! compactly, rank them by a numeric key and hand the ranked result to
//! an external sink.
//!
//! The pipeline is synchronous and single-threaded:
//! parse → aggregate → `compute()` → rank → export.
//!
//! ```
//! use freqmine::{export, ItemsetCorpus, ItemsetModel, PatternRecord, Ranker};
//!
//! # fn main() -> freqmine::MineResult<()> {
//! let corpus = ItemsetCorpus::from_reader("{a,b}\n{a,c}\n{a,b,c}\n".as_bytes())?;
//! let (inventory, transactions) = corpus.into_parts();
//!
//! let mut model = ItemsetModel::from_sets(transactions);
//! model.compute();
//!
//! // rank single-item patterns by support, ascending
//! let mut rows: Vec<_> = model
//!     .frequent_items(1)?
//!     .into_iter()
//!     .map(|pattern| (f64::from(pattern.support()), pattern))
//!     .collect();
//! Ranker::new().rank(&mut rows)?;
//!
//! let ranked: Vec<_> = rows.into_iter().map(|(_, pattern)| pattern).collect();
//! let mut sink: Vec<PatternRecord> = Vec::new();
//! export(&ranked, &inventory, &mut sink)?;
//!
//! assert_eq!(sink.last().unwrap().labels, "a");
//! assert_eq!(sink.last().unwrap().support, 3);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod intern;
pub mod model;
pub mod parse;
pub mod pattern;
pub mod rank;
pub mod types;

pub use error::{Error, MineResult};
pub use export::{export, PatternRecord, PatternSink};
pub use intern::Inventory;
pub use model::ItemsetModel;
pub use parse::{parse_line, ItemsetCorpus, TransactionReader};
pub use pattern::Pattern;
pub use rank::{rank_by_key, PivotRule, Ranker};
pub use types::{ItemCounts, ItemId, Itemset, SupportCount, Transaction};
