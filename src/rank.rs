//! In-place ranking of `(key, payload)` rows by a recursive
//! partitioning sort.
//!
//! The default first-element pivot is the compatibility behavior: it
//! degrades to O(n^2) on descending input. Callers facing adversarial
//! key orders can opt into [`PivotRule::MedianOfThree`]. Equal keys may
//! be reordered; stability is not guaranteed.

use crate::error::{Error, MineResult};

/// How the partition pivot is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotRule {
    /// Key of the first element of the sub-range (default).
    First,
    /// Median of the first, middle and last keys, swapped to the front
    /// before the same partition runs.
    MedianOfThree,
}

impl Default for PivotRule {
    fn default() -> Self {
        PivotRule::First
    }
}

pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Sorts keyed rows in place by non-decreasing key.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    pivot: PivotRule,
    max_depth: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Ranker {
            pivot: PivotRule::First,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot(mut self, pivot: PivotRule) -> Self {
        self.pivot = pivot;
        self
    }

    /// Ceiling on partition recursion. Exceeding it fails with
    /// [`Error::DepthExceeded`] instead of exhausting the stack.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sort `rows` in place by non-decreasing key. No storage beyond
    /// the recursion frames. On `DepthExceeded` the rows are left
    /// partially reordered but remain a permutation of the input. Keys
    /// are compared with `<`/`>`; NaN keys are outside the contract.
    pub fn rank<T>(&self, rows: &mut [(f64, T)]) -> MineResult<()> {
        if rows.len() > 1 {
            self.sort_range(rows, 0, rows.len() - 1, 0)?;
        }
        Ok(())
    }

    fn sort_range<T>(
        &self,
        rows: &mut [(f64, T)],
        lo: usize,
        hi: usize,
        depth: usize,
    ) -> MineResult<()> {
        if depth >= self.max_depth {
            return Err(Error::DepthExceeded {
                limit: self.max_depth,
            });
        }

        if let PivotRule::MedianOfThree = self.pivot {
            let mid = lo + (hi - lo) / 2;
            rows.swap(lo, median_index(rows, lo, mid, hi));
        }
        let split = partition(rows, lo, hi);

        if split > lo {
            self.sort_range(rows, lo, split, depth + 1)?;
        }
        if split + 1 < hi {
            self.sort_range(rows, split + 1, hi, depth + 1)?;
        }
        Ok(())
    }
}

/// Sort with the default configuration (first-element pivot).
pub fn rank_by_key<T>(rows: &mut [(f64, T)]) -> MineResult<()> {
    Ranker::new().rank(rows)
}

/// Hoare partition of `rows[lo..=hi]` around the first element's key.
///
/// The low cursor advances past keys strictly below the pivot, the high
/// cursor retreats past keys strictly above; when they meet or cross,
/// the meeting index splits the range.
fn partition<T>(rows: &mut [(f64, T)], lo: usize, hi: usize) -> usize {
    let pivot = rows[lo].0;
    let mut i = lo;
    let mut j = hi;
    loop {
        while rows[i].0 < pivot {
            i += 1;
        }
        while rows[j].0 > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        rows.swap(i, j);
        i += 1;
        j -= 1;
    }
}

fn median_index<T>(rows: &[(f64, T)], a: usize, b: usize, c: usize) -> usize {
    let (ka, kb, kc) = (rows[a].0, rows[b].0, rows[c].0);
    if (ka <= kb) == (kb <= kc) {
        b
    } else if (kb <= ka) == (ka <= kc) {
        a
    } else {
        c
    }
}
