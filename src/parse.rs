//! Line-oriented transaction parsing.
//!
//! One transaction per non-empty line, optionally brace-delimited,
//! comma-separated tokens: `{bread, milk, cheese}`. Malformed structure
//! never fails a line; token extraction is best-effort.

use std::io::BufRead;
use std::str;

use log::debug;

use crate::error::{Error, MineResult};
use crate::intern::Inventory;
use crate::types::Transaction;

/// Lazy, forward-only reader turning a line source into transactions.
///
/// Yields one `Transaction` per non-empty line. I/O failure ends the
/// sequence; a line that cannot be decoded yields a recoverable
/// [`Error::Encoding`] and the reader continues with the next line.
pub struct TransactionReader<'inv, R> {
    source: R,
    inventory: &'inv mut Inventory,
    line: usize,
    done: bool,
}

impl<'inv, R: BufRead> TransactionReader<'inv, R> {
    pub fn new(source: R, inventory: &'inv mut Inventory) -> Self {
        TransactionReader {
            source,
            inventory,
            line: 0,
            done: false,
        }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<'inv, R: BufRead> Iterator for TransactionReader<'inv, R> {
    type Item = MineResult<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            let mut buf = Vec::new();
            match self.source.read_until(b'\n', &mut buf) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => self.line += 1,
                Err(source) => {
                    self.done = true;
                    return Some(Err(Error::Io(source)));
                }
            }

            let text = match str::from_utf8(&buf) {
                Ok(text) => text,
                Err(_) => return Some(Err(Error::Encoding { line: self.line })),
            };
            if text.trim().is_empty() {
                continue;
            }
            return Some(Ok(parse_line(text, self.inventory)));
        }
    }
}

/// Extract a transaction from one line: strip `{`/`}`, split on commas,
/// trim tokens, drop empties, intern the survivors into a sorted
/// duplicate-free set.
pub fn parse_line(line: &str, inventory: &mut Inventory) -> Transaction {
    let opens = line.matches('{').count();
    let closes = line.matches('}').count();
    if opens > 1 || closes > 1 {
        debug!(
            "unbalanced braces ({} open, {} close), extracting tokens anyway",
            opens, closes
        );
    }

    let stripped: String = line.chars().filter(|&c| c != '{' && c != '}').collect();
    let mut items: Transaction = stripped
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| inventory.intern(token))
        .collect();
    items.sort_unstable();
    items.dedup();
    items
}

/// An ordered sequence of transactions plus the inventory that interned
/// them.
#[derive(Debug, Default)]
pub struct ItemsetCorpus {
    inventory: Inventory,
    transactions: Vec<Transaction>,
}

impl ItemsetCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every non-empty line of `source` into a fresh corpus.
    ///
    /// Strict: the first I/O or encoding error aborts the read. Drive a
    /// [`TransactionReader`] directly to skip undecodable lines instead.
    pub fn from_reader<R: BufRead>(source: R) -> MineResult<Self> {
        let mut inventory = Inventory::new();
        let mut transactions = Vec::new();
        for parsed in TransactionReader::new(source, &mut inventory) {
            transactions.push(parsed?);
        }
        Ok(ItemsetCorpus {
            inventory,
            transactions,
        })
    }

    /// Append one transaction, normalizing it to a sorted
    /// duplicate-free set.
    pub fn push(&mut self, mut transaction: Transaction) {
        transaction.sort_unstable();
        transaction.dedup();
        self.transactions.push(transaction);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn into_parts(self) -> (Inventory, Vec<Transaction>) {
        (self.inventory, self.transactions)
    }
}
