//! Crate error types.

use std::io;

use thiserror::Error;

use crate::types::ItemId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read transaction source: {0}")]
    Io(#[from] io::Error),

    /// Statistics queried before the first `compute()`.
    #[error("statistics queried before compute()")]
    NotReady,

    /// A source line that could not be decoded. Recoverable: the reader
    /// stays usable and continues with the next line.
    #[error("line {line} is not valid UTF-8")]
    Encoding { line: usize },

    /// The sink rejected a record. Records after `index` were not
    /// attempted in that call.
    #[error("sink rejected record {index}: {source}")]
    Export { index: usize, source: io::Error },

    /// An item id the inventory never issued.
    #[error("no label for item id {0}")]
    UnknownItem(ItemId),

    /// Partition recursion hit the configured ceiling.
    #[error("partition recursion exceeded {limit} frames")]
    DepthExceeded { limit: usize },
}

pub type MineResult<T> = Result<T, Error>;
