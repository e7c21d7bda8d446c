//! Serializing ranked patterns into records for an external sink.

use std::io;

use log::debug;

use crate::error::{Error, MineResult};
use crate::intern::Inventory;
use crate::pattern::Pattern;
use crate::types::SupportCount;

/// One exported record: `|`-joined labels in ascending id order, the
/// itemset size, and its support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    pub labels: String,
    pub size: usize,
    pub support: SupportCount,
}

/// External sink receiving records one at a time.
pub trait PatternSink {
    fn accept(&mut self, record: PatternRecord) -> io::Result<()>;
}

impl PatternSink for Vec<PatternRecord> {
    fn accept(&mut self, record: PatternRecord) -> io::Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Hand `patterns` to `sink` as records, one at a time, in the given
/// (ranked) order.
///
/// The first failure aborts the remainder of the batch and reports the
/// failing 0-based index; the caller may resubmit the unattempted tail.
/// No internal retry. Returns the number of records delivered.
pub fn export<S: PatternSink>(
    patterns: &[Pattern],
    inventory: &Inventory,
    sink: &mut S,
) -> MineResult<usize> {
    for (index, pattern) in patterns.iter().enumerate() {
        let record = PatternRecord {
            labels: pattern.label_string(inventory)?,
            size: pattern.size(),
            support: pattern.support(),
        };
        sink.accept(record)
            .map_err(|source| Error::Export { index, source })?;
    }
    debug!("exported {} records", patterns.len());
    Ok(patterns.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Inventory, Vec<Pattern>) {
        let mut inventory = Inventory::new();
        let a = inventory.intern("a");
        let b = inventory.intern("b");
        let c = inventory.intern("c");
        let patterns = vec![
            Pattern::new(vec![a], 3),
            Pattern::new(vec![b, c], 2),
            Pattern::new(vec![a, b, c], 1),
        ];
        (inventory, patterns)
    }

    /// Sink that fails at a fixed record position.
    struct FailingSink {
        fail_at: usize,
        accepted: Vec<PatternRecord>,
    }

    impl PatternSink for FailingSink {
        fn accept(&mut self, record: PatternRecord) -> io::Result<()> {
            if self.accepted.len() == self.fail_at {
                return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
            }
            self.accepted.push(record);
            Ok(())
        }
    }

    #[test]
    fn records_carry_labels_size_and_support() {
        let (inventory, patterns) = fixture();
        let mut sink: Vec<PatternRecord> = Vec::new();
        let delivered = export(&patterns, &inventory, &mut sink).unwrap();

        assert_eq!(delivered, 3);
        assert_eq!(
            sink,
            vec![
                PatternRecord { labels: "a".into(), size: 1, support: 3 },
                PatternRecord { labels: "b|c".into(), size: 2, support: 2 },
                PatternRecord { labels: "a|b|c".into(), size: 3, support: 1 },
            ]
        );
    }

    #[test]
    fn failure_reports_index_and_aborts_the_remainder() {
        let (mut inventory, mut patterns) = fixture();
        let d = inventory.intern("d");
        let e = inventory.intern("e");
        patterns.push(Pattern::new(vec![d], 1));
        patterns.push(Pattern::new(vec![e], 1));

        // third of five rejected
        let mut sink = FailingSink { fail_at: 2, accepted: Vec::new() };
        match export(&patterns, &inventory, &mut sink) {
            Err(Error::Export { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected Export error, got {:?}", other),
        }
        // the first two were handled, the last two never attempted
        assert_eq!(sink.accepted.len(), 2);
    }

    #[test]
    fn unknown_item_fails_before_touching_the_sink() {
        let (inventory, _) = fixture();
        let patterns = vec![Pattern::new(vec![99], 1)];
        let mut sink: Vec<PatternRecord> = Vec::new();
        assert!(matches!(
            export(&patterns, &inventory, &mut sink),
            Err(Error::UnknownItem(99))
        ));
        assert!(sink.is_empty());
    }
}
