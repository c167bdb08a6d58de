// Line-oriented backing format for partitions.
//
// One row per line: `reading<TAB>text[<TAB>weight[<TAB>priority]]`.
// Readings carry the usual syllable separators ("ni'hao"). Blank lines
// and `#` comments are skipped; weight and priority default to 0.

use std::fs;
use std::path::Path;

use pinyin_core::LexiconEntry;

use crate::partition::{Partition, PartitionKind};
use crate::LexiconError;

/// Load a partition from a TSV file.
pub fn load_partition(
    kind: PartitionKind,
    name: impl Into<String>,
    path: impl AsRef<Path>,
) -> Result<Partition, LexiconError> {
    let contents = fs::read_to_string(path)?;
    parse_partition(kind, name, &contents)
}

/// Parse a partition from TSV text.
///
/// Duplicate `(reading, text)` keys keep the first row, matching the
/// per-partition uniqueness contract.
pub fn parse_partition(
    kind: PartitionKind,
    name: impl Into<String>,
    contents: &str,
) -> Result<Partition, LexiconError> {
    let mut partition = Partition::new(kind, name);
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let reading = fields.next().unwrap_or("").trim();
        let text = fields.next().unwrap_or("").trim();
        if reading.is_empty() || text.is_empty() {
            return Err(LexiconError::Parse {
                line: idx + 1,
                message: "missing reading or text field".to_string(),
            });
        }
        let weight = parse_rank(fields.next(), idx, "weight")?;
        let priority = parse_rank(fields.next(), idx, "priority")?;
        partition.insert(LexiconEntry::new(reading, text, weight, priority));
    }
    Ok(partition)
}

fn parse_rank(field: Option<&str>, idx: usize, what: &str) -> Result<i32, LexiconError> {
    match field.map(str::trim).filter(|f| !f.is_empty()) {
        None => Ok(0),
        Some(f) => f.parse::<i32>().map_err(|_| LexiconError::Parse {
            line: idx + 1,
            message: format!("invalid {what} value {f:?}"),
        }),
    }
}
