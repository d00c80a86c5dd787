use crate::models::{NamedRecord, RawRow, COLUMN_LABELS};
use crate::Error;

/// Re-key each fetched row under the seven fixed column labels.
///
/// Labels and values zip positionally, so the arity is checked first: a row
/// with anything other than seven values fails the whole batch with a shape
/// mismatch rather than producing a mis-aligned record. Input order is
/// preserved. Pure; no I/O.
pub fn build_named_records(rows: &[RawRow]) -> Result<Vec<NamedRecord>, Error> {
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        if row.len() != COLUMN_LABELS.len() {
            return Err(Error::ShapeMismatch {
                row: idx,
                expected: COLUMN_LABELS.len(),
                actual: row.len(),
            });
        }
        let fields = COLUMN_LABELS
            .iter()
            .copied()
            .zip(row.values().iter().cloned())
            .collect();
        records.push(NamedRecord::new(fields));
    }
    Ok(records)
}
