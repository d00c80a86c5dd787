// Aggregation and shaping of fetched work order data
// A single linear pass: both reads complete, then the two outputs are built

pub mod frequency;
pub mod table;

pub use frequency::build_status_frequency;
pub use table::build_named_records;

use serde::Serialize;

use crate::models::{NamedRecord, StatusFrequency};
use crate::repo::WorkOrderSource;
use crate::Error;

/// One refresh cycle's worth of shaped reporting data.
///
/// Built once per refresh and handed to the rendering layer; a refresh
/// means running [`Snapshot::collect`] again from scratch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub status_frequency: StatusFrequency,
    pub records: Vec<NamedRecord>,
}

impl Snapshot {
    /// Run the full pipeline against a source: the two reads in sequence,
    /// then aggregation and shaping. Any failure aborts the cycle.
    pub fn collect(source: &mut impl WorkOrderSource) -> Result<Snapshot, Error> {
        let statuses = source.fetch_status_values()?;
        let rows = source.fetch_full_records()?;

        Ok(Snapshot {
            status_frequency: build_status_frequency(&statuses),
            records: build_named_records(&rows)?,
        })
    }
}
