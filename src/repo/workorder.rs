use log::debug;
use postgres::types::Type;
use postgres::{Client, Row};

use crate::models::{CellValue, RawRow};
use crate::Error;

/// Status-only read, one value per work order. Duplicates are meaningful;
/// they are the basis for counting.
pub const STATUS_QUERY: &str = "SELECT status FROM public.workorder_workorder";

/// Full read of the seven reporting columns, in display order.
pub const RECORD_QUERY: &str = "SELECT status, location, asset_number, model, \
     reason_for_repair, date_created, date_closed FROM public.workorder_workorder";

/// Read access to the work order table.
///
/// The trait is the seam between the pipeline and the store: production
/// code goes through [`WorkOrderRepo`], tests supply an in-memory source.
pub trait WorkOrderSource {
    /// One entry per row of the table, null statuses preserved.
    fn fetch_status_values(&mut self) -> Result<Vec<Option<String>>, Error>;

    /// The seven reporting columns for every row, in table scan order.
    fn fetch_full_records(&mut self) -> Result<Vec<RawRow>, Error>;
}

/// Postgres-backed work order source.
pub struct WorkOrderRepo<'a> {
    client: &'a mut Client,
}

impl<'a> WorkOrderRepo<'a> {
    pub fn new(client: &'a mut Client) -> Self {
        WorkOrderRepo { client }
    }

    fn decode_row(row: &Row) -> Result<RawRow, Error> {
        let mut cells = Vec::with_capacity(row.len());
        for (idx, column) in row.columns().iter().enumerate() {
            let ty = column.type_();
            let cell = if *ty == Type::TIMESTAMP {
                row.try_get::<_, Option<chrono::NaiveDateTime>>(idx)
                    .map_err(|source| Error::Query {
                        query: RECORD_QUERY,
                        source,
                    })?
                    .map_or(CellValue::Null, CellValue::Timestamp)
            } else if *ty == Type::TIMESTAMPTZ {
                row.try_get::<_, Option<chrono::DateTime<chrono::Utc>>>(idx)
                    .map_err(|source| Error::Query {
                        query: RECORD_QUERY,
                        source,
                    })?
                    .map_or(CellValue::Null, |ts| CellValue::Timestamp(ts.naive_utc()))
            } else if *ty == Type::DATE {
                row.try_get::<_, Option<chrono::NaiveDate>>(idx)
                    .map_err(|source| Error::Query {
                        query: RECORD_QUERY,
                        source,
                    })?
                    .map_or(CellValue::Null, CellValue::Date)
            } else {
                row.try_get::<_, Option<String>>(idx)
                    .map_err(|source| Error::Query {
                        query: RECORD_QUERY,
                        source,
                    })?
                    .map_or(CellValue::Null, CellValue::Text)
            };
            cells.push(cell);
        }
        Ok(RawRow(cells))
    }
}

impl WorkOrderSource for WorkOrderRepo<'_> {
    fn fetch_status_values(&mut self) -> Result<Vec<Option<String>>, Error> {
        let rows = self
            .client
            .query(STATUS_QUERY, &[])
            .map_err(|source| Error::Query {
                query: STATUS_QUERY,
                source,
            })?;
        debug!("fetched {} status value(s)", rows.len());

        rows.iter()
            .map(|row| {
                row.try_get::<_, Option<String>>(0)
                    .map_err(|source| Error::Query {
                        query: STATUS_QUERY,
                        source,
                    })
            })
            .collect()
    }

    fn fetch_full_records(&mut self) -> Result<Vec<RawRow>, Error> {
        let rows = self
            .client
            .query(RECORD_QUERY, &[])
            .map_err(|source| Error::Query {
                query: RECORD_QUERY,
                source,
            })?;
        debug!("fetched {} work order row(s)", rows.len());

        rows.iter().map(Self::decode_row).collect()
    }
}
