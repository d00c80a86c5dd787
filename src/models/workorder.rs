use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The seven reporting columns, in fixed display order.
///
/// These labels and their order are a contract with both the source table
/// and the rendering layer; changing them is a breaking change.
pub const COLUMN_LABELS: [&str; 7] = [
    "Status",
    "Location",
    "Asset Number",
    "Model",
    "Reason for Repair",
    "Date Created",
    "Date Closed",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One cell of a fetched row.
///
/// Nulls are carried through unchanged; the display layer decides how to
/// render them (JSON emits null, text tables leave the cell blank).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// String coercion, with nulls rendered as the literal "None".
    pub fn coerce(&self) -> String {
        match self {
            CellValue::Null => "None".to_string(),
            CellValue::Text(text) => text.clone(),
            CellValue::Date(date) => date.format(DATE_FORMAT).to_string(),
            CellValue::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Display form for text tables: like `coerce`, except null is blank.
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.coerce(),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_none(),
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Date(date) => {
                serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
            }
            CellValue::Timestamp(ts) => {
                serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
            }
        }
    }
}

/// One fetched row, cells in query column order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow(pub Vec<CellValue>);

impl RawRow {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[CellValue] {
        &self.0
    }
}

/// One work order re-keyed under the seven fixed labels, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRecord {
    fields: Vec<(&'static str, CellValue)>,
}

impl NamedRecord {
    pub(crate) fn new(fields: Vec<(&'static str, CellValue)>) -> Self {
        NamedRecord { fields }
    }

    pub fn fields(&self) -> &[(&'static str, CellValue)] {
        &self.fields
    }

    /// Value for a column label, if the label exists.
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| value)
    }
}

impl Serialize for NamedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Occurrence counts per status label.
///
/// Entries keep the first-occurrence order of the input sequence so chart
/// labels come out the same on every run against the same data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFrequency {
    entries: Vec<(String, u64)>,
}

impl StatusFrequency {
    /// Count one occurrence of a status label.
    pub fn record(&mut self, label: String) {
        match self.entries.iter_mut().find(|(name, _)| *name == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label, 1)),
        }
    }

    /// Count for a label; zero when the label was never observed.
    pub fn get(&self, label: &str) -> u64 {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Sum of all counts; equals the number of recorded occurrences.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|(_, count)| *count)
    }
}

impl Serialize for StatusFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
