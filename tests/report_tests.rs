use chrono::NaiveDate;
use orderlens::models::{CellValue, RawRow, COLUMN_LABELS};
use orderlens::repo::WorkOrderSource;
use orderlens::report::{build_named_records, build_status_frequency, Snapshot};
use orderlens::Error;

/// In-memory stand-in for the Postgres repository, exercising the same
/// source seam the pipeline uses in production.
struct MemorySource {
    statuses: Vec<Option<String>>,
    rows: Vec<RawRow>,
}

impl WorkOrderSource for MemorySource {
    fn fetch_status_values(&mut self) -> Result<Vec<Option<String>>, Error> {
        Ok(self.statuses.clone())
    }

    fn fetch_full_records(&mut self) -> Result<Vec<RawRow>, Error> {
        Ok(self.rows.clone())
    }
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn statuses(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(|s| s.to_string())).collect()
}

fn sample_row(status: Option<&str>, asset: &str) -> RawRow {
    RawRow(vec![
        status.map_or(CellValue::Null, |s| text(s)),
        text("Bldg A"),
        text(asset),
        text("Model X"),
        text("Leak"),
        CellValue::Date(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        CellValue::Null,
    ])
}

#[test]
fn frequency_total_equals_input_length() {
    for input in [
        statuses(&[]),
        statuses(&[Some("Open")]),
        statuses(&[Some("Open"), None, Some("Open"), Some("Hold"), None]),
        statuses(&[None, None, None]),
    ] {
        let freq = build_status_frequency(&input);
        assert_eq!(freq.total(), input.len() as u64);
    }
}

#[test]
fn frequency_keys_are_distinct_coerced_values() {
    let freq = build_status_frequency(&statuses(&[
        Some("Open"),
        None,
        Some("Closed"),
        Some("Open"),
    ]));
    let mut labels: Vec<&str> = freq.labels().collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["Closed", "None", "Open"]);
}

#[test]
fn frequency_end_to_end_scenario() {
    // Rows [("Open", ...), ("Closed", ...), ("Open", ...), (None, ...)]
    let freq = build_status_frequency(&statuses(&[
        Some("Open"),
        Some("Closed"),
        Some("Open"),
        None,
    ]));
    assert_eq!(freq.get("Open"), 2);
    assert_eq!(freq.get("Closed"), 1);
    assert_eq!(freq.get("None"), 1);
    assert_eq!(freq.len(), 3);

    // First-occurrence order drives deterministic chart labels.
    let labels: Vec<&str> = freq.labels().collect();
    assert_eq!(labels, vec!["Open", "Closed", "None"]);
}

#[test]
fn named_records_empty_input() {
    assert!(build_named_records(&[]).unwrap().is_empty());
}

#[test]
fn named_records_end_to_end_scenario() {
    let rows = vec![RawRow(vec![
        text("Open"),
        text("Bldg A"),
        text("A-123"),
        text("Model X"),
        text("Leak"),
        text("2023-01-01"),
        CellValue::Null,
    ])];
    let records = build_named_records(&rows).unwrap();
    assert_eq!(records.len(), 1);

    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Status": "Open",
            "Location": "Bldg A",
            "Asset Number": "A-123",
            "Model": "Model X",
            "Reason for Repair": "Leak",
            "Date Created": "2023-01-01",
            "Date Closed": null,
        })
    );

    // Label order is the fixed column order, not alphabetical.
    let labels: Vec<&str> = records[0].fields().iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, COLUMN_LABELS.to_vec());
}

#[test]
fn named_records_reject_wrong_arity_without_partial_output() {
    let rows = vec![
        sample_row(Some("Open"), "A-1"),
        RawRow(vec![text("Closed"), text("Bldg B")]),
    ];
    let err = build_named_records(&rows).unwrap_err();
    assert!(matches!(
        err,
        Error::ShapeMismatch {
            row: 1,
            expected: 7,
            actual: 2,
        }
    ));
}

#[test]
fn snapshot_runs_both_stages() {
    let mut source = MemorySource {
        statuses: statuses(&[Some("Open"), Some("Closed"), Some("Open"), None]),
        rows: vec![sample_row(Some("Open"), "A-1"), sample_row(None, "A-2")],
    };
    let snapshot = Snapshot::collect(&mut source).unwrap();

    assert_eq!(snapshot.status_frequency.total(), 4);
    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.records[0].get("Asset Number"), Some(&text("A-1")));
    assert_eq!(snapshot.records[1].get("Status"), Some(&CellValue::Null));
}

#[test]
fn snapshot_is_idempotent_over_unchanged_source() {
    let mut source = MemorySource {
        statuses: statuses(&[Some("Open"), None, Some("Hold")]),
        rows: vec![sample_row(Some("Open"), "A-1")],
    };
    let first = Snapshot::collect(&mut source).unwrap();
    let second = Snapshot::collect(&mut source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn snapshot_aborts_on_malformed_row() {
    let mut source = MemorySource {
        statuses: statuses(&[Some("Open")]),
        rows: vec![RawRow(vec![text("Open")])],
    };
    let err = Snapshot::collect(&mut source).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn snapshot_serializes_both_structures() {
    let mut source = MemorySource {
        statuses: statuses(&[Some("Open"), Some("Open")]),
        rows: vec![sample_row(Some("Open"), "A-1")],
    };
    let snapshot = Snapshot::collect(&mut source).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["status_frequency"]["Open"], serde_json::json!(2));
    assert_eq!(json["records"][0]["Asset Number"], serde_json::json!("A-1"));
    assert_eq!(json["records"][0]["Date Closed"], serde_json::Value::Null);
}
