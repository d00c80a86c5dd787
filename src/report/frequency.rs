use crate::models::StatusFrequency;

/// Count occurrences per distinct status label.
///
/// Every element is coerced to its string form; nulls become the literal
/// "None" so unset statuses still get a labeled bucket. The result keeps
/// first-occurrence order of the input. Pure; no I/O.
pub fn build_status_frequency(statuses: &[Option<String>]) -> StatusFrequency {
    let mut frequency = StatusFrequency::default();
    for status in statuses {
        let label = match status {
            Some(value) => value.clone(),
            None => "None".to_string(),
        };
        frequency.record(label);
    }
    frequency
}
