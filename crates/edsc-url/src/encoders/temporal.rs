//! Temporal ranges: `start,end` or `start,end,dayStart,dayEnd` when recurring.

use edsc_model::Temporal;

pub fn encode_temporal(temporal: &Temporal) -> Option<String> {
    if temporal.is_empty() {
        return None;
    }
    let mut parts = vec![temporal.start_date.as_str(), temporal.end_date.as_str()];
    if temporal.is_recurring {
        parts.push(&temporal.recurring_day_start);
        parts.push(&temporal.recurring_day_end);
    }
    Some(parts.join(","))
}

pub fn decode_temporal(value: &str) -> Temporal {
    let parts: Vec<&str> = value.split(',').collect();
    let part = |index: usize| parts.get(index).copied().unwrap_or_default().to_string();
    Temporal {
        start_date: part(0),
        end_date: part(1),
        recurring_day_start: part(2),
        recurring_day_end: part(3),
        is_recurring: parts.len() >= 4,
    }
}
