//! Timeline position: `center!interval!start!end`.

use edsc_model::{Timeline, TimelineInterval};
use tracing::trace;

fn interval_code(interval: TimelineInterval) -> &'static str {
    match interval {
        TimelineInterval::Minute => "0",
        TimelineInterval::Hour => "1",
        TimelineInterval::Day => "2",
        TimelineInterval::Month => "3",
        TimelineInterval::Year => "4",
    }
}

fn interval_from_code(code: &str) -> Option<TimelineInterval> {
    match code {
        "0" => Some(TimelineInterval::Minute),
        "1" => Some(TimelineInterval::Hour),
        "2" => Some(TimelineInterval::Day),
        "3" => Some(TimelineInterval::Month),
        "4" => Some(TimelineInterval::Year),
        _ => None,
    }
}

pub fn encode_timeline(timeline: &Timeline) -> Option<String> {
    if timeline.is_empty() {
        return None;
    }
    let instant = |value: Option<i64>| value.map(|seconds| seconds.to_string()).unwrap_or_default();
    Some(
        [
            instant(timeline.center),
            timeline
                .interval
                .map(interval_code)
                .unwrap_or_default()
                .to_string(),
            instant(timeline.start),
            instant(timeline.end),
        ]
        .join("!"),
    )
}

pub fn decode_timeline(value: &str) -> Timeline {
    let parts: Vec<&str> = value.split('!').collect();
    let part = |index: usize| parts.get(index).copied().unwrap_or_default();
    let instant = |index: usize| {
        let raw = part(index);
        if raw.is_empty() {
            return None;
        }
        let parsed = raw.parse::<i64>().ok();
        if parsed.is_none() {
            trace!(raw, "ignoring unparsable timeline instant");
        }
        parsed
    };
    Timeline {
        center: instant(0),
        interval: interval_from_code(part(1)),
        start: instant(2),
        end: instant(3),
    }
}
