use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimelineInterval {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

/// Timeline position; all instants are epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeline {
    pub center: Option<i64>,
    pub interval: Option<TimelineInterval>,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.center.is_none() && self.interval.is_none() && self.start.is_none() && self.end.is_none()
    }
}
