//! Keyword, temporal and spatial query constraints.

use serde::{Deserialize, Serialize};

/// Query constraints applied to the collection search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryState {
    /// Free-text keyword.
    pub keyword: String,
    /// Temporal range.
    pub temporal: Temporal,
    /// Spatial constraint, at most one shape at a time.
    pub spatial: Option<Spatial>,
}

/// A single spatial constraint.
///
/// The shape strings are passed through untouched; coordinate validation
/// belongs to the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Spatial {
    Point(String),
    BoundingBox(String),
    Polygon(String),
}

impl Spatial {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Point(value) | Self::BoundingBox(value) | Self::Polygon(value) => value,
        }
    }
}

/// Temporal range, optionally recurring within a day-of-year window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Temporal {
    pub start_date: String,
    pub end_date: String,
    pub recurring_day_start: String,
    pub recurring_day_end: String,
    pub is_recurring: bool,
}

impl Temporal {
    /// Returns true when no bound is set.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_empty() && self.end_date.is_empty() && !self.is_recurring
    }
}
