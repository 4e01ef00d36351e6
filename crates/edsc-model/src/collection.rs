//! Collection and project structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::query::Temporal;

/// Access method under which URL-decoded variable and format selections are stored.
pub const OPENDAP_ACCESS_METHOD: &str = "opendap";

/// Metadata slot filled in later by other subsystems.
pub type Placeholder = serde_json::Map<String, serde_json::Value>;

/// Collections known to the client, keyed by concept id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collections {
    pub all_ids: Vec<String>,
    pub by_id: BTreeMap<String, CollectionEntry>,
}

/// Per-collection state that survives in a shared link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionEntry {
    /// Granules removed from this collection's results, in removal order.
    pub excluded_granule_ids: Vec<String>,
    /// Granule results; `None` until granule data has been loaded.
    pub granules: Option<Placeholder>,
    pub granule_filters: GranuleFilters,
    /// Whether the collection is drawn on the map. Ignored for the focused collection.
    pub is_visible: bool,
    /// Whether granule ids use the legacy numeric shape.
    pub is_cwic: bool,
    pub metadata: Placeholder,
    pub umm_metadata: Placeholder,
    pub formatted_metadata: Placeholder,
}

/// Filters applied to a collection's granule search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GranuleFilters {
    pub temporal: Temporal,
    pub day_night_flag: Option<String>,
    pub browse_only: bool,
    pub online_only: bool,
    pub cloud_cover: RangeFilter,
    pub orbit_number: RangeFilter,
    pub equator_crossing_longitude: RangeFilter,
    pub equator_crossing_date: DateRangeFilter,
    pub readable_granule_name: Vec<String>,
}

impl GranuleFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Numeric range kept as entered; bounds are not parsed here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeFilter {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeFilter {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRangeFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRangeFilter {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Collections the user has added to their project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub collection_ids: Vec<String>,
    pub by_id: BTreeMap<String, ProjectCollection>,
}

/// Access configuration of one project collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectCollection {
    pub access_methods: BTreeMap<String, AccessMethod>,
    pub selected_access_method: Option<String>,
}

impl ProjectCollection {
    /// Project entry holding variable and format selections under the
    /// OPeNDAP access method, which is also marked selected.
    pub fn opendap(selected_variables: Vec<String>, selected_output_format: Option<String>) -> Self {
        let mut access_methods = BTreeMap::new();
        access_methods.insert(
            OPENDAP_ACCESS_METHOD.to_string(),
            AccessMethod {
                selected_variables,
                selected_output_format,
            },
        );
        Self {
            access_methods,
            selected_access_method: Some(OPENDAP_ACCESS_METHOD.to_string()),
        }
    }

    /// The access method currently selected, if it exists.
    pub fn selected_method(&self) -> Option<&AccessMethod> {
        let name = self.selected_access_method.as_deref()?;
        self.access_methods.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessMethod {
    pub selected_variables: Vec<String>,
    pub selected_output_format: Option<String>,
}
