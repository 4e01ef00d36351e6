use serde::{Deserialize, Serialize};

use crate::collection::{Collections, Project};
use crate::facets::{CmrFacets, FeatureFacets};
use crate::map::MapView;
use crate::query::QueryState;
use crate::timeline::Timeline;

/// Everything a search link can restore.
///
/// `collections` and `project` stay `None` when a decoded link carried no
/// collection structure, so merging the result into an existing store does
/// not reset them. Encoding treats `None` as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchState {
    pub focused_collection: String,
    pub focused_granule: String,
    pub query: QueryState,
    pub map: MapView,
    pub timeline: Timeline,
    pub feature_facets: FeatureFacets,
    pub cmr_facets: CmrFacets,
    pub collections: Option<Collections>,
    pub project: Option<Project>,
}

impl SearchState {
    /// Project collection ids, empty when there is no project.
    pub fn project_ids(&self) -> &[String] {
        self.project
            .as_ref()
            .map(|project| project.collection_ids.as_slice())
            .unwrap_or_default()
    }
}
