//! Facet selections.

use serde::{Deserialize, Serialize};

/// Toggle-style feature facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFacets {
    pub map_imagery: bool,
    pub near_real_time: bool,
    pub customizable: bool,
}

/// Hierarchical facet selections sent to the metadata service.
///
/// Field names follow the service's parameter names. Each list keeps the
/// order in which values were selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CmrFacets {
    pub data_center_h: Vec<String>,
    pub instrument_h: Vec<String>,
    pub platform_h: Vec<String>,
    pub processing_level_id_h: Vec<String>,
    pub project_h: Vec<String>,
    pub science_keywords_h: Vec<ScienceKeyword>,
}

/// One selected science keyword path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScienceKeyword {
    pub topic: String,
    pub term: Option<String>,
    pub variable_level_1: Option<String>,
    pub variable_level_2: Option<String>,
    pub variable_level_3: Option<String>,
    pub detailed_variable: Option<String>,
}
