//! Query strings for requests forwarded to the metadata search service.
//!
//! The service reads most array parameters with explicit indices
//! (`options[temporal][0]`), but a handful of keys only accept the bare
//! bracket form (`concept_id[]=...`). Those are split out and serialized
//! separately.

use tracing::debug;

use crate::params::ParamMap;
use crate::query_string::{ArrayFormat, escape_strict_component, serialize_pairs};

/// Serialize `params`, writing the keys in `non_indexed_keys` with `key[]`
/// arrays and everything else with `key[i]` arrays.
///
/// Keys listed as non-indexed but absent from `params` are skipped.
pub fn prep_keys_for_cmr(params: &ParamMap, non_indexed_keys: &[&str]) -> String {
    let (non_indexed, indexed): (ParamMap, ParamMap) = params
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .partition(|(key, _)| non_indexed_keys.contains(&key.as_str()));

    [
        serialize_pairs(&indexed, ArrayFormat::Indices, escape_strict_component).join("&"),
        serialize_pairs(&non_indexed, ArrayFormat::Brackets, escape_strict_component).join("&"),
    ]
    .into_iter()
    .filter(|half| !half.is_empty())
    .collect::<Vec<_>>()
    .join("&")
}

/// Which request keys may be forwarded and which of them are non-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingRules {
    pub permitted_keys: Vec<&'static str>,
    pub non_indexed_keys: Vec<&'static str>,
}

impl ForwardingRules {
    /// Rules for collection searches in the given response format.
    pub fn collection_search(format: &str) -> Self {
        let permitted_keys = if format == "umm_json" {
            vec!["concept_id"]
        } else {
            COLLECTION_SEARCH_KEYS.to_vec()
        };
        Self {
            permitted_keys,
            non_indexed_keys: COLLECTION_SEARCH_NON_INDEXED_KEYS.to_vec(),
        }
    }

    /// Rules for access method lookups.
    pub fn access_methods() -> Self {
        Self {
            permitted_keys: vec!["associations", "collection_id", "collection_provider", "tags"],
            non_indexed_keys: Vec::new(),
        }
    }

    /// Drop keys that are not permitted, then serialize.
    pub fn build_params(&self, params: &ParamMap) -> String {
        let permitted: ParamMap = params
            .iter()
            .filter(|(key, _)| self.permitted_keys.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let dropped = params.len() - permitted.len();
        if dropped > 0 {
            debug!(dropped, "dropped keys not permitted for forwarding");
        }
        prep_keys_for_cmr(&permitted, &self.non_indexed_keys)
    }
}

const COLLECTION_SEARCH_KEYS: &[&str] = &[
    "bounding_box",
    "collection_data_type",
    "concept_id",
    "data_center_h",
    "data_center",
    "echo_collection_id",
    "facets_size",
    "format",
    "granule_data_format_h",
    "has_granules_or_cwic",
    "has_granules",
    "include_facets",
    "include_granule_counts",
    "include_has_granules",
    "include_tags",
    "instrument_h",
    "keyword",
    "line",
    "options",
    "page_num",
    "page_size",
    "platform_h",
    "point",
    "polygon",
    "processing_level_id_h",
    "project_h",
    "project",
    "science_keywords_h",
    "sort_key",
    "tag_key",
    "temporal",
    "two_d_coordinate_system",
];

const COLLECTION_SEARCH_NON_INDEXED_KEYS: &[&str] = &[
    "collection_data_type",
    "concept_id",
    "data_center_h",
    "granule_data_format_h",
    "instrument_h",
    "platform_h",
    "processing_level_id_h",
    "project_h",
    "sort_key",
    "tag_key",
];
