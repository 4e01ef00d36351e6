//! Outbound query strings for the `forward` command.

use clap::ValueEnum;
use edsc_url::{ForwardingRules, ParamMap, ParamValue, prep_keys_for_cmr};

/// Request types with a fixed set of forwarded keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForwardPreset {
    /// Collection search returning JSON.
    Collections,
    /// Collection search returning UMM JSON.
    CollectionsUmm,
    /// Access method lookup.
    AccessMethods,
}

impl ForwardPreset {
    pub fn rules(self) -> ForwardingRules {
        match self {
            Self::Collections => ForwardingRules::collection_search("json"),
            Self::CollectionsUmm => ForwardingRules::collection_search("umm_json"),
            Self::AccessMethods => ForwardingRules::access_methods(),
        }
    }
}

/// Convert a JSON document into a parameter record.
///
/// Returns `None` unless the document is an object.
pub fn params_from_json(value: serde_json::Value) -> Option<ParamMap> {
    match ParamValue::from(value) {
        ParamValue::Map(record) => Some(record),
        _ => None,
    }
}

/// Serialize `params` with a preset's rules, or with explicit non-indexed keys.
pub fn forward_query(
    params: &ParamMap,
    non_indexed: &[String],
    preset: Option<ForwardPreset>,
) -> String {
    match preset {
        Some(preset) => preset.rules().build_params(params),
        None => {
            let keys: Vec<&str> = non_indexed.iter().map(String::as_str).collect();
            prep_keys_for_cmr(params, &keys)
        }
    }
}
