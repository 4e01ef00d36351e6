//! Shareable search links.
//!
//! Encodes a [`SearchState`](edsc_model::SearchState) into a compact query
//! string and decodes such strings back into state. The format uses short
//! keys (see [`registry::URL_FIELDS`]), a positional collection structure
//! (see [`collections`]) and compressed granule exclusion lists (see
//! [`granule_ids`]). Links that have been shared must keep decoding, so the
//! aliases and layouts here are fixed.
//!
//! Decoding never fails: unknown keys are ignored and malformed values decode
//! to best-effort values or defaults.
//!
//! # Example
//!
//! ```
//! use edsc_model::SearchState;
//! use edsc_url::{decode_url_params, encode_url_query};
//!
//! let mut state = SearchState::default();
//! state.focused_collection = "C1000-PROV".to_string();
//! state.query.keyword = "sea ice".to_string();
//!
//! let url = encode_url_query("/search/granules", &state);
//! assert_eq!(url, "/search/granules?p=C1000-PROV&q=sea%20ice");
//!
//! let decoded = decode_url_params(url.split_once('?').unwrap().1);
//! assert_eq!(decoded.focused_collection, "C1000-PROV");
//! assert_eq!(decoded.query.keyword, "sea ice");
//! ```

#![deny(unsafe_code)]

pub mod collections;
pub mod encoders;
pub mod filters;
pub mod forwarding;
pub mod granule_ids;
pub mod params;
pub mod query_string;
pub mod registry;
pub mod url;

pub use collections::{
    DecodedCollections, EncodedCollections, decode_collections, encode_collections,
};
pub use filters::{FilterCodec, GranuleFiltersCodec};
pub use forwarding::{ForwardingRules, prep_keys_for_cmr};
pub use granule_ids::{
    ExcludedGranules, ExclusionToken, decode_excluded_granules, encode_excluded_granules,
};
pub use params::{ParamMap, ParamValue};
pub use registry::{URL_FIELDS, UrlField};
pub use url::{UrlCodec, decode_url_params, encode_url_query, query_params_from_url_string};
