//! Whole-state link encoding and decoding.

use edsc_model::SearchState;
use tracing::debug;

use crate::collections::{decode_collections, encode_collections};
use crate::encoders::science_keywords::{decode_science_keywords, encode_science_keywords};
use crate::filters::{FilterCodec, GranuleFiltersCodec};
use crate::params::{ParamMap, ParamValue};
use crate::query_string::{parse, stringify};
use crate::registry::URL_FIELDS;

/// Link codec parameterized by the granule filter codec.
#[derive(Debug, Clone, Default)]
pub struct UrlCodec<F = GranuleFiltersCodec> {
    filters: F,
}

impl UrlCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FilterCodec> UrlCodec<F> {
    pub fn with_filter_codec(filters: F) -> Self {
        Self { filters }
    }

    /// Build the parameter record for a state, before serialization.
    pub fn encode_params(&self, state: &SearchState) -> ParamMap {
        let mut record = ParamMap::new();

        if let Some(encoded) = encode_collections(
            &state.focused_collection,
            state.collections.as_ref(),
            state.project.as_ref(),
            &self.filters,
        ) {
            record.extend(encoded.into_params());
        }

        for field in URL_FIELDS {
            if let Some(value) = (field.encode)(state) {
                record.insert(field.alias.to_string(), ParamValue::Str(value));
            }
        }

        record.extend(encode_science_keywords(&state.cmr_facets.science_keywords_h));
        record
    }

    /// Encode a state into `pathname` followed by its query string.
    pub fn encode_url_query(&self, pathname: &str, state: &SearchState) -> String {
        let query = stringify(&self.encode_params(state));
        debug!(pathname, query_len = query.len(), "encoded url");
        format!("{pathname}{query}")
    }

    /// Rebuild state from an already parsed record.
    ///
    /// Fields without a key keep their defaults. Keys that are not scalar
    /// strings are ignored.
    pub fn decode_params(&self, params: &ParamMap) -> SearchState {
        let mut state = SearchState::default();

        for field in URL_FIELDS {
            if let Some(value) = params.get(field.alias).and_then(ParamValue::as_str) {
                (field.decode)(&mut state, value);
            }
        }

        state.cmr_facets.science_keywords_h = decode_science_keywords(params);

        let decoded = decode_collections(params, &self.filters);
        state.focused_collection = decoded.focused_collection;
        state.collections = decoded.collections;
        state.project = decoded.project;
        state
    }

    /// Decode a query string (with or without its leading `?`).
    pub fn decode_url_params(&self, query: &str) -> SearchState {
        let params = parse(query);
        debug!(key_count = params.len(), "decoding url params");
        self.decode_params(&params)
    }
}

/// Decode a query string with the default granule filter codec.
pub fn decode_url_params(query: &str) -> SearchState {
    UrlCodec::new().decode_url_params(query)
}

/// Encode a state with the default granule filter codec.
pub fn encode_url_query(pathname: &str, state: &SearchState) -> String {
    UrlCodec::new().encode_url_query(pathname, state)
}

/// The query string part of a URL: the text after the first `?` or `#`, up
/// to the next one.
pub fn query_params_from_url_string(url: &str) -> Option<&str> {
    url.split(['?', '#']).nth(1)
}
