//! Alias table for the simple (non-nested) state fields.
//!
//! Each row names a state field, the short key it is written under, and the
//! functions that move the field in and out of its string form. Top-level
//! encoding and decoding walk this table in order; adding a field means
//! adding a row.

use edsc_model::{SearchState, Spatial};

use crate::encoders::facets::{decode_facets, encode_facets};
use crate::encoders::features::{decode_features, encode_features};
use crate::encoders::map::{decode_map, encode_map};
use crate::encoders::string::{decode_string, encode_string};
use crate::encoders::temporal::{decode_temporal, encode_temporal};
use crate::encoders::timeline::{decode_timeline, encode_timeline};

/// One row of the alias table.
#[derive(Clone, Copy)]
pub struct UrlField {
    /// Store field name.
    pub name: &'static str,
    /// Key used in the link.
    pub alias: &'static str,
    /// Encoded value, `None` when the field is at its default.
    pub encode: fn(&SearchState) -> Option<String>,
    /// Apply a present value to the state being decoded.
    pub decode: fn(&mut SearchState, &str),
}

impl std::fmt::Debug for UrlField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlField")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .finish_non_exhaustive()
    }
}

/// All simple fields, in encoding order.
pub const URL_FIELDS: &[UrlField] = &[
    UrlField {
        name: "focusedGranule",
        alias: "g",
        encode: |state| encode_string(&state.focused_granule),
        decode: |state, value| state.focused_granule = decode_string(value),
    },
    UrlField {
        name: "keywordSearch",
        alias: "q",
        encode: |state| encode_string(&state.query.keyword),
        decode: |state, value| state.query.keyword = decode_string(value),
    },
    UrlField {
        name: "pointSearch",
        alias: "sp",
        encode: |state| match &state.query.spatial {
            Some(Spatial::Point(point)) => encode_string(point),
            _ => None,
        },
        decode: |state, value| set_spatial(state, Spatial::Point(decode_string(value))),
    },
    UrlField {
        name: "boundingBoxSearch",
        alias: "sb",
        encode: |state| match &state.query.spatial {
            Some(Spatial::BoundingBox(bounding_box)) => encode_string(bounding_box),
            _ => None,
        },
        decode: |state, value| set_spatial(state, Spatial::BoundingBox(decode_string(value))),
    },
    UrlField {
        name: "polygonSearch",
        alias: "polygon",
        encode: |state| match &state.query.spatial {
            Some(Spatial::Polygon(polygon)) => encode_string(polygon),
            _ => None,
        },
        decode: |state, value| set_spatial(state, Spatial::Polygon(decode_string(value))),
    },
    UrlField {
        name: "map",
        alias: "m",
        encode: |state| encode_map(&state.map),
        decode: |state, value| state.map = decode_map(value),
    },
    UrlField {
        name: "temporalSearch",
        alias: "qt",
        encode: |state| encode_temporal(&state.query.temporal),
        decode: |state, value| state.query.temporal = decode_temporal(value),
    },
    UrlField {
        name: "timeline",
        alias: "tl",
        encode: |state| encode_timeline(&state.timeline),
        decode: |state, value| state.timeline = decode_timeline(value),
    },
    UrlField {
        name: "featureFacets",
        alias: "ff",
        encode: |state| encode_features(&state.feature_facets),
        decode: |state, value| state.feature_facets = decode_features(value),
    },
    UrlField {
        name: "platformFacets",
        alias: "fp",
        encode: |state| encode_facets(&state.cmr_facets.platform_h),
        decode: |state, value| state.cmr_facets.platform_h = decode_facets(value),
    },
    UrlField {
        name: "instrumentFacets",
        alias: "fi",
        encode: |state| encode_facets(&state.cmr_facets.instrument_h),
        decode: |state, value| state.cmr_facets.instrument_h = decode_facets(value),
    },
    UrlField {
        name: "organizationFacets",
        alias: "fdc",
        encode: |state| encode_facets(&state.cmr_facets.data_center_h),
        decode: |state, value| state.cmr_facets.data_center_h = decode_facets(value),
    },
    UrlField {
        name: "projectFacets",
        alias: "fpj",
        encode: |state| encode_facets(&state.cmr_facets.project_h),
        decode: |state, value| state.cmr_facets.project_h = decode_facets(value),
    },
    UrlField {
        name: "processingLevelFacets",
        alias: "fl",
        encode: |state| encode_facets(&state.cmr_facets.processing_level_id_h),
        decode: |state, value| state.cmr_facets.processing_level_id_h = decode_facets(value),
    },
];

/// The first spatial shape in table order wins.
fn set_spatial(state: &mut SearchState, spatial: Spatial) {
    if state.query.spatial.is_none() && !spatial.as_str().is_empty() {
        state.query.spatial = Some(spatial);
    }
}

/// Look up a row by store field name.
pub fn lookup(name: &str) -> Option<&'static UrlField> {
    URL_FIELDS.iter().find(|field| field.name == name)
}

/// Look up a row by link alias.
pub fn lookup_alias(alias: &str) -> Option<&'static UrlField> {
    URL_FIELDS.iter().find(|field| field.alias == alias)
}
