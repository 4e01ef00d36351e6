//! Text and table output shared by the subcommands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use edsc_url::collections::{
    OUTPUT_FORMAT_ALIAS, PROJECT_ALIAS, SUB_RECORDS_ALIAS, VARIABLES_ALIAS, VISIBLE_ALIAS,
};
use edsc_url::granule_ids::{CMR_EXCLUSION_ALIAS, CWIC_EXCLUSION_ALIAS};
use edsc_url::{GranuleFiltersCodec, ParamMap, ParamValue, URL_FIELDS};

/// The query string of a link.
///
/// Text containing `?` or `#`, or that looks like a path or absolute URL, is
/// treated as a link; anything else is taken to be a bare query string.
pub fn query_part(input: &str) -> &str {
    let input = input.trim();
    if input.contains(['?', '#']) || input.starts_with('/') || input.contains("://") {
        edsc_url::query_params_from_url_string(input).unwrap_or_default()
    } else {
        input
    }
}

/// Flatten a parsed record into `(bracketed key, value)` rows in key order.
pub fn flatten_params(record: &ParamMap) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    for (key, value) in record {
        push_rows(&mut rows, key.clone(), value);
    }
    rows
}

fn push_rows(rows: &mut Vec<(String, String)>, key: String, value: &ParamValue) {
    match value {
        ParamValue::Str(text) => rows.push((key, text.clone())),
        ParamValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                push_rows(rows, format!("{key}[{index}]"), item);
            }
        }
        ParamValue::Map(map) => {
            for (child, item) in map {
                push_rows(rows, format!("{key}[{child}]"), item);
            }
        }
    }
}

/// A parsed record as pretty-printed JSON, nested the way it was parsed.
pub fn params_json(record: &ParamMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

/// Every key a link may carry, with the state it holds.
pub fn field_rows() -> Vec<(String, String)> {
    let simple = URL_FIELDS
        .iter()
        .map(|field| (field.alias.to_string(), field.name.to_string()));

    let keywords = [
        ("fst<i>", "scienceKeywords[i].topic"),
        ("fsm<i>", "scienceKeywords[i].term"),
        ("fs1<i>", "scienceKeywords[i].variableLevel1"),
        ("fs2<i>", "scienceKeywords[i].variableLevel2"),
        ("fs3<i>", "scienceKeywords[i].variableLevel3"),
        ("fsd<i>", "scienceKeywords[i].detailedVariable"),
    ]
    .into_iter()
    .map(|(alias, name)| (alias.to_string(), name.to_string()));

    let structure = [
        (PROJECT_ALIAS, "focusedCollection!projectCollectionIds"),
        (SUB_RECORDS_ALIAS, "per-collection sub-records"),
    ]
    .into_iter()
    .map(|(alias, name)| (alias.to_string(), name.to_string()));

    let sub_record = [
        (CMR_EXCLUSION_ALIAS, "excludedGranuleIds"),
        (CWIC_EXCLUSION_ALIAS, "excludedGranuleIds (CWIC)"),
        (VISIBLE_ALIAS, "isVisible"),
        (VARIABLES_ALIAS, "selectedVariables"),
        (OUTPUT_FORMAT_ALIAS, "selectedOutputFormat"),
        (GranuleFiltersCodec::TEMPORAL, "granuleFilters.temporal"),
        (GranuleFiltersCodec::DAY_NIGHT_FLAG, "granuleFilters.dayNightFlag"),
        (GranuleFiltersCodec::BROWSE_ONLY, "granuleFilters.browseOnly"),
        (GranuleFiltersCodec::ONLINE_ONLY, "granuleFilters.onlineOnly"),
        (GranuleFiltersCodec::CLOUD_COVER, "granuleFilters.cloudCover"),
        (GranuleFiltersCodec::ORBIT_NUMBER, "granuleFilters.orbitNumber"),
        (
            GranuleFiltersCodec::EQUATOR_CROSSING_LONGITUDE,
            "granuleFilters.equatorCrossingLongitude",
        ),
        (
            GranuleFiltersCodec::EQUATOR_CROSSING_DATE,
            "granuleFilters.equatorCrossingDate",
        ),
        (
            GranuleFiltersCodec::READABLE_GRANULE_NAME,
            "granuleFilters.readableGranuleName",
        ),
    ]
    .into_iter()
    .map(|(alias, name)| (format!("pg[i][{alias}]"), name.to_string()));

    simple.chain(keywords).chain(structure).chain(sub_record).collect()
}

/// Apply the shared table style.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Two-column table of `rows` under `header`.
pub fn two_column_table(header: [&str; 2], rows: Vec<(String, String)>) -> Table {
    let mut table = Table::new();
    table.set_header(header.to_vec());
    apply_table_style(&mut table);
    for (key, value) in rows {
        table.add_row(vec![key, value]);
    }
    table
}

