//! Tests for forwarded request query strings.

use edsc_url::forwarding::ForwardingRules;
use edsc_url::{ParamMap, ParamValue, prep_keys_for_cmr};

fn params(json: serde_json::Value) -> ParamMap {
    match ParamValue::from(json) {
        ParamValue::Map(map) => map,
        other => panic!("expected an object, got {other:?}"),
    }
}

#[test]
fn non_indexed_keys_use_bare_brackets() {
    let record = params(serde_json::json!({ "a": 1, "b": [1, 2] }));
    assert_eq!(prep_keys_for_cmr(&record, &["b"]), "a=1&b%5B%5D=1&b%5B%5D=2");
}

#[test]
fn indexed_arrays_keep_positions() {
    let record = params(serde_json::json!({ "a": 1, "b": [1, 2] }));
    assert_eq!(prep_keys_for_cmr(&record, &[]), "a=1&b%5B0%5D=1&b%5B1%5D=2");
}

#[test]
fn only_non_indexed_keys() {
    let record = params(serde_json::json!({ "concept_id": ["C1-PROV"] }));
    assert_eq!(
        prep_keys_for_cmr(&record, &["concept_id", "tag_key"]),
        "concept_id%5B%5D=C1-PROV"
    );
}

#[test]
fn nested_options_are_indexed_and_escaped() {
    let record = params(serde_json::json!({
        "keyword": "sea ice*",
        "options": { "spatial": { "or": true } },
        "temporal": "2019-01-01T00:00:00Z,"
    }));
    assert_eq!(
        prep_keys_for_cmr(&record, &[]),
        "keyword=sea%20ice%2A&options%5Bspatial%5D%5Bor%5D=true&temporal=2019-01-01T00%3A00%3A00Z%2C"
    );
}

#[test]
fn empty_record_is_empty_string() {
    assert_eq!(prep_keys_for_cmr(&ParamMap::new(), &["b"]), "");
}

#[test]
fn collection_search_drops_unpermitted_keys() {
    let record = params(serde_json::json!({
        "keyword": "modis",
        "platform_h": ["Terra", "Aqua"],
        "page_size": 20,
        "echo_token": "secret"
    }));
    let rules = ForwardingRules::collection_search("json");
    assert_eq!(
        rules.build_params(&record),
        "keyword=modis&page_size=20&platform_h%5B%5D=Terra&platform_h%5B%5D=Aqua"
    );
}

#[test]
fn umm_json_collection_search_only_forwards_concept_ids() {
    let record = params(serde_json::json!({
        "keyword": "modis",
        "concept_id": ["C1-PROV", "C2-PROV"]
    }));
    let rules = ForwardingRules::collection_search("umm_json");
    assert_eq!(
        rules.build_params(&record),
        "concept_id%5B%5D=C1-PROV&concept_id%5B%5D=C2-PROV"
    );
}

#[test]
fn access_method_rules() {
    let record = params(serde_json::json!({
        "collection_id": "C1-PROV",
        "tags": ["edsc.extra.serverless.subset_service.echo_orders"],
        "page_num": 2
    }));
    assert_eq!(
        ForwardingRules::access_methods().build_params(&record),
        "collection_id=C1-PROV&tags%5B0%5D=edsc.extra.serverless.subset_service.echo_orders"
    );
}
