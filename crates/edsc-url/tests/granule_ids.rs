//! Tests for excluded granule compression.

use edsc_url::granule_ids::{CMR_EXCLUSION_ALIAS, CWIC_EXCLUSION_ALIAS};
use edsc_url::{
    ExcludedGranules, ParamMap, ParamValue, decode_excluded_granules, encode_excluded_granules,
};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn record(entries: &[(&str, &str)]) -> ParamMap {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), ParamValue::from(*value)))
        .collect()
}

#[test]
fn cmr_ids_factor_out_provider() {
    let token = encode_excluded_granules(false, &ids(&["G100-PROV", "G200-PROV"])).unwrap();
    assert_eq!(token.alias, CMR_EXCLUSION_ALIAS);
    assert_eq!(token.value, "100!200!PROV");

    let decoded = decode_excluded_granules(&record(&[("x", "100!200!PROV")]));
    assert_eq!(
        decoded,
        ExcludedGranules {
            is_cwic: false,
            granule_ids: ids(&["G100-PROV", "G200-PROV"]),
        }
    );
}

#[test]
fn cwic_ids_are_joined_verbatim() {
    let token = encode_excluded_granules(true, &ids(&["111", "222"])).unwrap();
    assert_eq!(token.alias, CWIC_EXCLUSION_ALIAS);
    assert_eq!(token.value, "111!222");

    let decoded = decode_excluded_granules(&record(&[("cx", "111!222")]));
    assert_eq!(
        decoded,
        ExcludedGranules {
            is_cwic: true,
            granule_ids: ids(&["111", "222"]),
        }
    );
}

#[test]
fn numeric_first_id_is_treated_as_cwic() {
    let token = encode_excluded_granules(false, &ids(&["5551212", "5551213"])).unwrap();
    assert_eq!(token.alias, CWIC_EXCLUSION_ALIAS);
    assert_eq!(token.value, "5551212!5551213");
}

#[test]
fn empty_list_emits_nothing() {
    assert_eq!(encode_excluded_granules(false, &[]), None);
    assert_eq!(encode_excluded_granules(true, &[]), None);
}

#[test]
fn mixed_providers_use_first_provider() {
    let token = encode_excluded_granules(false, &ids(&["G1-LPDAAC", "G2-NSIDC"])).unwrap();
    assert_eq!(token.value, "1!2!LPDAAC");
}

#[test]
fn provider_with_dashes_is_kept_whole() {
    let token = encode_excluded_granules(false, &ids(&["G12-PROV-ECS"])).unwrap();
    assert_eq!(token.value, "12!PROV-ECS");
    let decoded = decode_excluded_granules(&record(&[("x", token.value.as_str())]));
    assert_eq!(decoded.granule_ids, ids(&["G12-PROV-ECS"]));
}

#[test]
fn missing_keys_decode_to_default() {
    assert_eq!(
        decode_excluded_granules(&ParamMap::new()),
        ExcludedGranules::default()
    );
    assert_eq!(
        decode_excluded_granules(&record(&[("v", "t")])),
        ExcludedGranules::default()
    );
}

#[test]
fn cmr_alias_wins_over_cwic_alias() {
    let decoded = decode_excluded_granules(&record(&[("x", "1!PROV"), ("cx", "9")]));
    assert!(!decoded.is_cwic);
    assert_eq!(decoded.granule_ids, ids(&["G1-PROV"]));
}

#[test]
fn malformed_tokens_decode_best_effort() {
    let decoded = decode_excluded_granules(&record(&[("x", "PROV")]));
    assert!(decoded.granule_ids.is_empty());

    let decoded = decode_excluded_granules(&record(&[("x", "abc!!PROV")]));
    assert_eq!(decoded.granule_ids, ids(&["Gabc-PROV", "G-PROV"]));

    let nested = ParamMap::from([("x".to_string(), ParamValue::Map(ParamMap::new()))]);
    assert_eq!(decode_excluded_granules(&nested), ExcludedGranules::default());
}
