//! Tests for the focused collection and project structure.

use std::collections::BTreeMap;

use edsc_model::{
    CollectionEntry, Collections, GranuleFilters, Placeholder, Project, ProjectCollection,
};
use edsc_url::query_string::parse;
use edsc_url::{
    DecodedCollections, GranuleFiltersCodec, ParamMap, ParamValue, decode_collections,
    encode_collections,
};

fn entry(excluded: &[&str]) -> CollectionEntry {
    CollectionEntry {
        excluded_granule_ids: excluded.iter().map(|id| (*id).to_string()).collect(),
        granules: Some(Placeholder::new()),
        ..CollectionEntry::default()
    }
}

fn collections(entries: Vec<(&str, CollectionEntry)>) -> Collections {
    Collections {
        all_ids: entries.iter().map(|(id, _)| (*id).to_string()).collect(),
        by_id: entries
            .into_iter()
            .map(|(id, entry)| (id.to_string(), entry))
            .collect(),
    }
}

fn project(ids: &[&str], by_id: Vec<(&str, ProjectCollection)>) -> Project {
    Project {
        collection_ids: ids.iter().map(|id| (*id).to_string()).collect(),
        by_id: by_id
            .into_iter()
            .map(|(id, collection)| (id.to_string(), collection))
            .collect(),
    }
}

fn str_value<'a>(record: &'a ParamMap, key: &str) -> Option<&'a str> {
    record.get(key).and_then(ParamValue::as_str)
}

#[test]
fn nothing_to_encode_returns_none() {
    assert_eq!(encode_collections("", None, None, &GranuleFiltersCodec), None);
    let empty = Collections::default();
    let no_project = Project::default();
    assert_eq!(
        encode_collections("", Some(&empty), Some(&no_project), &GranuleFiltersCodec),
        None
    );
}

#[test]
fn decode_of_empty_record_is_empty() {
    assert_eq!(
        decode_collections(&ParamMap::new(), &GranuleFiltersCodec),
        DecodedCollections::default()
    );
    let unrelated = parse("q=ice&m=0!0!3!0!0!0,2");
    assert_eq!(
        decode_collections(&unrelated, &GranuleFiltersCodec),
        DecodedCollections::default()
    );
}

#[test]
fn focused_collection_in_project_is_not_encoded_twice() {
    let mut visible = entry(&["G1-PROV"]);
    visible.is_visible = true;
    let collections = collections(vec![("C1-PROV", visible)]);
    let project = project(&["C1-PROV"], vec![("C1-PROV", ProjectCollection::default())]);

    let encoded =
        encode_collections("C1-PROV", Some(&collections), Some(&project), &GranuleFiltersCodec)
            .unwrap();

    assert_eq!(encoded.p, "C1-PROV!C1-PROV");
    assert_eq!(encoded.pg.len(), 2);
    assert!(encoded.pg[0].is_empty());
    assert_eq!(str_value(&encoded.pg[1], "x"), Some("1!PROV"));
    assert_eq!(str_value(&encoded.pg[1], "v"), Some("t"));
}

#[test]
fn focused_collection_never_carries_visibility() {
    let mut focused = entry(&[]);
    focused.is_visible = true;
    let collections = collections(vec![("C1-PROV", focused)]);

    let encoded =
        encode_collections("C1-PROV", Some(&collections), None, &GranuleFiltersCodec).unwrap();

    assert_eq!(encoded.p, "C1-PROV");
    assert_eq!(encoded.pg, vec![ParamMap::new()]);
}

#[test]
fn exclusions_require_granule_data() {
    let mut pending = entry(&["G1-PROV"]);
    pending.granules = None;
    let collections = collections(vec![("C1-PROV", pending)]);

    let encoded =
        encode_collections("C1-PROV", Some(&collections), None, &GranuleFiltersCodec).unwrap();

    assert!(encoded.pg[0].is_empty());
}

#[test]
fn unknown_collections_get_empty_sub_records() {
    let collections = collections(vec![("C2-PROV", entry(&["G5-PROV"]))]);
    let project = project(&["C1-PROV", "C2-PROV"], vec![]);

    let encoded =
        encode_collections("", Some(&collections), Some(&project), &GranuleFiltersCodec).unwrap();

    assert_eq!(encoded.p, "!C1-PROV!C2-PROV");
    assert_eq!(encoded.pg.len(), 3);
    assert!(encoded.pg[0].is_empty());
    assert!(encoded.pg[1].is_empty());
    assert_eq!(str_value(&encoded.pg[2], "x"), Some("5!PROV"));
}

#[test]
fn without_collections_only_p_is_written() {
    let project = project(&["C1-PROV"], vec![]);
    let encoded = encode_collections("C9-PROV", None, Some(&project), &GranuleFiltersCodec).unwrap();
    assert!(encoded.pg.is_empty());

    let params = encoded.into_params();
    assert_eq!(str_value(&params, "p"), Some("C9-PROV!C1-PROV"));
    assert!(!params.contains_key("pg"));
}

#[test]
fn selections_and_filters_share_the_sub_record() {
    let mut filtered = entry(&[]);
    filtered.granule_filters = GranuleFilters {
        online_only: true,
        ..GranuleFilters::default()
    };
    let collections = collections(vec![("C1-PROV", filtered)]);
    let project = project(
        &["C1-PROV"],
        vec![(
            "C1-PROV",
            ProjectCollection::opendap(
                vec!["V1-PROV".to_string(), "V2-PROV".to_string()],
                Some("NETCDF-4".to_string()),
            ),
        )],
    );

    let encoded =
        encode_collections("", Some(&collections), Some(&project), &GranuleFiltersCodec).unwrap();

    let record = &encoded.pg[1];
    assert_eq!(str_value(record, "oo"), Some("t"));
    assert_eq!(str_value(record, "uv"), Some("V1-PROV!V2-PROV"));
    assert_eq!(str_value(record, "of"), Some("NETCDF-4"));
}

#[test]
fn unselected_access_method_is_not_encoded() {
    let mut unselected = ProjectCollection::opendap(vec!["V1-PROV".to_string()], None);
    unselected.selected_access_method = None;
    let collections = collections(vec![("C1-PROV", entry(&[]))]);
    let project = project(&["C1-PROV"], vec![("C1-PROV", unselected)]);

    let encoded =
        encode_collections("", Some(&collections), Some(&project), &GranuleFiltersCodec).unwrap();

    assert!(encoded.pg[1].is_empty());
}

#[test]
fn decode_focused_collection_only() {
    let decoded = decode_collections(&parse("p=C1-PROV"), &GranuleFiltersCodec);
    assert_eq!(decoded.focused_collection, "C1-PROV");
    assert_eq!(decoded.collections, None);
    assert_eq!(decoded.project, None);
}

#[test]
fn decode_project_without_focus_keeps_index_alignment() {
    let params = parse("p=!C1-PROV!C2-PROV&pg[2][x]=7!8!PROV&pg[1][v]=t");
    let decoded = decode_collections(&params, &GranuleFiltersCodec);

    assert_eq!(decoded.focused_collection, "");
    let collections = decoded.collections.unwrap();
    assert_eq!(collections.all_ids, vec!["C1-PROV", "C2-PROV"]);
    assert!(collections.by_id["C1-PROV"].is_visible);
    assert!(collections.by_id["C1-PROV"].excluded_granule_ids.is_empty());
    assert_eq!(
        collections.by_id["C2-PROV"].excluded_granule_ids,
        vec!["G7-PROV", "G8-PROV"]
    );
    assert!(!collections.by_id["C2-PROV"].is_visible);

    let project = decoded.project.unwrap();
    assert_eq!(project.collection_ids, vec!["C1-PROV", "C2-PROV"]);
    assert_eq!(project.by_id["C1-PROV"], ProjectCollection::default());
}

#[test]
fn decode_selections_on_focused_collection() {
    let params = parse("p=C1-PROV&pg[0][uv]=V1!V2&pg[0][of]=ASCII");
    let decoded = decode_collections(&params, &GranuleFiltersCodec);

    let project = decoded.project.unwrap();
    assert!(project.collection_ids.is_empty());
    let expected = ProjectCollection::opendap(
        vec!["V1".to_string(), "V2".to_string()],
        Some("ASCII".to_string()),
    );
    assert_eq!(project.by_id, BTreeMap::from([("C1-PROV".to_string(), expected)]));
}

#[test]
fn decode_duplicate_project_ids() {
    let decoded = decode_collections(&parse("p=C1-PROV!C1-PROV!C1-PROV"), &GranuleFiltersCodec);
    let collections = decoded.collections.unwrap();
    assert_eq!(collections.all_ids, vec!["C1-PROV"]);
    assert_eq!(
        decoded.project.unwrap().collection_ids,
        vec!["C1-PROV", "C1-PROV"]
    );
}

#[test]
fn decode_entries_have_metadata_placeholders() {
    let decoded = decode_collections(&parse("p=!C1-PROV"), &GranuleFiltersCodec);
    let entry = &decoded.collections.unwrap().by_id["C1-PROV"];
    assert_eq!(entry.granules, Some(Placeholder::new()));
    assert!(entry.metadata.is_empty());
    assert!(entry.umm_metadata.is_empty());
    assert!(entry.formatted_metadata.is_empty());
}

#[test]
fn decode_sub_records_without_p() {
    let decoded = decode_collections(&parse("pg[0][v]=t"), &GranuleFiltersCodec);
    assert_eq!(decoded.focused_collection, "");
    assert_eq!(decoded.collections, Some(Collections::default()));
    assert_eq!(decoded.project, Some(Project::default()));
}

#[test]
fn decode_accepts_list_shaped_sub_records() {
    let collections = collections(vec![("C1-PROV", entry(&["G3-PROV"]))]);
    let project = project(&["C1-PROV"], vec![]);
    let encoded =
        encode_collections("", Some(&collections), Some(&project), &GranuleFiltersCodec).unwrap();

    let decoded = decode_collections(&encoded.into_params(), &GranuleFiltersCodec);

    let collections = decoded.collections.unwrap();
    assert_eq!(
        collections.by_id["C1-PROV"].excluded_granule_ids,
        vec!["G3-PROV"]
    );
}
