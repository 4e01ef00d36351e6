//! Focused collection and project structure.
//!
//! The structure is written as two keys:
//!
//! - `p`: the focused collection id followed by the project collection ids,
//!   joined with `!`. The focused slot is empty when nothing is focused, so
//!   `p=!C1-PROV!C2-PROV` is a project without a focused collection.
//! - `pg`: one sub-record per `p` position holding that collection's excluded
//!   granules, visibility, granule filters and access selections.
//!
//! When the focused collection is also in the project, its position-0
//! sub-record is left empty and the project position carries its state.
//! Existing links depend on this layout, so it must not change.

use edsc_model::{CollectionEntry, Collections, Placeholder, Project, ProjectCollection};
use tracing::debug;

use crate::filters::FilterCodec;
use crate::granule_ids::{decode_excluded_granules, encode_excluded_granules};
use crate::params::{ParamMap, ParamValue, get_str};

pub const PROJECT_ALIAS: &str = "p";
pub const SUB_RECORDS_ALIAS: &str = "pg";
pub const VISIBLE_ALIAS: &str = "v";
pub const VARIABLES_ALIAS: &str = "uv";
pub const OUTPUT_FORMAT_ALIAS: &str = "of";

const TRUE_TOKEN: &str = "t";

/// Encoded `p` and `pg` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCollections {
    pub p: String,
    pub pg: Vec<ParamMap>,
}

impl EncodedCollections {
    /// Record holding `p`, plus `pg` when any sub-record was built.
    pub fn into_params(self) -> ParamMap {
        let mut record = ParamMap::new();
        record.insert(PROJECT_ALIAS.to_string(), ParamValue::Str(self.p));
        if !self.pg.is_empty() {
            record.insert(
                SUB_RECORDS_ALIAS.to_string(),
                ParamValue::List(self.pg.into_iter().map(ParamValue::Map).collect()),
            );
        }
        record
    }
}

/// Collection structure read back from a link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedCollections {
    pub focused_collection: String,
    pub collections: Option<Collections>,
    pub project: Option<Project>,
}

/// Encode the focused collection and project.
///
/// Returns `None` when there is neither a focused collection nor a project
/// collection.
pub fn encode_collections<F: FilterCodec + ?Sized>(
    focused_collection: &str,
    collections: Option<&Collections>,
    project: Option<&Project>,
    filters: &F,
) -> Option<EncodedCollections> {
    let project_ids: &[String] = project
        .map(|project| project.collection_ids.as_slice())
        .unwrap_or_default();

    let p = std::iter::once(focused_collection)
        .chain(project_ids.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("!");
    if p.is_empty() {
        return None;
    }

    let focused_in_project = project_ids.iter().any(|id| id == focused_collection);
    let pg = match collections {
        Some(collections) => p
            .split('!')
            .enumerate()
            .map(|(index, id)| {
                if index == 0 && focused_in_project {
                    return ParamMap::new();
                }
                let Some(entry) = collections.by_id.get(id) else {
                    return ParamMap::new();
                };
                let project_entry = project.and_then(|project| project.by_id.get(id));
                encode_sub_record(index, entry, project_entry, filters)
            })
            .collect(),
        None => Vec::new(),
    };

    debug!(
        collection_count = pg.len(),
        focused = %focused_collection,
        "encoded collections"
    );
    Some(EncodedCollections { p, pg })
}

/// Build one `pg` sub-record from its optional parts. Later parts win on a
/// key clash.
fn encode_sub_record<F: FilterCodec + ?Sized>(
    index: usize,
    entry: &CollectionEntry,
    project_entry: Option<&ProjectCollection>,
    filters: &F,
) -> ParamMap {
    let exclusions = entry
        .granules
        .as_ref()
        .and_then(|_| encode_excluded_granules(entry.is_cwic, &entry.excluded_granule_ids))
        .map(|token| (token.alias.to_string(), token.value));

    let visibility = (index > 0 && entry.is_visible)
        .then(|| (VISIBLE_ALIAS.to_string(), TRUE_TOKEN.to_string()));

    let method = project_entry.and_then(ProjectCollection::selected_method);
    let variables = method
        .filter(|method| !method.selected_variables.is_empty())
        .map(|method| (VARIABLES_ALIAS.to_string(), method.selected_variables.join("!")));
    let output_format = method
        .and_then(|method| method.selected_output_format.clone())
        .filter(|format| !format.is_empty())
        .map(|format| (OUTPUT_FORMAT_ALIAS.to_string(), format));

    let scalars = |part: Option<(String, String)>| {
        part.map(|(key, value)| (key, ParamValue::Str(value)))
    };

    scalars(exclusions)
        .into_iter()
        .chain(scalars(visibility))
        .chain(filters.encode(&entry.granule_filters))
        .chain(scalars(variables))
        .chain(scalars(output_format))
        .collect()
}

/// Decode the focused collection and project from a parsed record.
///
/// `collections` and `project` are only returned when the link carried `pg`
/// or at least one project collection.
pub fn decode_collections<F: FilterCodec + ?Sized>(
    params: &ParamMap,
    filters: &F,
) -> DecodedCollections {
    let p = get_str(params, PROJECT_ALIAS).filter(|p| !p.is_empty());
    let pg = params.get(SUB_RECORDS_ALIAS);
    if p.is_none() && pg.is_none() {
        return DecodedCollections::default();
    }

    let mut focused_collection = String::new();
    let mut all_ids: Vec<String> = Vec::new();
    let mut collections = Collections::default();
    let mut project = Project::default();

    for (index, id) in p.unwrap_or_default().split('!').enumerate() {
        if id.is_empty() {
            continue;
        }
        if !all_ids.iter().any(|known| known == id) {
            all_ids.push(id.to_string());
        }
        if index == 0 {
            focused_collection = id.to_string();
        } else {
            project.collection_ids.push(id.to_string());
        }

        let slot = pg.and_then(|pg| pg.slot(index));
        let (entry, selections) = match slot {
            Some(record) => decode_sub_record(record, filters),
            None => (
                CollectionEntry {
                    granules: Some(Placeholder::new()),
                    ..CollectionEntry::default()
                },
                None,
            ),
        };
        collections.by_id.insert(id.to_string(), entry);

        if index > 0 {
            project
                .by_id
                .insert(id.to_string(), ProjectCollection::default());
        }
        if let Some(selections) = selections {
            project.by_id.insert(id.to_string(), selections);
        }
    }
    collections.all_ids = all_ids;

    debug!(
        focused = %focused_collection,
        project_count = project.collection_ids.len(),
        "decoded collections"
    );

    if pg.is_none() && project.collection_ids.is_empty() {
        return DecodedCollections {
            focused_collection,
            collections: None,
            project: None,
        };
    }
    DecodedCollections {
        focused_collection,
        collections: Some(collections),
        project: Some(project),
    }
}

/// Decode one sub-record into the collection entry and, when variables or
/// an output format were selected, the project entry.
fn decode_sub_record<F: FilterCodec + ?Sized>(
    record: &ParamMap,
    filters: &F,
) -> (CollectionEntry, Option<ProjectCollection>) {
    let excluded = decode_excluded_granules(record);
    let variables: Vec<String> = get_str(record, VARIABLES_ALIAS)
        .filter(|variables| !variables.is_empty())
        .map(|variables| variables.split('!').map(str::to_string).collect())
        .unwrap_or_default();
    let output_format = get_str(record, OUTPUT_FORMAT_ALIAS)
        .filter(|format| !format.is_empty())
        .map(str::to_string);

    let entry = CollectionEntry {
        excluded_granule_ids: excluded.granule_ids,
        granules: Some(Placeholder::new()),
        granule_filters: filters.decode(record),
        is_visible: get_str(record, VISIBLE_ALIAS) == Some(TRUE_TOKEN),
        is_cwic: excluded.is_cwic,
        ..CollectionEntry::default()
    };
    let selections = (!variables.is_empty() || output_format.is_some())
        .then(|| ProjectCollection::opendap(variables, output_format));
    (entry, selections)
}
