//! Compression of excluded granule id lists.
//!
//! Two id shapes share the exclusion slot of a `pg` sub-record:
//!
//! - CMR ids (`G1234-PROVIDER`) under [`CMR_EXCLUSION_ALIAS`]: the `G`
//!   prefix and provider are stripped and the provider is written once at the
//!   end, e.g. `1234!5678!PROVIDER`.
//! - CWIC ids (plain numbers) under [`CWIC_EXCLUSION_ALIAS`]: joined as-is.

use tracing::trace;

use crate::params::{ParamMap, get_str};

pub const CMR_EXCLUSION_ALIAS: &str = "x";
pub const CWIC_EXCLUSION_ALIAS: &str = "cx";

const SEPARATOR: char = '!';

/// An encoded exclusion list and the alias it belongs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionToken {
    pub alias: &'static str,
    pub value: String,
}

/// Excluded granules decoded from a sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExcludedGranules {
    pub is_cwic: bool,
    pub granule_ids: Vec<String>,
}

/// Encode an exclusion list, or `None` when there is nothing to exclude.
///
/// Ids are treated as CWIC when the collection says so or when the first id
/// is numeric, since the CWIC flag is not always known when a link is built.
/// CMR lists take the provider of the first id for every entry.
pub fn encode_excluded_granules(is_cwic: bool, granule_ids: &[String]) -> Option<ExclusionToken> {
    let first = granule_ids.first()?;

    if is_cwic || is_numeric(first) {
        return Some(ExclusionToken {
            alias: CWIC_EXCLUSION_ALIAS,
            value: granule_ids.join("!"),
        });
    }

    let provider = first.split_once('-').map_or("", |(_, provider)| provider);
    let mut tokens: Vec<&str> = granule_ids.iter().map(|id| granule_number(id)).collect();
    tokens.push(provider);

    Some(ExclusionToken {
        alias: CMR_EXCLUSION_ALIAS,
        value: tokens.join("!"),
    })
}

/// Decode the exclusion list of a sub-record. The CMR alias wins when both
/// are present.
pub fn decode_excluded_granules(record: &ParamMap) -> ExcludedGranules {
    if let Some(encoded) = get_str(record, CMR_EXCLUSION_ALIAS) {
        let mut tokens: Vec<&str> = encoded.split(SEPARATOR).collect();
        let provider = tokens.pop().unwrap_or_default();
        if provider.is_empty() {
            trace!(encoded, "excluded granule list has no provider");
        }
        return ExcludedGranules {
            is_cwic: false,
            granule_ids: tokens
                .into_iter()
                .map(|number| format!("G{number}-{provider}"))
                .collect(),
        };
    }

    if let Some(encoded) = get_str(record, CWIC_EXCLUSION_ALIAS) {
        return ExcludedGranules {
            is_cwic: true,
            granule_ids: encoded.split(SEPARATOR).map(str::to_string).collect(),
        };
    }

    ExcludedGranules::default()
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

/// The digits between the `G` prefix and the provider separator.
fn granule_number(granule_id: &str) -> &str {
    let after_prefix = granule_id
        .split_once('G')
        .map_or(granule_id, |(_, rest)| rest);
    after_prefix
        .split_once('-')
        .map_or(after_prefix, |(number, _)| number)
}
