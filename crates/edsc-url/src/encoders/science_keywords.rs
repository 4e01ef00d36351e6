//! Science keyword selections.
//!
//! Each selected keyword path is spread over indexed keys: `fst0` topic,
//! `fsm0` term, `fs10`/`fs20`/`fs30` variable levels and `fsd0` detailed
//! variable for the first keyword, `fst1`... for the second.

use std::collections::BTreeSet;

use edsc_model::ScienceKeyword;

use crate::params::{ParamMap, get_str, insert_opt};

const TOPIC: &str = "fst";
const TERM: &str = "fsm";
const VARIABLE_LEVEL_1: &str = "fs1";
const VARIABLE_LEVEL_2: &str = "fs2";
const VARIABLE_LEVEL_3: &str = "fs3";
const DETAILED_VARIABLE: &str = "fsd";

pub fn encode_science_keywords(keywords: &[ScienceKeyword]) -> ParamMap {
    let mut record = ParamMap::new();
    for (index, keyword) in keywords.iter().enumerate() {
        let fields = [
            (TOPIC, Some(&keyword.topic)),
            (TERM, keyword.term.as_ref()),
            (VARIABLE_LEVEL_1, keyword.variable_level_1.as_ref()),
            (VARIABLE_LEVEL_2, keyword.variable_level_2.as_ref()),
            (VARIABLE_LEVEL_3, keyword.variable_level_3.as_ref()),
            (DETAILED_VARIABLE, keyword.detailed_variable.as_ref()),
        ];
        for (prefix, value) in fields {
            insert_opt(
                &mut record,
                &format!("{prefix}{index}"),
                value.filter(|value| !value.is_empty()).cloned(),
            );
        }
    }
    record
}

/// Decode every keyword that has a topic, in ascending index order.
pub fn decode_science_keywords(params: &ParamMap) -> Vec<ScienceKeyword> {
    let indices: BTreeSet<usize> = params
        .keys()
        .filter_map(|key| key.strip_prefix(TOPIC)?.parse().ok())
        .collect();

    indices
        .into_iter()
        .filter_map(|index| {
            let field = |prefix: &str| get_str(params, &format!("{prefix}{index}")).map(str::to_string);
            Some(ScienceKeyword {
                topic: field(TOPIC)?,
                term: field(TERM),
                variable_level_1: field(VARIABLE_LEVEL_1),
                variable_level_2: field(VARIABLE_LEVEL_2),
                variable_level_3: field(VARIABLE_LEVEL_3),
                detailed_variable: field(DETAILED_VARIABLE),
            })
        })
        .collect()
}
