//! Granule filter codec used inside collection sub-records.
//!
//! The collection codec treats a collection's granule filters as opaque and
//! hands them to a [`FilterCodec`]. Implementations must be total and
//! symmetric, and must not use the aliases the collection codec owns
//! ([`RESERVED_ALIASES`]).

use edsc_model::{DateRangeFilter, GranuleFilters, RangeFilter};

use crate::encoders::temporal::{decode_temporal, encode_temporal};
use crate::params::{ParamMap, ParamValue, get_str, insert_opt};

/// Aliases owned by the collection codec within a `pg` sub-record.
pub const RESERVED_ALIASES: [&str; 5] = ["x", "cx", "v", "uv", "of"];

const TRUE_TOKEN: &str = "t";

/// Encodes and decodes the granule filters of one collection.
pub trait FilterCodec {
    /// Keys to merge into the collection's sub-record.
    fn encode(&self, filters: &GranuleFilters) -> ParamMap;

    /// Filters read back from a collection's sub-record.
    fn decode(&self, record: &ParamMap) -> GranuleFilters;
}

/// Default granule filter codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct GranuleFiltersCodec;

impl GranuleFiltersCodec {
    pub const TEMPORAL: &'static str = "qt";
    pub const DAY_NIGHT_FLAG: &'static str = "dnf";
    pub const BROWSE_ONLY: &'static str = "bo";
    pub const ONLINE_ONLY: &'static str = "oo";
    pub const CLOUD_COVER: &'static str = "cc";
    pub const ORBIT_NUMBER: &'static str = "on";
    pub const EQUATOR_CROSSING_LONGITUDE: &'static str = "ecl";
    pub const EQUATOR_CROSSING_DATE: &'static str = "ecd";
    pub const READABLE_GRANULE_NAME: &'static str = "id";

    /// Every alias this codec may emit.
    pub const ALIASES: [&'static str; 9] = [
        Self::TEMPORAL,
        Self::DAY_NIGHT_FLAG,
        Self::BROWSE_ONLY,
        Self::ONLINE_ONLY,
        Self::CLOUD_COVER,
        Self::ORBIT_NUMBER,
        Self::EQUATOR_CROSSING_LONGITUDE,
        Self::EQUATOR_CROSSING_DATE,
        Self::READABLE_GRANULE_NAME,
    ];
}

impl FilterCodec for GranuleFiltersCodec {
    fn encode(&self, filters: &GranuleFilters) -> ParamMap {
        let mut record = ParamMap::new();
        if filters.is_empty() {
            return record;
        }
        insert_opt(&mut record, Self::TEMPORAL, encode_temporal(&filters.temporal));
        insert_opt(
            &mut record,
            Self::DAY_NIGHT_FLAG,
            filters.day_night_flag.clone().filter(|flag| !flag.is_empty()),
        );
        insert_opt(&mut record, Self::BROWSE_ONLY, encode_flag(filters.browse_only));
        insert_opt(&mut record, Self::ONLINE_ONLY, encode_flag(filters.online_only));
        insert_range(&mut record, Self::CLOUD_COVER, &filters.cloud_cover);
        insert_range(&mut record, Self::ORBIT_NUMBER, &filters.orbit_number);
        insert_range(
            &mut record,
            Self::EQUATOR_CROSSING_LONGITUDE,
            &filters.equator_crossing_longitude,
        );
        if let Some(dates) = encode_date_range(&filters.equator_crossing_date) {
            record.insert(Self::EQUATOR_CROSSING_DATE.to_string(), ParamValue::Map(dates));
        }
        if !filters.readable_granule_name.is_empty() {
            record.insert(
                Self::READABLE_GRANULE_NAME.to_string(),
                ParamValue::Str(filters.readable_granule_name.join("!")),
            );
        }
        record
    }

    fn decode(&self, record: &ParamMap) -> GranuleFilters {
        GranuleFilters {
            temporal: get_str(record, Self::TEMPORAL)
                .map(decode_temporal)
                .unwrap_or_default(),
            day_night_flag: get_str(record, Self::DAY_NIGHT_FLAG).map(str::to_string),
            browse_only: get_str(record, Self::BROWSE_ONLY) == Some(TRUE_TOKEN),
            online_only: get_str(record, Self::ONLINE_ONLY) == Some(TRUE_TOKEN),
            cloud_cover: decode_range(record, Self::CLOUD_COVER),
            orbit_number: decode_range(record, Self::ORBIT_NUMBER),
            equator_crossing_longitude: decode_range(record, Self::EQUATOR_CROSSING_LONGITUDE),
            equator_crossing_date: decode_date_range(record, Self::EQUATOR_CROSSING_DATE),
            readable_granule_name: get_str(record, Self::READABLE_GRANULE_NAME)
                .map(|names| {
                    names
                        .split('!')
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn encode_flag(enabled: bool) -> Option<String> {
    enabled.then(|| TRUE_TOKEN.to_string())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|value| !value.is_empty()).cloned()
}

fn insert_range(record: &mut ParamMap, alias: &str, range: &RangeFilter) {
    let range = RangeFilter {
        min: non_empty(range.min.as_ref()),
        max: non_empty(range.max.as_ref()),
    };
    if range.is_empty() {
        return;
    }
    let mut bounds = ParamMap::new();
    insert_opt(&mut bounds, "min", range.min);
    insert_opt(&mut bounds, "max", range.max);
    record.insert(alias.to_string(), ParamValue::Map(bounds));
}

fn decode_range(record: &ParamMap, alias: &str) -> RangeFilter {
    let Some(bounds) = record.get(alias).and_then(ParamValue::as_map) else {
        return RangeFilter::default();
    };
    RangeFilter {
        min: get_str(bounds, "min").map(str::to_string),
        max: get_str(bounds, "max").map(str::to_string),
    }
}

fn encode_date_range(range: &DateRangeFilter) -> Option<ParamMap> {
    let range = DateRangeFilter {
        start_date: non_empty(range.start_date.as_ref()),
        end_date: non_empty(range.end_date.as_ref()),
    };
    if range.is_empty() {
        return None;
    }
    let mut dates = ParamMap::new();
    insert_opt(&mut dates, "start", range.start_date);
    insert_opt(&mut dates, "end", range.end_date);
    Some(dates)
}

fn decode_date_range(record: &ParamMap, alias: &str) -> DateRangeFilter {
    let Some(dates) = record.get(alias).and_then(ParamValue::as_map) else {
        return DateRangeFilter::default();
    };
    DateRangeFilter {
        start_date: get_str(dates, "start").map(str::to_string),
        end_date: get_str(dates, "end").map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_aliases_do_not_collide_with_collection_aliases() {
        for alias in GranuleFiltersCodec::ALIASES {
            assert!(!RESERVED_ALIASES.contains(&alias), "{alias} is reserved");
        }
    }

    #[test]
    fn empty_filters_encode_nothing() {
        assert!(GranuleFiltersCodec.encode(&GranuleFilters::default()).is_empty());
        assert_eq!(
            GranuleFiltersCodec.decode(&ParamMap::new()),
            GranuleFilters::default()
        );
    }

    #[test]
    fn filters_roundtrip() {
        let filters = GranuleFilters {
            day_night_flag: Some("DAY".to_string()),
            browse_only: true,
            cloud_cover: RangeFilter {
                min: Some("0".to_string()),
                max: Some("40".to_string()),
            },
            equator_crossing_date: DateRangeFilter {
                start_date: Some("2019-01-01T00:00:00.000Z".to_string()),
                end_date: None,
            },
            readable_granule_name: vec!["MOD*".to_string(), "MYD*".to_string()],
            ..GranuleFilters::default()
        };
        let record = GranuleFiltersCodec.encode(&filters);
        assert_eq!(get_str(&record, "bo"), Some("t"));
        assert_eq!(get_str(&record, "id"), Some("MOD*!MYD*"));
        assert!(!record.contains_key("oo"));
        assert_eq!(GranuleFiltersCodec.decode(&record), filters);
    }

    #[test]
    fn blank_bounds_are_left_out() {
        let filters = GranuleFilters {
            cloud_cover: RangeFilter {
                min: Some(String::new()),
                max: Some("40".to_string()),
            },
            orbit_number: RangeFilter {
                min: Some(String::new()),
                max: None,
            },
            equator_crossing_date: DateRangeFilter {
                start_date: Some(String::new()),
                end_date: Some(String::new()),
            },
            ..GranuleFilters::default()
        };
        let record = GranuleFiltersCodec.encode(&filters);
        assert_eq!(
            record.get("cc"),
            Some(&ParamValue::Map(ParamMap::from([(
                "max".to_string(),
                ParamValue::from("40")
            )])))
        );
        assert!(!record.contains_key("on"));
        assert!(!record.contains_key("ecd"));
    }
}
