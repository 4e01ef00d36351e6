//! Parameter records exchanged between the field codecs and the query
//! string serializer.

use std::collections::BTreeMap;

use serde::Serialize;

/// A parameter record keyed by short alias.
///
/// Keys iterate in sorted order, which is also the order the serializer
/// emits them in.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A single parameter value.
/// Serializes as plain JSON: strings, arrays and objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    List(Vec<ParamValue>),
    Map(ParamMap),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ParamMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Sub-record at a positional index.
    ///
    /// Encoded records hold `pg` as a list; parsed query strings hold it as a
    /// map keyed by the decimal index, since bracketed keys are never turned
    /// back into arrays.
    pub fn slot(&self, index: usize) -> Option<&ParamMap> {
        match self {
            Self::List(items) => items.get(index).and_then(Self::as_map),
            Self::Map(map) => map.get(&index.to_string()).and_then(Self::as_map),
            Self::Str(_) => None,
        }
    }

    /// True for values the serializer would drop.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Str(value) => value.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(_) => false,
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<ParamMap> for ParamValue {
    fn from(map: ParamMap) -> Self {
        Self::Map(map)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Converts arbitrary JSON into a parameter value. Scalars are rendered the
/// way they would appear in a query string; `null` becomes an empty string.
impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Str(String::new()),
            Value::Bool(flag) => Self::Str(flag.to_string()),
            Value::Number(number) => Self::Str(number.to_string()),
            Value::String(text) => Self::Str(text),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Scalar string stored under `key`, if any.
pub fn get_str<'a>(record: &'a ParamMap, key: &str) -> Option<&'a str> {
    record.get(key).and_then(ParamValue::as_str)
}

/// Insert `value` under `key` when present.
pub fn insert_opt(record: &mut ParamMap, key: &str, value: Option<String>) {
    if let Some(value) = value {
        record.insert(key.to_string(), ParamValue::Str(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_json() {
        let record = ParamMap::from([
            ("p".to_string(), ParamValue::from("C1-PROV")),
            (
                "pg".to_string(),
                ParamValue::List(vec![
                    ParamValue::Map(ParamMap::new()),
                    ParamValue::Map(ParamMap::from([("v".to_string(), ParamValue::from("t"))])),
                ]),
            ),
        ]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({ "p": "C1-PROV", "pg": [{}, { "v": "t" }] })
        );
    }
}
