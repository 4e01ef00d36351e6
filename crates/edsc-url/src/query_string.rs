//! Query string serialization for shareable links.
//!
//! Records are written with bracketed keys (`pg[1][x]=...`) and read back
//! without array detection: `pg[1]` parses to a map keyed `"1"`, never to a
//! list. The link escaper leaves `!`, brackets and a few other characters raw
//! so links stay short and readable, while space, comma, colon and the URL
//! delimiters `?` and `#` are always percent-encoded.

use tracing::trace;

use crate::params::{ParamMap, ParamValue};

/// Maximum number of bracketed segments interpreted in a key.
pub const MAX_KEY_DEPTH: usize = 5;

/// How list elements are addressed when serializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayFormat {
    /// `key[0]=a&key[1]=b`
    Indices,
    /// `key[]=a&key[]=b`
    Brackets,
}

/// Serialize a record into a `?`-prefixed link query string.
///
/// Blank values are removed first (see [`clean`]). Returns an empty string
/// when nothing remains.
pub fn stringify(record: &ParamMap) -> String {
    let cleaned = clean(record);
    let pairs = serialize_pairs(&cleaned, ArrayFormat::Indices, escape_link_component);
    if pairs.is_empty() {
        return String::new();
    }
    format!("?{}", pairs.join("&"))
}

/// Recursively remove empty strings and empty lists.
///
/// Maps are always kept, even when empty, so that positional sub-records in a
/// list keep their index.
pub fn clean(record: &ParamMap) -> ParamMap {
    record
        .iter()
        .filter_map(|(key, value)| clean_value(value).map(|value| (key.clone(), value)))
        .collect()
}

fn clean_value(value: &ParamValue) -> Option<ParamValue> {
    let cleaned = match value {
        ParamValue::Str(_) => value.clone(),
        ParamValue::List(items) => ParamValue::List(items.iter().filter_map(clean_value).collect()),
        ParamValue::Map(map) => ParamValue::Map(clean(map)),
    };
    (!cleaned.is_blank()).then_some(cleaned)
}

/// Flatten a record into `key=value` pairs using the given escaper.
pub fn serialize_pairs(
    record: &ParamMap,
    format: ArrayFormat,
    escape: fn(&str) -> String,
) -> Vec<String> {
    let mut pairs = Vec::new();
    for (key, value) in record {
        push_pairs(&mut pairs, key, value, format, escape);
    }
    pairs
}

fn push_pairs(
    pairs: &mut Vec<String>,
    prefix: &str,
    value: &ParamValue,
    format: ArrayFormat,
    escape: fn(&str) -> String,
) {
    match value {
        ParamValue::Str(text) => pairs.push(format!("{}={}", escape(prefix), escape(text))),
        ParamValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = match format {
                    ArrayFormat::Indices => format!("{prefix}[{index}]"),
                    ArrayFormat::Brackets => format!("{prefix}[]"),
                };
                push_pairs(pairs, &key, item, format, escape);
            }
        }
        ParamValue::Map(map) => {
            for (key, item) in map {
                push_pairs(pairs, &format!("{prefix}[{key}]"), item, format, escape);
            }
        }
    }
}

/// Percent-encode a key or value for a shareable link.
pub fn escape_link_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_link_safe(byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn is_link_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"-_.~!*'()[]/@$;".contains(&byte)
}

/// Percent-encode with the standard RFC 3986 unreserved set.
pub fn escape_strict_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Parse a query string into a record.
///
/// A leading `?` is ignored. Both the link escaping and full percent-encoding
/// decode, and `+` is read as a space. When a key repeats, the first
/// occurrence wins.
pub fn parse(query: &str) -> ParamMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut record = ParamMap::new();
    for part in query.split('&').filter(|part| !part.is_empty()) {
        let (raw_key, raw_value) = part.split_once('=').unwrap_or((part, ""));
        let key = decode_component(raw_key);
        if key.is_empty() {
            continue;
        }
        let segments = key_segments(&key);
        insert_path(&mut record, &segments, decode_component(raw_value));
    }
    record
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(error) => {
            trace!(component = %raw, %error, "keeping undecodable component verbatim");
            spaced
        }
    }
}

/// Split `a[b][c]` into `["a", "b", "c"]`.
///
/// An empty bracket pair becomes `"0"`. Anything past [`MAX_KEY_DEPTH`]
/// segments, or after text that is not a bracket group, is kept as one
/// literal trailing segment.
fn key_segments(key: &str) -> Vec<String> {
    let Some(open) = key.find('[') else {
        return vec![key.to_string()];
    };
    let mut segments = Vec::new();
    if open > 0 {
        segments.push(key[..open].to_string());
    }
    let mut rest = &key[open..];
    let mut depth = 0;
    while depth < MAX_KEY_DEPTH && rest.starts_with('[') {
        let Some(close) = rest.find(']') else {
            break;
        };
        let inner = &rest[1..close];
        if inner.contains('[') {
            break;
        }
        segments.push(if inner.is_empty() {
            "0".to_string()
        } else {
            inner.to_string()
        });
        rest = &rest[close + 1..];
        depth += 1;
    }
    if !rest.is_empty() {
        segments.push(rest.to_string());
    }
    segments
}

fn insert_path(record: &mut ParamMap, segments: &[String], value: String) {
    let Some((head, tail)) = segments.split_first() else {
        return;
    };
    if tail.is_empty() {
        record
            .entry(head.clone())
            .or_insert(ParamValue::Str(value));
        return;
    }
    let entry = record
        .entry(head.clone())
        .or_insert_with(|| ParamValue::Map(ParamMap::new()));
    match entry {
        ParamValue::Map(child) => insert_path(child, tail, value),
        _ => trace!(key = %head, "ignoring nested key under a scalar value"),
    }
}
