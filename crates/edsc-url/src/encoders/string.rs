//! Plain string fields, written verbatim and omitted when empty.

/// Plain strings; an empty string is the same as no value.
pub fn encode_string(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn decode_string(value: &str) -> String {
    value.to_string()
}
