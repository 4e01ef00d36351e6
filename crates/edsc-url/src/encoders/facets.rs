//! Facet value lists joined with `!`.

pub fn encode_facets(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join("!"))
}

pub fn decode_facets(value: &str) -> Vec<String> {
    value
        .split('!')
        .filter(|facet| !facet.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facets_keep_selection_order() {
        let values = vec!["Terra".to_string(), "Aqua".to_string()];
        assert_eq!(encode_facets(&values).as_deref(), Some("Terra!Aqua"));
        assert_eq!(decode_facets("Terra!Aqua"), values);
        assert_eq!(encode_facets(&[]), None);
    }
}
