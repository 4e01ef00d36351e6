//! Feature facets: the enabled feature labels joined with `!`.

use edsc_model::FeatureFacets;

const MAP_IMAGERY: &str = "Map Imagery";
const NEAR_REAL_TIME: &str = "Near Real Time";
const CUSTOMIZABLE: &str = "Customizable";

pub fn encode_features(features: &FeatureFacets) -> Option<String> {
    let enabled: Vec<&str> = [
        (features.map_imagery, MAP_IMAGERY),
        (features.near_real_time, NEAR_REAL_TIME),
        (features.customizable, CUSTOMIZABLE),
    ]
    .into_iter()
    .filter_map(|(enabled, label)| enabled.then_some(label))
    .collect();
    (!enabled.is_empty()).then(|| enabled.join("!"))
}

pub fn decode_features(value: &str) -> FeatureFacets {
    let labels: Vec<&str> = value.split('!').collect();
    FeatureFacets {
        map_imagery: labels.contains(&MAP_IMAGERY),
        near_real_time: labels.contains(&NEAR_REAL_TIME),
        customizable: labels.contains(&CUSTOMIZABLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_encode_enabled_labels() {
        let features = FeatureFacets {
            map_imagery: true,
            near_real_time: false,
            customizable: true,
        };
        let encoded = encode_features(&features).unwrap();
        assert_eq!(encoded, "Map Imagery!Customizable");
        assert_eq!(decode_features(&encoded), features);
        assert_eq!(encode_features(&FeatureFacets::default()), None);
    }
}
