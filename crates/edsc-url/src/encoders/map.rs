//! Map view: `latitude!longitude!zoom!projection!base!overlays`.
//!
//! Projection, base layer and overlays are written as small numeric codes;
//! overlays are comma separated. The home view is never written.

use edsc_model::{BaseLayer, MapView, Overlay, Projection};
use tracing::trace;

fn projection_code(projection: Projection) -> &'static str {
    match projection {
        Projection::Geographic => "0",
        Projection::Arctic => "1",
        Projection::Antarctic => "2",
    }
}

fn projection_from_code(code: &str) -> Option<Projection> {
    match code {
        "0" => Some(Projection::Geographic),
        "1" => Some(Projection::Arctic),
        "2" => Some(Projection::Antarctic),
        _ => None,
    }
}

fn base_code(base: BaseLayer) -> &'static str {
    match base {
        BaseLayer::BlueMarble => "0",
        BaseLayer::TrueColor => "1",
        BaseLayer::LandWaterMap => "2",
    }
}

fn base_from_code(code: &str) -> Option<BaseLayer> {
    match code {
        "0" => Some(BaseLayer::BlueMarble),
        "1" => Some(BaseLayer::TrueColor),
        "2" => Some(BaseLayer::LandWaterMap),
        _ => None,
    }
}

fn overlay_code(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::ReferenceFeatures => "0",
        Overlay::Coastlines => "1",
        Overlay::ReferenceLabels => "2",
    }
}

fn overlay_from_code(code: &str) -> Option<Overlay> {
    match code {
        "0" => Some(Overlay::ReferenceFeatures),
        "1" => Some(Overlay::Coastlines),
        "2" => Some(Overlay::ReferenceLabels),
        _ => None,
    }
}

fn canonical_overlays(overlays: &[Overlay]) -> Vec<Overlay> {
    let mut overlays = overlays.to_vec();
    overlays.sort();
    overlays.dedup();
    overlays
}

pub fn encode_map(map: &MapView) -> Option<String> {
    let overlays = canonical_overlays(&map.overlays);
    let canonical = MapView {
        overlays,
        ..map.clone()
    };
    if canonical.is_home() {
        return None;
    }
    let overlays: Vec<&str> = canonical.overlays.iter().copied().map(overlay_code).collect();
    Some(
        [
            canonical.latitude.to_string(),
            canonical.longitude.to_string(),
            canonical.zoom.to_string(),
            projection_code(canonical.projection).to_string(),
            base_code(canonical.base).to_string(),
            overlays.join(","),
        ]
        .join("!"),
    )
}

pub fn decode_map(value: &str) -> MapView {
    let defaults = MapView::default();
    let parts: Vec<&str> = value.split('!').collect();
    let part = |index: usize| parts.get(index).copied().unwrap_or_default();
    let number = |index: usize, fallback: f64| match part(index).parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => {
            trace!(component = part(index), "using default map component");
            fallback
        }
    };

    MapView {
        latitude: number(0, defaults.latitude),
        longitude: number(1, defaults.longitude),
        zoom: number(2, defaults.zoom),
        projection: projection_from_code(part(3)).unwrap_or(defaults.projection),
        base: base_from_code(part(4)).unwrap_or(defaults.base),
        overlays: match parts.get(5) {
            Some(codes) => canonical_overlays(
                &codes
                    .split(',')
                    .filter_map(overlay_from_code)
                    .collect::<Vec<_>>(),
            ),
            None => defaults.overlays,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_view_is_omitted() {
        assert_eq!(encode_map(&MapView::default()), None);
        let reordered = MapView {
            overlays: vec![Overlay::ReferenceLabels, Overlay::ReferenceFeatures],
            ..MapView::default()
        };
        assert_eq!(encode_map(&reordered), None);
    }

    #[test]
    fn map_view_roundtrip() {
        let map = MapView {
            latitude: 64.5,
            longitude: -147.25,
            zoom: 4.0,
            projection: Projection::Arctic,
            base: BaseLayer::TrueColor,
            overlays: vec![Overlay::Coastlines],
        };
        let encoded = encode_map(&map).unwrap();
        assert_eq!(encoded, "64.5!-147.25!4!1!1!1");
        assert_eq!(decode_map(&encoded), map);
    }

    #[test]
    fn zero_coordinates_survive() {
        let map = MapView {
            zoom: 5.0,
            ..MapView::default()
        };
        let encoded = encode_map(&map).unwrap();
        assert_eq!(encoded, "0!0!5!0!0!0,2");
        assert_eq!(decode_map(&encoded), map);
    }

    #[test]
    fn malformed_components_fall_back() {
        let decoded = decode_map("abc!10!!9");
        assert_eq!(decoded.latitude, 0.0);
        assert_eq!(decoded.longitude, 10.0);
        assert_eq!(decoded.zoom, 2.0);
        assert_eq!(decoded.projection, Projection::Geographic);
        assert_eq!(decoded.overlays, MapView::default().overlays);
    }
}
