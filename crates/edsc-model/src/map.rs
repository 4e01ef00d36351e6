//! Map view state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Projection {
    #[default]
    Geographic,
    Arctic,
    Antarctic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BaseLayer {
    #[default]
    BlueMarble,
    TrueColor,
    LandWaterMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Overlay {
    ReferenceFeatures,
    Coastlines,
    ReferenceLabels,
}

/// Position and layer selection of the map.
///
/// The default is the "home" view, which is never written to a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub projection: Projection,
    pub base: BaseLayer,
    pub overlays: Vec<Overlay>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 2.0,
            projection: Projection::Geographic,
            base: BaseLayer::BlueMarble,
            overlays: vec![Overlay::ReferenceFeatures, Overlay::ReferenceLabels],
        }
    }
}

impl MapView {
    /// Returns true for the default home view.
    pub fn is_home(&self) -> bool {
        *self == Self::default()
    }
}
