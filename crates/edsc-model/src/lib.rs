//! Search state model for shareable search links.
//!
//! These types mirror the slices of the application store that a search URL
//! can carry: the focused collection and granule, query constraints, map and
//! timeline view state, facet selections, and the collection/project
//! structure. They serialize in camelCase so a store snapshot can be loaded
//! from JSON as-is.

pub mod collection;
pub mod error;
pub mod facets;
pub mod map;
pub mod query;
pub mod snapshot;
pub mod state;
pub mod timeline;

pub use collection::{
    AccessMethod, CollectionEntry, Collections, DateRangeFilter, GranuleFilters, Placeholder,
    Project, ProjectCollection, RangeFilter, OPENDAP_ACCESS_METHOD,
};
pub use error::{ModelError, Result};
pub use facets::{CmrFacets, FeatureFacets, ScienceKeyword};
pub use map::{BaseLayer, MapView, Overlay, Projection};
pub use query::{QueryState, Spatial, Temporal};
pub use snapshot::{Snapshot, read_snapshot};
pub use state::SearchState;
pub use timeline::{Timeline, TimelineInterval};
