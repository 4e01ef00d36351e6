//! Value codecs for individual state fields.
//!
//! Every encoder returns `None` for a field at its default so the key is left
//! out of the link; every decoder maps malformed input to a best-effort value
//! instead of failing.

pub mod facets;
pub mod features;
pub mod map;
pub mod science_keywords;
pub mod string;
pub mod temporal;
pub mod timeline;
