//! Store snapshots read from disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::state::SearchState;

/// A store snapshot paired with the route it was taken on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub pathname: String,
    pub state: SearchState,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        if !snapshot.pathname.is_empty() && !snapshot.pathname.starts_with('/') {
            return Err(ModelError::Message(format!(
                "pathname must start with '/': {}",
                snapshot.pathname
            )));
        }
        Ok(snapshot)
    }
}

/// Read a snapshot JSON file.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let json = fs::read_to_string(path)?;
    Snapshot::from_json(&json)
}
