//! Persisted snapshot shape.
//!
//! # Responsibility
//! - Define the full serialized form of domain state at one point in time.
//! - Keep the JSON layout stable: `{projects, tasks, team}` with camelCase
//!   entity fields.
//!
//! # Invariants
//! - The snapshot carries domain state only; transient UI state (current
//!   page, modal visibility) never enters the persisted form.
//! - Missing top-level lists deserialize as empty, so older blobs that
//!   predate the `team` list still load.

use crate::model::project::Project;
use crate::model::task::Task;
use crate::model::team::TeamMember;
use serde::{Deserialize, Serialize};

/// Full persisted domain state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

impl Snapshot {
    /// Serializes the snapshot to its JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a snapshot from its JSON wire form.
    ///
    /// Unknown top-level fields are ignored, so blobs written by the
    /// superseded flat layout (which mixed in transient UI fields) still
    /// yield their project/task lists.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
