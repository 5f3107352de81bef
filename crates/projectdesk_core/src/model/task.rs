//! Task domain model.
//!
//! # Invariants
//! - `id` is stable across completion toggles and never reused.
//! - `completed` starts as `false` and only flips through toggle.

use crate::model::{validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Urgency level shared by tasks and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Validated creation input for a task.
///
/// Explicit per-entity input struct instead of spreading arbitrary form
/// fields into the record, so optional fields cannot drift the data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Calendar date as entered, e.g. `2024-06-01`.
    pub due_date: Option<String>,
}

/// A single actionable task.
///
/// Serialized with camelCase keys to match the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<String>,
    /// Unix epoch milliseconds at creation time.
    pub created_at: i64,
    pub completed: bool,
}

impl Task {
    /// Builds a task from validated input with a generated stable id.
    ///
    /// # Contract
    /// - Rejects empty/whitespace `name`; no partial task is created.
    /// - `completed` starts as `false`.
    pub fn create(input: NewTask, created_at: i64) -> Result<Self, ValidationError> {
        validate_name("task", &input.name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            priority: input.priority,
            due_date: input.due_date,
            created_at,
            completed: false,
        })
    }

    /// Flips completion state in place. The id is untouched.
    pub fn toggle_completion(&mut self) {
        self.completed = !self.completed;
    }
}
