//! Project domain model.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `progress` stays within 0..=100.
//! - New projects always start as `Active` with `progress = 0`.

use crate::model::task::Priority;
use crate::model::{validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

/// Validated creation input for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    /// Calendar date as entered, e.g. `2024-06-01`.
    pub due_date: Option<String>,
}

/// A single project record.
///
/// Serialized with camelCase keys to match the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub due_date: Option<String>,
    /// Unix epoch milliseconds at creation time.
    pub created_at: i64,
    /// Completion percentage, 0..=100.
    pub progress: u8,
}

impl Project {
    /// Builds a project from validated input with a generated stable id.
    ///
    /// # Contract
    /// - Rejects empty/whitespace `name`; no partial project is created.
    /// - Defaults `status = Active` and `progress = 0`.
    pub fn create(input: NewProject, created_at: i64) -> Result<Self, ValidationError> {
        validate_name("project", &input.name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            status: ProjectStatus::Active,
            priority: input.priority,
            due_date: input.due_date,
            created_at,
            progress: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{NewProject, Project, ProjectStatus};
    use crate::model::task::Priority;

    #[test]
    fn create_applies_defaults() {
        let project = Project::create(
            NewProject {
                name: "Website Redesign".to_string(),
                description: "Refresh the marketing site".to_string(),
                priority: Priority::High,
                due_date: Some("2024-06-01".to_string()),
            },
            1_700_000_000_000,
        )
        .unwrap();

        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.progress, 0);
        assert_eq!(project.created_at, 1_700_000_000_000);
        assert_eq!(project.due_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = Project::create(
            NewProject {
                name: " ".to_string(),
                description: String::new(),
                priority: Priority::Low,
                due_date: None,
            },
            0,
        );
        assert!(result.is_err());
    }
}
