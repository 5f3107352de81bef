//! Domain model for projects, tasks and team members.
//!
//! # Responsibility
//! - Define the canonical entity records and their creation inputs.
//! - Enforce required-field validation before any entity is constructed.
//!
//! # Invariants
//! - Every entity id is assigned once at creation and never reassigned.
//! - No partial entity exists: validation failure means nothing was built.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project;
pub mod snapshot;
pub mod task;
pub mod team;

/// Validation failure for entity creation inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The required `name` field is empty or whitespace-only.
    EmptyName { entity: &'static str },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { entity } => write!(f, "{entity} name cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_name(entity: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { entity });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_name, ValidationError};

    #[test]
    fn whitespace_only_name_is_rejected() {
        let err = validate_name("task", "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName { entity: "task" });
        assert!(err.to_string().contains("task name"));
    }

    #[test]
    fn non_empty_name_passes() {
        assert!(validate_name("project", "Website Redesign").is_ok());
    }
}
