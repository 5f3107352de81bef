//! Team member model. Kept deliberately small: the team page only lists
//! members, so the record carries identity plus display fields.

use crate::model::{validate_name, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a team member.
pub type MemberId = Uuid;

/// Validated creation input for a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamMember {
    pub name: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: Option<String>,
}

impl TeamMember {
    /// Builds a member from validated input with a generated stable id.
    pub fn create(input: NewTeamMember) -> Result<Self, ValidationError> {
        validate_name("team member", &input.name)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            role: input.role,
        })
    }
}
