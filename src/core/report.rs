use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::statement::GroupInterpretation;
use crate::core::types::{LocusGroup, ProfileLayout};

/// Full interpretation of one subject's trait results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Layout of the source profile, when the genotypes came from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<ProfileLayout>,

    pub generated_at: DateTime<Utc>,

    /// One entry per group, in report order
    pub groups: Vec<GroupInterpretation>,

    /// Called codes that are not in the registry vocabulary
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn group(&self, group: LocusGroup) -> Option<&GroupInterpretation> {
        self.groups.iter().find(|g| g.group == group)
    }

    /// True if every group was fully processed and no vocabulary warning was raised
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.groups.iter().all(|g| g.outcome.is_complete())
    }

    #[must_use]
    pub fn attention_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(GroupInterpretation::statements)
            .filter(|s| s.is_attention())
            .count()
    }
}
