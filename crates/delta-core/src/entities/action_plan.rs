use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, Provenance};

/// An improvement promoted onto the programme's priority list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammePriority {
    pub id: String,
    pub programme_id: String,
    pub component_id: Category,
    pub text: String,
    pub selected: bool,
    pub generated_by: Provenance,
    pub created_at: DateTime<Utc>,
}

/// A named grouping of selected priorities, the unit SMART goals attach to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PriorityTheme {
    pub id: String,
    pub programme_id: String,
    pub title: String,
    #[serde(default)]
    pub linked_priority_ids: Vec<String>,
    pub rationale: String,
    pub created_at: DateTime<Utc>,
}

/// A SMART goal under a theme. All narrative fields start empty when the
/// action plan seeds a fresh goal per theme.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SmartGoal {
    pub id: String,
    pub theme_id: String,
    pub programme_id: String,
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
    pub partners: String,
    pub resources: String,
    pub risks: String,
    pub sustainability: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: DateTime<Utc>,
    pub responsible_roles: Option<String>,
    pub dependencies: Option<String>,
    pub milestones: Option<String>,
    pub modules_impacted: Option<String>,
}

impl SmartGoal {
    /// A blank goal attached to `theme_id`, as seeded for a fresh action plan.
    #[must_use]
    pub fn blank(id: String, theme_id: String, programme_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            theme_id,
            programme_id,
            specific: String::new(),
            measurable: String::new(),
            achievable: String::new(),
            relevant: String::new(),
            time_bound: String::new(),
            partners: String::new(),
            resources: String::new(),
            risks: String::new(),
            sustainability: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            created_at: now,
            responsible_roles: None,
            dependencies: None,
            milestones: None,
            modules_impacted: None,
        }
    }
}
