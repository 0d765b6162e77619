use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, MaturityLevel, Provenance};

/// One candidate improvement for a category, either produced by synthesis or
/// entered by a user. Selection here feeds the programme priority list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TakingStockImprovement {
    pub id: String,
    pub component_id: Category,
    pub text: String,
    pub generated_by: Provenance,
    pub selected_as_priority: bool,
    pub created_at: DateTime<Utc>,
}

/// The team's Taking Stock record for one category: the synthesized
/// recommendation plus the team's own judgement over it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TakingStockCategoryData {
    pub recommended_level: MaturityLevel,
    /// The team's chosen level. `None` means not yet confirmed.
    pub selected_level: Option<MaturityLevel>,
    pub rationale_override: Option<String>,
    /// Auto-populated evidence lines from the synthesis snapshot.
    #[serde(default)]
    pub evidence_summary: Vec<String>,
    #[serde(default)]
    pub what_we_do_well: String,
    /// Free-text fallback kept for records predating structured improvements.
    #[serde(default)]
    pub areas_for_development: String,
    #[serde(default)]
    pub improvements: Vec<TakingStockImprovement>,
    pub updated_at: DateTime<Utc>,
}

/// Per-programme, per-year Taking Stock document. Categories are filled in
/// independently as the team works through them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammeTakingStock {
    pub id: String,
    pub programme_id: String,
    pub academic_year: String,
    #[serde(default)]
    pub categories: BTreeMap<Category, TakingStockCategoryData>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
