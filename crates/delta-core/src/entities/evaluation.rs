use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ArtefactType, Category, MaturityLevel, TimingBand};

/// A supporting artefact attached to one evaluation category.
///
/// `content` is a file name, a URL, or free note text depending on
/// `artefact_type`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Artefact {
    #[serde(rename = "type")]
    pub artefact_type: ArtefactType,
    pub content: String,
}

/// One assessment component declared in a module's metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleAssessment {
    pub id: String,
    pub name: String,
    /// Free-text assessment type, e.g. `"exam"`, `"project"`, `"portfolio"`.
    pub assessment_type: String,
    /// Percentage weight. Zero marks a formative component.
    pub weight: f64,
    pub due_week: i32,
    pub shared: bool,
    pub shared_with: Option<String>,
    pub evidence_type: Option<ArtefactType>,
    pub evidence_content: Option<String>,
    /// Derived from `due_week`, stored denormalized for display.
    pub timing_band: TimingBand,
}

/// Structured context about a module, gathered alongside the Likert answers.
/// Most of the synthesis evidence predicates read from here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleMetadata {
    #[serde(default)]
    pub module_types: Vec<String>,
    #[serde(default)]
    pub teaching_team_size: String,
    #[serde(default)]
    pub cohort_characteristics: Vec<String>,

    #[serde(default)]
    pub assessments: Vec<ModuleAssessment>,

    #[serde(default)]
    pub udl_indicators: Vec<String>,
    #[serde(default)]
    pub digital_practice: Vec<String>,

    #[serde(default)]
    pub student_feedback_overall: u8,
    #[serde(default)]
    pub student_feedback_volume: String,

    #[serde(default)]
    pub module_risk_level: String,
    #[serde(default)]
    pub module_risk_reasons: Vec<String>,

    pub teaching_hours_band: Option<String>,
    pub marking_hours_band: Option<String>,

    pub policies_influencing: Option<String>,
    pub external_requirements: Option<String>,
    pub staff_development_influence: Option<String>,
    pub student_partnership: Option<String>,

    #[serde(default)]
    pub evidence_sources: Vec<String>,
    pub changes_last_3_years: Option<String>,
    pub student_feedback_summary: Option<String>,

    pub curriculum_connections: Option<String>,
    pub learning_environment_use: Option<String>,

    #[serde(default)]
    pub teaching_approaches: Vec<String>,
    pub transition_support: Option<String>,
    pub diversity_support: Option<String>,

    pub authentic_assessment_rationale: Option<String>,
    pub feedback_practices: Option<String>,
    pub self_peer_assessment: Option<bool>,
}

/// A module self-evaluation for one academic year.
///
/// `answers` is keyed `"{category_index}_{question_index}"` with values on the
/// 1–5 Likert scale. `category_scores` and `category_levels` are derived by
/// [`crate::scoring`] at save time and stored denormalized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleEvaluation {
    pub id: Option<String>,
    pub user_id: String,
    pub module_id: String,
    pub academic_year: String,
    #[serde(default)]
    pub answers: BTreeMap<String, u8>,
    #[serde(default)]
    pub category_scores: BTreeMap<Category, u8>,
    #[serde(default)]
    pub category_levels: BTreeMap<Category, MaturityLevel>,
    #[serde(default)]
    pub indicator_scores: BTreeMap<String, u8>,
    #[serde(default)]
    pub evidence_summaries: BTreeMap<Category, String>,
    #[serde(default)]
    pub artefacts: BTreeMap<Category, Artefact>,
    pub module_headline: Option<String>,
    pub metadata: Option<ModuleMetadata>,
    /// Last-saved timestamp, kept distinct from `updated_at` for backward
    /// compatibility with earlier record shapes.
    pub completed_at: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// An immutable snapshot of an evaluation, appended on every save.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ModuleEvaluationHistory {
    pub id: String,
    pub module_evaluation_id: String,
    pub module_id: String,
    /// 1-based, contiguous per evaluation.
    pub version_number: u32,
    pub snapshot: ModuleEvaluation,
    pub created_at: DateTime<Utc>,
}
