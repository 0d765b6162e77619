//! CLI response types returned as JSON by `delta` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ModuleEvaluation, PriorityTheme, User};
use crate::enums::{Category, MaturityLevel};

/// Response from `delta login`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoginResponse {
    pub user: User,
}

/// Response from `delta whoami`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WhoamiResponse {
    pub user: Option<User>,
}

/// Response from `delta evaluate save`.
///
/// `warnings` carries non-blocking validation notes, e.g. an assessment
/// weight total outside the accepted band.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluationSaveResponse {
    pub evaluation: ModuleEvaluation,
    pub version_number: u32,
    pub warnings: Vec<String>,
}

/// Per-category aggregate across a programme's evaluated modules.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub label: String,
    pub average_score: f64,
    pub level: MaturityLevel,
    pub modules_evaluated: u32,
}

/// Response from `delta programme overview`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgrammeOverviewResponse {
    pub programme_id: String,
    pub programme_name: String,
    pub academic_year: String,
    pub modules_total: u32,
    pub modules_evaluated: u32,
    pub category_summaries: Vec<CategorySummary>,
}

/// Response from `delta themes generate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThemesGenerateResponse {
    pub themes: Vec<PriorityTheme>,
    pub goals_seeded: u32,
}

/// Response from `delta seed-demo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedDemoResponse {
    pub seeded: bool,
    pub programmes: u32,
    pub modules: u32,
    pub evaluations: u32,
}
