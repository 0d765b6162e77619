use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contextual profile of a programme for one academic year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammeProfile {
    pub id: String,
    pub programme_id: String,
    pub academic_year: Option<String>,
    pub programme_rationale: Option<String>,
    pub annual_intake: Option<u32>,
    pub total_enrolment_across_stages: Option<u32>,
    #[serde(default)]
    pub levels_taught: Vec<String>,
    #[serde(default)]
    pub programme_variants: Vec<String>,
    pub team_collaboration_summary: Option<String>,
    pub student_involvement: Option<String>,
    pub created_by_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named member of the programme team for one academic year.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammeTeamMember {
    pub id: String,
    pub programme_id: String,
    pub academic_year: Option<String>,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
    pub contribution_focus: Option<String>,
    pub created_at: DateTime<Utc>,
}
