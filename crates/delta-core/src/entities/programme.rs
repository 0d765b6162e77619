use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A taught programme of study, the unit around which evaluation and
/// action-planning revolve.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Programme {
    pub id: String,
    pub code: String,
    pub name: String,
    pub school: Option<String>,
    pub faculty: Option<String>,
    pub discipline_area: Option<String>,
    pub nfq_level: Option<String>,
    pub mode: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
