use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A taught module. Programme membership lives on
/// [`ProgrammeModule`](super::ProgrammeModule); the denormalized
/// `programme_id`/`programme_name` fields are display conveniences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    pub code: String,
    pub name: String,
    pub credits: Option<u32>,
    pub programme_id: Option<String>,
    pub programme_name: Option<String>,
}
