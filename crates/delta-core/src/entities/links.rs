use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CoreElective, Semester};

/// Programme membership of a module, with delivery placement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammeModule {
    pub id: String,
    pub programme_id: String,
    pub module_id: String,
    pub stage: Option<u8>,
    pub semester: Option<Semester>,
    pub is_core: Option<CoreElective>,
}

/// A user who leads a module.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModuleOwner {
    pub id: String,
    pub user_id: String,
    pub module_id: String,
}

/// A user who chairs a programme.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgrammeChair {
    pub id: String,
    pub user_id: String,
    pub programme_id: String,
}
