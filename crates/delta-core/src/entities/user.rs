use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// An account from the static credential table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<Role>,
}
