//! Storage key constants.
//!
//! The version suffix is part of the key, not of the envelope: bumping a
//! suffix abandons old data under the previous key, while the envelope's
//! `schema_version` migrates data in place. Evaluations are at v4 from
//! earlier shape changes; everything else is still v1.

pub const EVALUATIONS: &str = "delta_evaluations_v4";
pub const EVALUATIONS_HISTORY: &str = "delta_evaluations_history_v1";
pub const PROGRAMMES: &str = "delta_programmes_v1";
pub const MODULES: &str = "delta_modules_v1";
pub const PROGRAMME_MODULES: &str = "delta_programme_modules_v1";
pub const PROGRAMME_CHAIRS: &str = "delta_programme_chairs_v1";
pub const MODULE_OWNERS: &str = "delta_module_owners_v1";
pub const PROGRAMME_PROFILES: &str = "delta_programme_profiles_v1";
pub const PROGRAMME_TEAM_MEMBERS: &str = "delta_programme_team_members_v1";
pub const PROGRAMME_TAKING_STOCK: &str = "delta_programme_taking_stock_v1";
pub const PROGRAMME_PRIORITIES: &str = "delta_programme_priorities_v1";
pub const PROGRAMME_THEMES: &str = "delta_programme_themes_v1";
pub const PROGRAMME_GOALS: &str = "delta_programme_goals_v1";
pub const SESSION: &str = "delta_session_v1";
