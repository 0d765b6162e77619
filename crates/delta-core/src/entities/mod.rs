//! Domain entities persisted by the key-value store.

mod action_plan;
mod evaluation;
mod links;
mod module;
mod profile;
mod programme;
mod taking_stock;
mod user;

pub use action_plan::{PriorityTheme, ProgrammePriority, SmartGoal};
pub use evaluation::{
    Artefact, ModuleAssessment, ModuleEvaluation, ModuleEvaluationHistory, ModuleMetadata,
};
pub use links::{ModuleOwner, ProgrammeChair, ProgrammeModule};
pub use module::Module;
pub use profile::{ProgrammeProfile, ProgrammeTeamMember};
pub use programme::Programme;
pub use taking_stock::{ProgrammeTakingStock, TakingStockCategoryData, TakingStockImprovement};
pub use user::User;
