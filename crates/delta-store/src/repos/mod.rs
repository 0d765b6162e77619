//! Repositories: `impl DeltaStore` blocks, one file per entity family.

mod evaluations;
mod goals;
mod modules;
mod priorities;
mod profiles;
mod programmes;
mod taking_stock;
mod themes;

pub use evaluations::SaveOutcome;
pub use modules::{ModuleLinkResult, ProgrammeModuleView};
