pub mod evaluation;
pub mod goal;
pub mod module;
pub mod priority;
pub mod profile;
pub mod programme;
pub mod taking_stock;
pub mod theme;

pub use evaluation::EvaluationCommands;
pub use goal::GoalCommands;
pub use module::ModuleCommands;
pub use priority::PriorityCommands;
pub use profile::ProfileCommands;
pub use programme::ProgrammeCommands;
pub use taking_stock::TakingStockCommands;
pub use theme::ThemeCommands;
