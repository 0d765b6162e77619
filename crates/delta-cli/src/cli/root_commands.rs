use clap::Subcommand;

use super::subcommands::{
    EvaluationCommands, GoalCommands, ModuleCommands, PriorityCommands, ProfileCommands,
    ProgrammeCommands, TakingStockCommands, ThemeCommands,
};

/// Root command tree of the `delta` binary.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in with a demo account.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Show the logged-in user.
    Whoami,
    /// Seed the demo dataset into an empty store.
    SeedDemo,
    /// Show the DELTA framework: categories, indicators, and Likert
    /// questions with their answer-map keys.
    Framework,
    /// Programme commands.
    Programme {
        #[command(subcommand)]
        action: ProgrammeCommands,
    },
    /// Programme profile and team roster commands.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Module and programme-module link commands.
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Module evaluation commands.
    Evaluation {
        #[command(subcommand)]
        action: EvaluationCommands,
    },
    /// Programme Taking Stock commands.
    TakingStock {
        #[command(subcommand)]
        action: TakingStockCommands,
    },
    /// Priority selection commands.
    Priority {
        #[command(subcommand)]
        action: PriorityCommands,
    },
    /// Priority theme commands.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// SMART goal commands.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
}
