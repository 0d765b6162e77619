use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&username, &password, ctx, flags)
        }
        Commands::Logout => commands::auth::logout(ctx, flags),
        Commands::Whoami => commands::auth::whoami(ctx, flags),
        Commands::SeedDemo => commands::seed::handle(ctx, flags),
        Commands::Framework => commands::framework::handle(flags),
        Commands::Programme { action } => commands::programme::handle(action, ctx, flags),
        Commands::Profile { action } => commands::profile::handle(action, ctx, flags),
        Commands::Module { action } => commands::module::handle(action, ctx, flags),
        Commands::Evaluation { action } => commands::evaluation::handle(action, ctx, flags),
        Commands::TakingStock { action } => commands::taking_stock::handle(action, ctx, flags),
        Commands::Priority { action } => commands::priority::handle(action, ctx, flags),
        Commands::Theme { action } => commands::theme::handle(action, ctx, flags),
        Commands::Goal { action } => commands::goal::handle(action, ctx, flags),
    }
}
