use delta_core::entities::SmartGoal;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::GoalCommands;
use crate::commands::shared::read_json_payload;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: GoalCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        GoalCommands::List { programme } => {
            output(&ctx.store.programme_goals(&programme), flags.format)
        }
        GoalCommands::Seed { programme } => {
            ctx.store.require_user()?;
            output(&ctx.store.goals_or_seed(&programme), flags.format)
        }
        GoalCommands::Add { programme, theme } => {
            ctx.store.require_user()?;
            let goal = ctx.store.add_goal(&programme, &theme);
            output(&goal, flags.format)
        }
        GoalCommands::Save { programme, file } => {
            ctx.store.require_user()?;
            let goals: Vec<SmartGoal> = read_json_payload(file.as_deref())?;
            ctx.store.save_goals(&programme, goals);
            output(&ctx.store.programme_goals(&programme), flags.format)
        }
        GoalCommands::Remove { id } => {
            ctx.store.require_user()?;
            ctx.store.remove_goal(&id);
            Ok(())
        }
    }
}
