use crate::cli::GlobalFlags;
use crate::cli::subcommands::PriorityCommands;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: PriorityCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PriorityCommands::List { programme } => {
            let year = ctx.academic_year(flags);
            output(&ctx.store.priority_view(&programme, year), flags.format)
        }
        PriorityCommands::Select { programme, ids } => {
            ctx.store.require_user()?;
            let year = ctx.academic_year(flags).to_string();
            let mut priorities = ctx.store.priority_view(&programme, &year);
            for priority in &mut priorities {
                priority.selected = ids.contains(&priority.id);
            }
            ctx.store
                .save_priorities(&programme, &year, priorities.clone());
            output(&priorities, flags.format)
        }
        PriorityCommands::Selected { programme } => {
            output(&ctx.store.selected_priorities(&programme), flags.format)
        }
    }
}
