use delta_core::entities::PriorityTheme;
use delta_core::responses::ThemesGenerateResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::commands::shared::read_json_payload;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: ThemeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ThemeCommands::Generate { programme } => {
            ctx.store.require_user()?;
            let had_goals = !ctx.store.programme_goals(&programme).is_empty();
            let themes = ctx.store.themes_or_generate(&programme);
            let goals = ctx.store.goals_or_seed(&programme);
            let goals_seeded = if had_goals { 0 } else { goals.len() as u32 };
            output(
                &ThemesGenerateResponse {
                    themes,
                    goals_seeded,
                },
                flags.format,
            )
        }
        ThemeCommands::List { programme } => {
            output(&ctx.store.programme_themes(&programme), flags.format)
        }
        ThemeCommands::Save { programme, file } => {
            ctx.store.require_user()?;
            let themes: Vec<PriorityTheme> = read_json_payload(file.as_deref())?;
            ctx.store.save_themes(&programme, themes);
            output(&ctx.store.programme_themes(&programme), flags.format)
        }
    }
}
