use chrono::Utc;

use delta_core::entities::{ModuleEvaluation, ProgrammeTakingStock};
use delta_core::errors::CoreError;
use delta_synthesis::ModuleSample;
use delta_synthesis::document::{build_document, refresh_document};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TakingStockCommands;
use crate::commands::shared::read_json_payload;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: TakingStockCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TakingStockCommands::Show { programme } => {
            let year = ctx.academic_year(flags);
            let document = ctx
                .store
                .get_taking_stock(&programme, year)
                .ok_or_else(|| CoreError::not_found("taking stock", &programme))?;
            output(document, flags.format)
        }
        TakingStockCommands::Synthesize { programme } => {
            ctx.store.require_user()?;
            let year = ctx.academic_year(flags).to_string();
            ctx.store.get_programme(&programme)?;

            // Clone the inputs out of the store: synthesis borrows them while
            // the save below needs the store mutably.
            let evaluated: Vec<(String, ModuleEvaluation)> = ctx
                .store
                .programme_module_views(&programme)
                .into_iter()
                .filter_map(|view| {
                    let evaluation = ctx
                        .store
                        .get_evaluation(&view.link.module_id, Some(&year))?
                        .clone();
                    let name = view
                        .module
                        .map(|m| m.name)
                        .unwrap_or_else(|| view.link.module_id.clone());
                    Some((name, evaluation))
                })
                .collect();
            let samples: Vec<ModuleSample<'_>> = evaluated
                .iter()
                .map(|(name, evaluation)| ModuleSample::new(name, evaluation))
                .collect();

            let now = Utc::now();
            let document = match ctx.store.get_taking_stock(&programme, &year) {
                Some(existing) => {
                    let mut document = existing.clone();
                    refresh_document(&mut document, &samples, now);
                    document
                }
                None => build_document(&programme, &year, &samples, now),
            };
            let saved = ctx.store.save_taking_stock(document);
            output(&saved, flags.format)
        }
        TakingStockCommands::Save { file } => {
            ctx.store.require_user()?;
            let document: ProgrammeTakingStock = read_json_payload(file.as_deref())?;
            ctx.store.get_programme(&document.programme_id)?;
            let saved = ctx.store.save_taking_stock(document);
            output(&saved, flags.format)
        }
    }
}
