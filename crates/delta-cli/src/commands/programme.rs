use delta_core::enums::{Category, MaturityLevel};
use delta_core::responses::{CategorySummary, ProgrammeOverviewResponse};
use delta_store::updates::ProgrammeUpdate;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgrammeCommands;
use crate::commands::shared::clearable;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(
    action: ProgrammeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgrammeCommands::Add {
            code,
            name,
            school,
            faculty,
            discipline_area,
            nfq_level,
            mode,
        } => {
            let programme = ctx.store.add_programme(
                &code,
                &name,
                school,
                faculty,
                discipline_area,
                nfq_level,
                mode,
            )?;
            output(&programme, flags.format)
        }
        ProgrammeCommands::Update {
            id,
            code,
            name,
            school,
            faculty,
            discipline_area,
            nfq_level,
            mode,
        } => {
            let update = ProgrammeUpdate {
                code,
                name,
                school: clearable(school),
                faculty: clearable(faculty),
                discipline_area: clearable(discipline_area),
                nfq_level: clearable(nfq_level),
                mode: clearable(mode),
            };
            let programme = ctx.store.update_programme(&id, update)?;
            output(&programme, flags.format)
        }
        ProgrammeCommands::Get { id } => output(ctx.store.get_programme(&id)?, flags.format),
        ProgrammeCommands::List => output(&ctx.store.list_programmes(), flags.format),
        ProgrammeCommands::Mine => output(&ctx.store.my_programmes(), flags.format),
        ProgrammeCommands::Overview { id } => overview(&id, ctx, flags),
    }
}

/// Per-category mean score (0-10) and level across the programme's evaluated
/// modules for the academic year.
fn overview(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let year = ctx.academic_year(flags).to_string();
    let programme = ctx.store.get_programme(id)?;
    let modules_total = ctx.store.programme_module_views(id).len() as u32;
    let evaluations = ctx.store.programme_evaluations(id, &year);

    let mut category_summaries = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let scores: Vec<u8> = evaluations
            .iter()
            .filter_map(|e| e.category_scores.get(&category).copied())
            .collect();
        let (average_score, level) = if scores.is_empty() {
            (0.0, MaturityLevel::Developing)
        } else {
            let avg = f64::from(scores.iter().map(|&s| u32::from(s)).sum::<u32>())
                / scores.len() as f64;
            (avg, MaturityLevel::from_score(avg.round() as u8))
        };
        category_summaries.push(CategorySummary {
            category,
            label: category.label().to_string(),
            average_score,
            level,
            modules_evaluated: scores.len() as u32,
        });
    }

    let response = ProgrammeOverviewResponse {
        programme_id: programme.id.clone(),
        programme_name: programme.name.clone(),
        academic_year: year,
        modules_total,
        modules_evaluated: evaluations.len() as u32,
        category_summaries,
    };
    output(&response, flags.format)
}
