use delta_core::responses::SeedDemoResponse;
use delta_store::seed::DEMO_ACADEMIC_YEAR;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Seed the demo dataset when the store is empty, and report what it holds.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let seeded = ctx.store.seed_demo();
    let evaluations = ctx
        .store
        .list_programmes()
        .iter()
        .map(|p| ctx.store.programme_evaluations(&p.id, DEMO_ACADEMIC_YEAR).len())
        .sum::<usize>();

    let response = SeedDemoResponse {
        seeded,
        programmes: ctx.store.list_programmes().len() as u32,
        modules: ctx.store.list_modules().len() as u32,
        evaluations: evaluations as u32,
    };
    output(&response, flags.format)
}
