use std::collections::BTreeMap;

use chrono::Utc;
use serde::Deserialize;

use delta_core::entities::{Artefact, ModuleEvaluation, ModuleMetadata};
use delta_core::enums::Category;
use delta_core::errors::CoreError;
use delta_core::responses::EvaluationSaveResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EvaluationCommands;
use crate::commands::shared::read_json_payload;
use crate::context::AppContext;
use crate::output::output;

/// Evaluation payload as submitted by the user. Scores and levels are
/// derived at save time, so the payload carries only the raw inputs.
#[derive(Debug, Deserialize)]
struct EvaluationInput {
    #[serde(default)]
    answers: BTreeMap<String, u8>,
    #[serde(default)]
    evidence_summaries: BTreeMap<Category, String>,
    #[serde(default)]
    artefacts: BTreeMap<Category, Artefact>,
    #[serde(default)]
    module_headline: Option<String>,
    #[serde(default)]
    metadata: Option<ModuleMetadata>,
}

pub fn handle(
    action: EvaluationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EvaluationCommands::Save { module, file } => {
            let user_id = ctx.store.require_user()?.id.clone();
            let year = ctx.academic_year(flags).to_string();
            ctx.store.get_module(&module)?;
            let input: EvaluationInput = read_json_payload(file.as_deref())?;

            let outcome = ctx.store.save_evaluation(ModuleEvaluation {
                id: None,
                user_id,
                module_id: module,
                academic_year: year,
                answers: input.answers,
                category_scores: BTreeMap::new(),
                category_levels: BTreeMap::new(),
                indicator_scores: BTreeMap::new(),
                evidence_summaries: input.evidence_summaries,
                artefacts: input.artefacts,
                module_headline: input.module_headline,
                metadata: input.metadata,
                completed_at: Utc::now(),
                created_at: None,
                updated_at: None,
            });
            output(
                &EvaluationSaveResponse {
                    evaluation: outcome.evaluation,
                    version_number: outcome.version_number,
                    warnings: outcome.warnings,
                },
                flags.format,
            )
        }
        EvaluationCommands::Get { module } => {
            let year = ctx.academic_year(flags);
            let evaluation = ctx
                .store
                .get_evaluation(&module, Some(year))
                .ok_or_else(|| CoreError::not_found("evaluation", &module))?;
            output(evaluation, flags.format)
        }
        EvaluationCommands::History { module } => {
            output(&ctx.store.evaluation_history(&module), flags.format)
        }
    }
}
