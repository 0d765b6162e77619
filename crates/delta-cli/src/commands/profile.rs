use chrono::Utc;
use serde::Deserialize;

use delta_core::entities::{ProgrammeProfile, ProgrammeTeamMember};
use delta_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::read_json_payload;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Default, Deserialize)]
struct ProfileInput {
    #[serde(default)]
    programme_rationale: Option<String>,
    #[serde(default)]
    annual_intake: Option<u32>,
    #[serde(default)]
    total_enrolment_across_stages: Option<u32>,
    #[serde(default)]
    levels_taught: Vec<String>,
    #[serde(default)]
    programme_variants: Vec<String>,
    #[serde(default)]
    team_collaboration_summary: Option<String>,
    #[serde(default)]
    student_involvement: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TeamMemberInput {
    name: String,
    role: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    contribution_focus: Option<String>,
}

pub fn handle(
    action: ProfileCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProfileCommands::Get { programme } => {
            let year = ctx.academic_year(flags);
            let profile = ctx
                .store
                .get_programme_profile(&programme, year)
                .ok_or_else(|| CoreError::not_found("programme profile", &programme))?;
            output(profile, flags.format)
        }
        ProfileCommands::Save { programme, file } => {
            let user_id = ctx.store.require_user()?.id.clone();
            let year = ctx.academic_year(flags).to_string();
            ctx.store.get_programme(&programme)?;
            let input: ProfileInput = read_json_payload(file.as_deref())?;

            // Reuse the existing record's id so the save is an upsert.
            let id = ctx
                .store
                .get_programme_profile(&programme, &year)
                .map(|p| p.id.clone())
                .unwrap_or_default();
            let now = Utc::now();
            let saved = ctx.store.save_programme_profile(ProgrammeProfile {
                id,
                programme_id: programme,
                academic_year: Some(year),
                programme_rationale: input.programme_rationale,
                annual_intake: input.annual_intake,
                total_enrolment_across_stages: input.total_enrolment_across_stages,
                levels_taught: input.levels_taught,
                programme_variants: input.programme_variants,
                team_collaboration_summary: input.team_collaboration_summary,
                student_involvement: input.student_involvement,
                created_by_user_id: Some(user_id),
                created_at: now,
                updated_at: now,
            });
            output(&saved, flags.format)
        }
        ProfileCommands::Team { programme } => {
            let year = ctx.academic_year(flags);
            output(
                &ctx.store.programme_team_members(&programme, year),
                flags.format,
            )
        }
        ProfileCommands::SaveTeam { programme, file } => {
            ctx.store.require_user()?;
            let year = ctx.academic_year(flags).to_string();
            ctx.store.get_programme(&programme)?;
            let inputs: Vec<TeamMemberInput> = read_json_payload(file.as_deref())?;

            let now = Utc::now();
            let members = inputs
                .into_iter()
                .map(|m| ProgrammeTeamMember {
                    id: String::new(),
                    programme_id: programme.clone(),
                    academic_year: Some(year.clone()),
                    name: m.name,
                    role: m.role,
                    email: m.email,
                    contribution_focus: m.contribution_focus,
                    created_at: now,
                })
                .collect();
            ctx.store
                .save_programme_team_members(&programme, &year, members);
            output(
                &ctx.store.programme_team_members(&programme, &year),
                flags.format,
            )
        }
    }
}
