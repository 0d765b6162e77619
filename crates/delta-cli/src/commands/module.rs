use serde::Serialize;

use delta_core::enums::{CoreElective, Semester};
use delta_store::repos::ProgrammeModuleView;
use delta_store::updates::{ModuleUpdate, ProgrammeModuleUpdate};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ModuleCommands;
use crate::commands::shared::{parse_core, parse_semester};
use crate::context::AppContext;
use crate::output::output;

/// Flattened programme-module link for display.
#[derive(Debug, Serialize)]
struct ModuleLinkRow {
    link_id: String,
    module_id: String,
    code: Option<String>,
    name: Option<String>,
    credits: Option<u32>,
    stage: Option<u8>,
    semester: Option<Semester>,
    is_core: Option<CoreElective>,
    owner: Option<String>,
}

impl From<ProgrammeModuleView> for ModuleLinkRow {
    fn from(view: ProgrammeModuleView) -> Self {
        Self {
            link_id: view.link.id,
            module_id: view.link.module_id,
            code: view.module.as_ref().map(|m| m.code.clone()),
            name: view.module.as_ref().map(|m| m.name.clone()),
            credits: view.module.as_ref().and_then(|m| m.credits),
            stage: view.link.stage,
            semester: view.link.semester,
            is_core: view.link.is_core,
            owner: view.owner.map(|u| u.name),
        }
    }
}

#[derive(Debug, Serialize)]
struct ModuleLinkResponse {
    module_id: String,
    programme_module_id: String,
}

pub fn handle(
    action: ModuleCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ModuleCommands::Add {
            programme,
            module_id,
            code,
            name,
            credits,
            stage,
            semester,
            core,
        } => {
            ctx.store.require_user()?;
            let result = ctx.store.add_module_to_programme(
                &programme,
                module_id.as_deref(),
                code.as_deref(),
                name.as_deref(),
                credits,
                stage,
                parse_semester(&semester)?,
                parse_core(&core)?,
            )?;
            output(
                &ModuleLinkResponse {
                    module_id: result.module_id,
                    programme_module_id: result.programme_module_id,
                },
                flags.format,
            )
        }
        ModuleCommands::Update {
            id,
            code,
            name,
            credits,
        } => {
            let update = ModuleUpdate {
                code,
                name,
                credits: credits.map(Some),
            };
            let module = ctx.store.update_module(&id, update)?;
            output(&module, flags.format)
        }
        ModuleCommands::UpdateLink {
            id,
            stage,
            semester,
            core,
        } => {
            let update = ProgrammeModuleUpdate {
                stage: stage.map(Some),
                semester: semester
                    .as_deref()
                    .map(parse_semester)
                    .transpose()?
                    .map(Some),
                is_core: core.as_deref().map(parse_core).transpose()?.map(Some),
            };
            let link = ctx.store.update_programme_module(&id, update)?;
            output(&link, flags.format)
        }
        ModuleCommands::Remove { link_id } => {
            ctx.store.require_user()?;
            ctx.store.remove_module_from_programme(&link_id);
            Ok(())
        }
        ModuleCommands::AssignOwner { module, user } => {
            ctx.store.require_user()?;
            ctx.store.assign_module_owner(&module, &user);
            output(ctx.store.get_module(&module)?, flags.format)
        }
        ModuleCommands::Get { id } => output(ctx.store.get_module(&id)?, flags.format),
        ModuleCommands::List { programme } => match programme {
            Some(programme_id) => {
                let rows: Vec<ModuleLinkRow> = ctx
                    .store
                    .programme_module_views(&programme_id)
                    .into_iter()
                    .map(ModuleLinkRow::from)
                    .collect();
                output(&rows, flags.format)
            }
            None => output(&ctx.store.list_modules(), flags.format),
        },
        ModuleCommands::Mine => output(&ctx.store.my_modules(), flags.format),
    }
}
