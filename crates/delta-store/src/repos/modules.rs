//! Module and programme-module repository.

use delta_core::entities::{Module, ModuleOwner, ProgrammeModule, User};
use delta_core::enums::{CoreElective, Semester};
use delta_core::errors::CoreError;
use delta_core::ids::{
    PREFIX_MODULE, PREFIX_MODULE_OWNER, PREFIX_PROGRAMME_MODULE, generate_id,
};

use crate::auth;
use crate::error::StoreError;
use crate::keys;
use crate::store::DeltaStore;
use crate::updates::{ModuleUpdate, ProgrammeModuleUpdate};

/// Result of linking a module into a programme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLinkResult {
    pub module_id: String,
    pub programme_module_id: String,
}

/// A programme-module link joined with its module and owner for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgrammeModuleView {
    pub link: ProgrammeModule,
    pub module: Option<Module>,
    pub owner: Option<User>,
}

impl DeltaStore {
    /// Link a module into a programme, creating the module when `module_id`
    /// is `None`.
    pub fn add_module_to_programme(
        &mut self,
        programme_id: &str,
        module_id: Option<&str>,
        code: Option<&str>,
        name: Option<&str>,
        credits: Option<u32>,
        stage: u8,
        semester: Semester,
        is_core: CoreElective,
    ) -> Result<ModuleLinkResult, StoreError> {
        let programme_name = self.get_programme(programme_id)?.name.clone();

        let module_id = match module_id {
            Some(id) => id.to_string(),
            None => {
                let module = Module {
                    id: generate_id(PREFIX_MODULE),
                    code: code.unwrap_or("NEW").to_string(),
                    name: name.unwrap_or("New Module").to_string(),
                    credits: Some(credits.unwrap_or(5)),
                    programme_id: Some(programme_id.to_string()),
                    programme_name: Some(programme_name),
                };
                let id = module.id.clone();
                self.modules.push(module);
                self.persist(keys::MODULES, &self.modules);
                id
            }
        };

        let link = ProgrammeModule {
            id: generate_id(PREFIX_PROGRAMME_MODULE),
            programme_id: programme_id.to_string(),
            module_id: module_id.clone(),
            stage: Some(stage),
            semester: Some(semester),
            is_core: Some(is_core),
        };
        let programme_module_id = link.id.clone();
        self.programme_modules.push(link);
        self.persist(keys::PROGRAMME_MODULES, &self.programme_modules);

        Ok(ModuleLinkResult {
            module_id,
            programme_module_id,
        })
    }

    /// # Errors
    ///
    /// Returns `NotFound` when no module has `id`.
    pub fn update_module(&mut self, id: &str, update: ModuleUpdate) -> Result<Module, StoreError> {
        let module = self
            .modules
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::not_found("module", id))?;
        if let Some(code) = update.code {
            module.code = code;
        }
        if let Some(name) = update.name {
            module.name = name;
        }
        if let Some(credits) = update.credits {
            module.credits = credits;
        }
        let updated = module.clone();
        self.persist(keys::MODULES, &self.modules);
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `NotFound` when no programme-module link has `id`.
    pub fn update_programme_module(
        &mut self,
        id: &str,
        update: ProgrammeModuleUpdate,
    ) -> Result<ProgrammeModule, StoreError> {
        let link = self
            .programme_modules
            .iter_mut()
            .find(|pm| pm.id == id)
            .ok_or_else(|| CoreError::not_found("programme_module", id))?;
        if let Some(stage) = update.stage {
            link.stage = stage;
        }
        if let Some(semester) = update.semester {
            link.semester = semester;
        }
        if let Some(is_core) = update.is_core {
            link.is_core = is_core;
        }
        let updated = link.clone();
        self.persist(keys::PROGRAMME_MODULES, &self.programme_modules);
        Ok(updated)
    }

    /// Unlink a module from its programme. The module record itself survives.
    pub fn remove_module_from_programme(&mut self, programme_module_id: &str) {
        self.programme_modules.retain(|pm| pm.id != programme_module_id);
        self.persist(keys::PROGRAMME_MODULES, &self.programme_modules);
    }

    /// Assign `user_id` as the sole owner of a module, replacing any
    /// previous owner.
    pub fn assign_module_owner(&mut self, module_id: &str, user_id: &str) {
        self.module_owners.retain(|mo| mo.module_id != module_id);
        self.module_owners.push(ModuleOwner {
            id: generate_id(PREFIX_MODULE_OWNER),
            user_id: user_id.to_string(),
            module_id: module_id.to_string(),
        });
        self.persist(keys::MODULE_OWNERS, &self.module_owners);
    }

    /// # Errors
    ///
    /// Returns `NotFound` when no module has `id`.
    pub fn get_module(&self, id: &str) -> Result<&Module, StoreError> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::not_found("module", id).into())
    }

    #[must_use]
    pub fn list_modules(&self) -> &[Module] {
        &self.modules
    }

    /// All module links of a programme, joined with module and owner.
    ///
    /// Owner resolution tries the session user, then the credential table,
    /// and falls back to an anonymous placeholder so an unknown owner id
    /// never breaks the view.
    #[must_use]
    pub fn programme_module_views(&self, programme_id: &str) -> Vec<ProgrammeModuleView> {
        self.programme_modules
            .iter()
            .filter(|pm| pm.programme_id == programme_id)
            .map(|pm| {
                let module = self.modules.iter().find(|m| m.id == pm.module_id).cloned();
                let owner = self
                    .module_owners
                    .iter()
                    .find(|mo| mo.module_id == pm.module_id)
                    .map(|mo| self.resolve_user(&mo.user_id));
                ProgrammeModuleView {
                    link: pm.clone(),
                    module,
                    owner,
                }
            })
            .collect()
    }

    /// Modules led by the logged-in user, with programme names joined in.
    #[must_use]
    pub fn my_modules(&self) -> Vec<Module> {
        let Some(user) = self.current_user() else {
            return Vec::new();
        };
        self.module_owners
            .iter()
            .filter(|mo| mo.user_id == user.id)
            .filter_map(|mo| {
                let module = self.modules.iter().find(|m| m.id == mo.module_id)?;
                let mut module = module.clone();
                if let Some(link) = self
                    .programme_modules
                    .iter()
                    .find(|pm| pm.module_id == module.id)
                    && let Ok(programme) = self.get_programme(&link.programme_id)
                {
                    module.programme_id = Some(programme.id.clone());
                    module.programme_name = Some(programme.name.clone());
                }
                Some(module)
            })
            .collect()
    }

    fn resolve_user(&self, user_id: &str) -> User {
        if let Some(user) = self.current_user()
            && user.id == user_id
        {
            return user.clone();
        }
        auth::lookup_user(user_id).unwrap_or_else(|| User {
            id: user_id.to_string(),
            name: "Other User".to_string(),
            email: None,
            role: None,
        })
    }
}
