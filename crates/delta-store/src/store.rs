//! Store lifecycle: open, load, persist.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use delta_core::entities::{
    Module, ModuleEvaluation, ModuleEvaluationHistory, ModuleOwner, PriorityTheme, Programme,
    ProgrammeChair, ProgrammeModule, ProgrammePriority, ProgrammeProfile, ProgrammeTakingStock,
    ProgrammeTeamMember, SmartGoal, User,
};

use crate::envelope;
use crate::error::StoreError;
use crate::keys;
use crate::medium::StorageMedium;
use crate::schema::SchemaRegistry;
use crate::seed;

/// In-memory working set over an injected [`StorageMedium`].
///
/// All collections are loaded eagerly at [`DeltaStore::open`]; reads never
/// touch the medium afterwards. Each mutation writes the affected collection
/// back, and a failed write degrades to in-memory operation with a warning
/// rather than failing the mutation.
pub struct DeltaStore {
    medium: Box<dyn StorageMedium>,
    pub(crate) session: Option<User>,
    pub(crate) programmes: Vec<Programme>,
    pub(crate) modules: Vec<Module>,
    pub(crate) programme_modules: Vec<ProgrammeModule>,
    pub(crate) programme_chairs: Vec<ProgrammeChair>,
    pub(crate) module_owners: Vec<ModuleOwner>,
    pub(crate) programme_profiles: Vec<ProgrammeProfile>,
    pub(crate) team_members: Vec<ProgrammeTeamMember>,
    pub(crate) evaluations: Vec<ModuleEvaluation>,
    pub(crate) history: Vec<ModuleEvaluationHistory>,
    pub(crate) taking_stocks: Vec<ProgrammeTakingStock>,
    pub(crate) priorities: Vec<ProgrammePriority>,
    pub(crate) themes: Vec<PriorityTheme>,
    pub(crate) goals: Vec<SmartGoal>,
}

impl std::fmt::Debug for DeltaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeltaStore")
            .field("session", &self.session)
            .field("programmes", &self.programmes)
            .field("modules", &self.modules)
            .field("programme_modules", &self.programme_modules)
            .field("programme_chairs", &self.programme_chairs)
            .field("module_owners", &self.module_owners)
            .field("programme_profiles", &self.programme_profiles)
            .field("team_members", &self.team_members)
            .field("evaluations", &self.evaluations)
            .field("history", &self.history)
            .field("taking_stocks", &self.taking_stocks)
            .field("priorities", &self.priorities)
            .field("themes", &self.themes)
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}

fn load_collection<T>(
    medium: &dyn StorageMedium,
    schemas: &SchemaRegistry,
    key: &str,
    schema_name: &str,
) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned + Serialize,
{
    let Some(raw) = medium.read(key)? else {
        return Ok(Vec::new());
    };
    let decoded = envelope::decode::<serde_json::Value>(key, &raw)?;
    let mut items = Vec::with_capacity(decoded.items.len());
    for value in decoded.items {
        schemas.validate_lenient(schema_name, &value);
        let item: T = serde_json::from_value(value).map_err(|source| StoreError::Corrupted {
            key: key.to_string(),
            source,
        })?;
        items.push(item);
    }
    if decoded.needs_rewrite {
        debug!(key, "rewriting legacy payload in envelope form");
        match envelope::encode(&items) {
            Ok(encoded) => {
                if let Err(e) = medium.write(key, &encoded) {
                    warn!(key, error = %e, "failed to rewrite migrated collection");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to encode migrated collection"),
        }
    }
    Ok(items)
}

impl DeltaStore {
    /// Open a store over `medium`, loading every collection.
    ///
    /// Any unreadable or corrupted collection fails the open. When
    /// `demo_mode` is set and the store is empty of programmes, modules, and
    /// evaluations, the demo dataset is seeded and persisted before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if any collection cannot be read or parsed, or
    /// was written by a newer schema version.
    pub fn open(medium: Box<dyn StorageMedium>, demo_mode: bool) -> Result<Self, StoreError> {
        let schemas = SchemaRegistry::new();
        let m = medium.as_ref();

        let session = load_collection::<User>(m, &schemas, keys::SESSION, "user")?
            .into_iter()
            .next();

        let mut store = Self {
            programmes: load_collection(m, &schemas, keys::PROGRAMMES, "programme")?,
            modules: load_collection(m, &schemas, keys::MODULES, "module")?,
            programme_modules: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_MODULES,
                "programme_module",
            )?,
            programme_chairs: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_CHAIRS,
                "programme_chair",
            )?,
            module_owners: load_collection(m, &schemas, keys::MODULE_OWNERS, "module_owner")?,
            programme_profiles: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_PROFILES,
                "programme_profile",
            )?,
            team_members: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_TEAM_MEMBERS,
                "programme_team_member",
            )?,
            evaluations: load_collection(m, &schemas, keys::EVALUATIONS, "module_evaluation")?,
            history: load_collection(
                m,
                &schemas,
                keys::EVALUATIONS_HISTORY,
                "module_evaluation_history",
            )?,
            taking_stocks: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_TAKING_STOCK,
                "programme_taking_stock",
            )?,
            priorities: load_collection(
                m,
                &schemas,
                keys::PROGRAMME_PRIORITIES,
                "programme_priority",
            )?,
            themes: load_collection(m, &schemas, keys::PROGRAMME_THEMES, "priority_theme")?,
            goals: load_collection(m, &schemas, keys::PROGRAMME_GOALS, "smart_goal")?,
            session,
            medium,
        };

        if demo_mode {
            store.seed_demo();
        }

        Ok(store)
    }

    /// Seed the demo dataset when the store holds no programmes, modules, or
    /// evaluations. Returns whether seeding happened.
    pub fn seed_demo(&mut self) -> bool {
        if self.programmes.is_empty() && self.modules.is_empty() && self.evaluations.is_empty() {
            info!("store is empty, seeding demo dataset");
            seed::seed_demo_data(self);
            true
        } else {
            false
        }
    }

    /// Persist one collection, degrading to in-memory on failure.
    pub(crate) fn persist<T: Serialize>(&self, key: &str, items: &[T]) {
        match envelope::encode(items) {
            Ok(encoded) => {
                if let Err(e) = self.medium.write(key, &encoded) {
                    warn!(key, error = %e, "persist failed, continuing in memory");
                }
            }
            Err(e) => warn!(key, error = %e, "failed to encode collection"),
        }
    }

    /// Persist the session key from the current session state.
    pub(crate) fn persist_session(&self) {
        match &self.session {
            Some(user) => self.persist(keys::SESSION, std::slice::from_ref(user)),
            None => {
                if let Err(e) = self.medium.remove(keys::SESSION) {
                    warn!(key = keys::SESSION, error = %e, "failed to clear session");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use pretty_assertions::assert_eq;

    fn empty_store() -> DeltaStore {
        DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap()
    }

    #[test]
    fn open_on_fresh_medium_yields_empty_collections() {
        let store = empty_store();
        assert!(store.programmes.is_empty());
        assert!(store.evaluations.is_empty());
        assert!(store.session.is_none());
    }

    #[test]
    fn open_with_demo_mode_seeds_once() {
        let medium = MemoryMedium::new();
        // seed writes through, so a second open over the same data must not
        // duplicate anything
        let store = DeltaStore::open(Box::new(medium), true).unwrap();
        assert_eq!(store.programmes.len(), 2);
        assert_eq!(store.modules.len(), 12);
        assert_eq!(store.evaluations.len(), 12);
    }

    #[test]
    fn open_fails_on_corrupted_collection() {
        let medium = MemoryMedium::new();
        medium.insert(keys::PROGRAMMES, "{broken");
        let err = DeltaStore::open(Box::new(medium), false).unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
    }

    #[test]
    fn open_fails_on_future_schema_version() {
        let medium = MemoryMedium::new();
        medium.insert(keys::MODULES, r#"{"schema_version":99,"items":[]}"#);
        let err = DeltaStore::open(Box::new(medium), false).unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedSchemaVersion { .. }));
    }

    #[test]
    fn legacy_bare_array_is_migrated_on_load() {
        let medium = MemoryMedium::new();
        medium.insert(
            keys::MODULES,
            r#"[{"id":"m1","code":"X1","name":"Legacy","credits":5,"programme_id":null,"programme_name":null}]"#,
        );
        let store = DeltaStore::open(Box::new(medium), false).unwrap();
        assert_eq!(store.modules.len(), 1);
        assert_eq!(store.modules[0].code, "X1");
    }
}
