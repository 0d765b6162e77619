//! Programme repository.

use chrono::Utc;

use delta_core::entities::{Programme, ProgrammeChair};
use delta_core::errors::CoreError;
use delta_core::ids::{PREFIX_PROGRAMME, PREFIX_PROGRAMME_CHAIR, generate_id};

use crate::error::StoreError;
use crate::keys;
use crate::store::DeltaStore;
use crate::updates::ProgrammeUpdate;

impl DeltaStore {
    /// Create a programme and auto-assign the logged-in user as its chair.
    ///
    /// # Errors
    ///
    /// Returns an auth error when no session exists.
    pub fn add_programme(
        &mut self,
        code: &str,
        name: &str,
        school: Option<String>,
        faculty: Option<String>,
        discipline_area: Option<String>,
        nfq_level: Option<String>,
        mode: Option<String>,
    ) -> Result<Programme, StoreError> {
        let user_id = self.require_user()?.id.clone();
        let now = Utc::now();
        let programme = Programme {
            id: generate_id(PREFIX_PROGRAMME),
            code: code.to_string(),
            name: name.to_string(),
            school,
            faculty,
            discipline_area,
            nfq_level,
            mode,
            created_at: now,
            updated_at: now,
        };
        self.programmes.push(programme.clone());
        self.persist(keys::PROGRAMMES, &self.programmes);

        self.programme_chairs.push(ProgrammeChair {
            id: generate_id(PREFIX_PROGRAMME_CHAIR),
            user_id,
            programme_id: programme.id.clone(),
        });
        self.persist(keys::PROGRAMME_CHAIRS, &self.programme_chairs);

        Ok(programme)
    }

    /// Apply a partial update, bumping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no programme has `id`.
    pub fn update_programme(
        &mut self,
        id: &str,
        update: ProgrammeUpdate,
    ) -> Result<Programme, StoreError> {
        let programme = self
            .programmes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("programme", id))?;

        if let Some(code) = update.code {
            programme.code = code;
        }
        if let Some(name) = update.name {
            programme.name = name;
        }
        if let Some(school) = update.school {
            programme.school = school;
        }
        if let Some(faculty) = update.faculty {
            programme.faculty = faculty;
        }
        if let Some(discipline_area) = update.discipline_area {
            programme.discipline_area = discipline_area;
        }
        if let Some(nfq_level) = update.nfq_level {
            programme.nfq_level = nfq_level;
        }
        if let Some(mode) = update.mode {
            programme.mode = mode;
        }
        programme.updated_at = Utc::now();
        let updated = programme.clone();
        self.persist(keys::PROGRAMMES, &self.programmes);
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns `NotFound` when no programme has `id`.
    pub fn get_programme(&self, id: &str) -> Result<&Programme, StoreError> {
        self.programmes
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("programme", id).into())
    }

    #[must_use]
    pub fn list_programmes(&self) -> &[Programme] {
        &self.programmes
    }

    /// Programmes chaired by the logged-in user, in chair-assignment order.
    #[must_use]
    pub fn my_programmes(&self) -> Vec<&Programme> {
        let Some(user) = self.current_user() else {
            return Vec::new();
        };
        self.programme_chairs
            .iter()
            .filter(|pc| pc.user_id == user.id)
            .filter_map(|pc| self.programmes.iter().find(|p| p.id == pc.programme_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use pretty_assertions::assert_eq;

    fn logged_in_store() -> DeltaStore {
        let mut store = DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap();
        store.login("demo_team1", "delta123").unwrap();
        store
    }

    #[test]
    fn add_programme_assigns_chair_to_current_user() {
        let mut store = logged_in_store();
        let programme = store
            .add_programme("CS101", "BSc Computing", None, None, None, None, None)
            .unwrap();
        assert!(programme.id.starts_with("prg-"));
        let chairs: Vec<_> = store
            .programme_chairs
            .iter()
            .filter(|c| c.programme_id == programme.id)
            .collect();
        assert_eq!(chairs.len(), 1);
        assert_eq!(chairs[0].user_id, "u1");
        assert_eq!(store.my_programmes().len(), 1);
    }

    #[test]
    fn add_programme_requires_login() {
        let mut store = DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap();
        assert!(store
            .add_programme("CS101", "BSc Computing", None, None, None, None, None)
            .is_err());
    }

    #[test]
    fn update_programme_touches_only_given_fields() {
        let mut store = logged_in_store();
        let programme = store
            .add_programme(
                "CS101",
                "BSc Computing",
                Some("School of CS".to_string()),
                None,
                None,
                None,
                None,
            )
            .unwrap();
        let updated = store
            .update_programme(
                &programme.id,
                ProgrammeUpdate {
                    name: Some("BSc Computer Science".to_string()),
                    school: Some(None),
                    ..ProgrammeUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "BSc Computer Science");
        assert_eq!(updated.code, "CS101");
        assert_eq!(updated.school, None);
        assert!(updated.updated_at >= programme.updated_at);
    }

    #[test]
    fn update_unknown_programme_is_not_found() {
        let mut store = logged_in_store();
        let err = store
            .update_programme("prg-missing", ProgrammeUpdate::default())
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::NotFound { .. })
        ));
    }
}
