//! Programme profile and team member repository.

use chrono::Utc;

use delta_core::entities::{ProgrammeProfile, ProgrammeTeamMember};
use delta_core::ids::{PREFIX_PROFILE, PREFIX_TEAM_MEMBER, generate_id};

use crate::keys;
use crate::store::DeltaStore;

impl DeltaStore {
    #[must_use]
    pub fn get_programme_profile(
        &self,
        programme_id: &str,
        academic_year: &str,
    ) -> Option<&ProgrammeProfile> {
        self.programme_profiles.iter().find(|pp| {
            pp.programme_id == programme_id && pp.academic_year.as_deref() == Some(academic_year)
        })
    }

    /// Upsert a profile by id, falling back to the (programme, year) pair for
    /// profiles submitted without one.
    pub fn save_programme_profile(&mut self, mut profile: ProgrammeProfile) -> ProgrammeProfile {
        let now = Utc::now();
        profile.updated_at = now;
        if profile.id.is_empty() {
            profile.id = generate_id(PREFIX_PROFILE);
            profile.created_at = now;
        }

        let existing = self.programme_profiles.iter_mut().find(|pp| {
            pp.id == profile.id
                || (pp.programme_id == profile.programme_id
                    && pp.academic_year == profile.academic_year)
        });
        match existing {
            Some(slot) => *slot = profile.clone(),
            None => self.programme_profiles.push(profile.clone()),
        }
        self.persist(keys::PROGRAMME_PROFILES, &self.programme_profiles);
        profile
    }

    #[must_use]
    pub fn programme_team_members(
        &self,
        programme_id: &str,
        academic_year: &str,
    ) -> Vec<&ProgrammeTeamMember> {
        self.team_members
            .iter()
            .filter(|ptm| {
                ptm.programme_id == programme_id
                    && ptm.academic_year.as_deref() == Some(academic_year)
            })
            .collect()
    }

    /// Replace the team roster for one (programme, year). Members submitted
    /// without ids or timestamps get them filled in.
    pub fn save_programme_team_members(
        &mut self,
        programme_id: &str,
        academic_year: &str,
        members: Vec<ProgrammeTeamMember>,
    ) {
        let now = Utc::now();
        self.team_members.retain(|ptm| {
            !(ptm.programme_id == programme_id
                && ptm.academic_year.as_deref() == Some(academic_year))
        });
        for mut member in members {
            if member.id.is_empty() {
                member.id = generate_id(PREFIX_TEAM_MEMBER);
                member.created_at = now;
            }
            member.programme_id = programme_id.to_string();
            member.academic_year = Some(academic_year.to_string());
            self.team_members.push(member);
        }
        self.persist(keys::PROGRAMME_TEAM_MEMBERS, &self.team_members);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use pretty_assertions::assert_eq;

    fn store() -> DeltaStore {
        DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap()
    }

    fn profile(programme_id: &str, year: &str) -> ProgrammeProfile {
        ProgrammeProfile {
            id: String::new(),
            programme_id: programme_id.to_string(),
            academic_year: Some(year.to_string()),
            programme_rationale: Some("Broad digital skills base".to_string()),
            annual_intake: Some(60),
            total_enrolment_across_stages: Some(220),
            levels_taught: vec!["Level 8".to_string()],
            programme_variants: Vec::new(),
            team_collaboration_summary: None,
            student_involvement: None,
            created_by_user_id: Some("u1".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn save_profile_assigns_id_and_upserts_by_year() {
        let mut store = store();
        let saved = store.save_programme_profile(profile("p1", "2024-25"));
        assert!(saved.id.starts_with("prf-"));

        let mut second = profile("p1", "2024-25");
        second.annual_intake = Some(80);
        store.save_programme_profile(second);

        assert_eq!(store.programme_profiles.len(), 1);
        let current = store.get_programme_profile("p1", "2024-25").unwrap();
        assert_eq!(current.annual_intake, Some(80));
    }

    #[test]
    fn profiles_are_scoped_by_year() {
        let mut store = store();
        store.save_programme_profile(profile("p1", "2024-25"));
        store.save_programme_profile(profile("p1", "2025-26"));
        assert_eq!(store.programme_profiles.len(), 2);
        assert!(store.get_programme_profile("p1", "2023-24").is_none());
    }

    #[test]
    fn team_roster_save_replaces_the_year() {
        let mut store = store();
        let member = |name: &str| ProgrammeTeamMember {
            id: String::new(),
            programme_id: String::new(),
            academic_year: None,
            name: name.to_string(),
            role: "Module Lead".to_string(),
            email: None,
            contribution_focus: None,
            created_at: Utc::now(),
        };
        store.save_programme_team_members("p1", "2024-25", vec![member("A"), member("B")]);
        store.save_programme_team_members("p1", "2024-25", vec![member("C")]);
        let roster = store.programme_team_members("p1", "2024-25");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "C");
        assert!(roster[0].id.starts_with("ptm-"));
    }
}
