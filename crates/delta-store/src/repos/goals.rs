//! SMART goal repository.

use chrono::Utc;

use delta_core::entities::SmartGoal;
use delta_core::ids::{PREFIX_GOAL, generate_id};

use crate::keys;
use crate::store::DeltaStore;

impl DeltaStore {
    #[must_use]
    pub fn programme_goals(&self, programme_id: &str) -> Vec<&SmartGoal> {
        self.goals
            .iter()
            .filter(|g| g.programme_id == programme_id)
            .collect()
    }

    /// Goals for a programme, seeding one blank goal per theme when the
    /// action plan is fresh. Seeded goals are persisted immediately.
    pub fn goals_or_seed(&mut self, programme_id: &str) -> Vec<SmartGoal> {
        let existing: Vec<SmartGoal> = self
            .programme_goals(programme_id)
            .into_iter()
            .cloned()
            .collect();
        if !existing.is_empty() {
            return existing;
        }

        let now = Utc::now();
        let seeded: Vec<SmartGoal> = self
            .programme_themes(programme_id)
            .into_iter()
            .map(|theme| {
                SmartGoal::blank(
                    generate_id(PREFIX_GOAL),
                    theme.id.clone(),
                    programme_id.to_string(),
                    now,
                )
            })
            .collect();
        if seeded.is_empty() {
            return seeded;
        }

        self.goals.extend(seeded.iter().cloned());
        self.persist(keys::PROGRAMME_GOALS, &self.goals);
        seeded
    }

    /// Add a blank goal under a theme.
    pub fn add_goal(&mut self, programme_id: &str, theme_id: &str) -> SmartGoal {
        let goal = SmartGoal::blank(
            generate_id(PREFIX_GOAL),
            theme_id.to_string(),
            programme_id.to_string(),
            Utc::now(),
        );
        self.goals.push(goal.clone());
        self.persist(keys::PROGRAMME_GOALS, &self.goals);
        goal
    }

    /// Replace the goal set for a programme.
    pub fn save_goals(&mut self, programme_id: &str, goals: Vec<SmartGoal>) {
        self.goals.retain(|g| g.programme_id != programme_id);
        self.goals.extend(goals);
        self.persist(keys::PROGRAMME_GOALS, &self.goals);
    }

    /// Remove one goal by id.
    pub fn remove_goal(&mut self, goal_id: &str) {
        self.goals.retain(|g| g.id != goal_id);
        self.persist(keys::PROGRAMME_GOALS, &self.goals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use delta_core::entities::{PriorityTheme, ProgrammePriority};
    use delta_core::enums::{Category, Provenance};
    use pretty_assertions::assert_eq;

    fn store_with_themes(count: usize) -> DeltaStore {
        let mut store = DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap();
        let themes = (0..count)
            .map(|i| PriorityTheme {
                id: format!("thm-{i}"),
                programme_id: "p1".to_string(),
                title: format!("Theme {i}"),
                linked_priority_ids: Vec::new(),
                rationale: String::new(),
                created_at: Utc::now(),
            })
            .collect();
        store.save_themes("p1", themes);
        store
    }

    #[test]
    fn fresh_action_plan_seeds_one_blank_goal_per_theme() {
        let mut store = store_with_themes(2);
        let goals = store.goals_or_seed("p1");
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].theme_id, "thm-0");
        assert_eq!(goals[1].theme_id, "thm-1");
        assert!(goals[0].specific.is_empty());
        // seeded set is persisted, not regenerated
        let again = store.goals_or_seed("p1");
        assert_eq!(goals, again);
    }

    #[test]
    fn no_themes_means_no_seeded_goals() {
        let mut store = store_with_themes(0);
        assert!(store.goals_or_seed("p1").is_empty());
        assert!(store.goals.is_empty());
    }

    #[test]
    fn add_and_remove_goal() {
        let mut store = store_with_themes(1);
        store.goals_or_seed("p1");
        let extra = store.add_goal("p1", "thm-0");
        assert_eq!(store.programme_goals("p1").len(), 2);
        store.remove_goal(&extra.id);
        assert_eq!(store.programme_goals("p1").len(), 1);
    }

    #[test]
    fn save_goals_replaces_programme_set() {
        let mut store = store_with_themes(1);
        let mut goals = store.goals_or_seed("p1");
        goals[0].specific = "Introduce early formative feedback in all stage 1 modules".to_string();
        store.save_goals("p1", goals);
        let current = store.programme_goals("p1");
        assert_eq!(current.len(), 1);
        assert!(current[0].specific.starts_with("Introduce early"));
    }

    // priorities feed themes, themes feed goals; check the chain end to end
    #[test]
    fn chain_from_priorities_to_goals() {
        let mut store = DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap();
        store.save_priorities(
            "p1",
            "2024-25",
            vec![ProgrammePriority {
                id: "pri-1".to_string(),
                programme_id: "p1".to_string(),
                component_id: Category::Assessment,
                text: "Diversify assessment methods".to_string(),
                selected: true,
                generated_by: Provenance::System,
                created_at: Utc::now(),
            }],
        );
        let themes = store.themes_or_generate("p1");
        assert_eq!(themes.len(), 1);
        let goals = store.goals_or_seed("p1");
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].theme_id, themes[0].id);
    }
}
