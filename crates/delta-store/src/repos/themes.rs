//! Theme repository.
//!
//! Themes group selected priorities in chunks of three. Generation is only
//! a starting point: titles and rationales are fully editable afterwards.

use chrono::Utc;

use delta_core::entities::PriorityTheme;
use delta_core::ids::{PREFIX_THEME, generate_id};

use crate::keys;
use crate::store::DeltaStore;

const PRIORITIES_PER_THEME: usize = 3;

fn theme_title(index: usize) -> &'static str {
    if index == 0 {
        "Enhancing Assessment & Feedback"
    } else {
        "Curriculum Coherence & Student Support"
    }
}

impl DeltaStore {
    #[must_use]
    pub fn programme_themes(&self, programme_id: &str) -> Vec<&PriorityTheme> {
        self.themes
            .iter()
            .filter(|t| t.programme_id == programme_id)
            .collect()
    }

    /// Themes for a programme, generating them from selected priorities when
    /// none exist yet. Generated themes are persisted immediately.
    pub fn themes_or_generate(&mut self, programme_id: &str) -> Vec<PriorityTheme> {
        let existing: Vec<PriorityTheme> = self
            .programme_themes(programme_id)
            .into_iter()
            .cloned()
            .collect();
        if !existing.is_empty() {
            return existing;
        }

        let selected = self.selected_priorities(programme_id);
        if selected.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        let mut generated = Vec::new();
        for (index, chunk) in selected.chunks(PRIORITIES_PER_THEME).enumerate() {
            let rationale = format!(
                "Based on the identified needs to improve {}",
                chunk
                    .iter()
                    .map(|p| {
                        let prefix: String = p.text.chars().take(20).collect();
                        format!("{prefix}...")
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            generated.push(PriorityTheme {
                id: generate_id(PREFIX_THEME),
                programme_id: programme_id.to_string(),
                title: theme_title(index).to_string(),
                linked_priority_ids: chunk.iter().map(|p| p.id.clone()).collect(),
                rationale,
                created_at: now,
            });
        }

        self.themes.extend(generated.iter().cloned());
        self.persist(keys::PROGRAMME_THEMES, &self.themes);
        generated
    }

    /// Replace the theme set for a programme.
    pub fn save_themes(&mut self, programme_id: &str, themes: Vec<PriorityTheme>) {
        self.themes.retain(|t| t.programme_id != programme_id);
        self.themes.extend(themes);
        self.persist(keys::PROGRAMME_THEMES, &self.themes);
    }
}
