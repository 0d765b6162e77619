//! Priority repository.
//!
//! The priority view is constructed, not stored: it merges the Taking Stock
//! improvement lists with any saved selections. Saving writes the priority
//! list and syncs the `selected_as_priority` flags back onto the Taking
//! Stock document so both stay consistent.

use chrono::Utc;

use delta_core::entities::ProgrammePriority;
use delta_core::enums::{Category, Provenance};
use delta_core::ids::{PREFIX_PRIORITY, generate_id};

use crate::keys;
use crate::store::DeltaStore;

/// Strip a leading bullet marker from a legacy free-text line.
fn clean_line(line: &str) -> &str {
    line.trim_start_matches(['-', '•', '*']).trim_start()
}

impl DeltaStore {
    /// The candidate priority list for a programme and year.
    ///
    /// Improvements from the Taking Stock document are the primary source;
    /// saved selections override their flags, matched by improvement id. For
    /// categories that only carry legacy free-text areas, each non-trivial
    /// line becomes a candidate, matched to saved priorities by text and
    /// category. Without a Taking Stock document the saved list is returned
    /// as-is.
    #[must_use]
    pub fn priority_view(&self, programme_id: &str, academic_year: &str) -> Vec<ProgrammePriority> {
        let saved: Vec<&ProgrammePriority> = self
            .priorities
            .iter()
            .filter(|p| p.programme_id == programme_id)
            .collect();

        let Some(taking_stock) = self.get_taking_stock(programme_id, academic_year) else {
            return saved.into_iter().cloned().collect();
        };

        let mut combined = Vec::new();
        for category in Category::ALL {
            let Some(data) = taking_stock.categories.get(&category) else {
                continue;
            };
            if !data.improvements.is_empty() {
                for imp in &data.improvements {
                    let existing = saved
                        .iter()
                        .find(|p| p.text == imp.text && p.component_id == category);
                    let selected =
                        existing.map_or(imp.selected_as_priority, |p| p.selected);
                    combined.push(ProgrammePriority {
                        id: imp.id.clone(),
                        programme_id: programme_id.to_string(),
                        component_id: category,
                        text: imp.text.clone(),
                        selected,
                        generated_by: imp.generated_by,
                        created_at: imp.created_at,
                    });
                }
            } else if !data.areas_for_development.is_empty() {
                for line in data.areas_for_development.lines() {
                    let text = clean_line(line.trim());
                    if text.len() <= 5 {
                        continue;
                    }
                    let existing = saved
                        .iter()
                        .find(|p| p.text == text && p.component_id == category);
                    combined.push(ProgrammePriority {
                        id: existing.map_or_else(
                            || generate_id(PREFIX_PRIORITY),
                            |p| p.id.clone(),
                        ),
                        programme_id: programme_id.to_string(),
                        component_id: category,
                        text: text.to_string(),
                        selected: existing.is_some_and(|p| p.selected),
                        generated_by: Provenance::User,
                        created_at: existing.map_or_else(Utc::now, |p| p.created_at),
                    });
                }
            }
        }
        combined
    }

    /// Persist a priority selection and sync the flags back onto the Taking
    /// Stock improvements they came from.
    pub fn save_priorities(
        &mut self,
        programme_id: &str,
        academic_year: &str,
        priorities: Vec<ProgrammePriority>,
    ) {
        self.priorities.retain(|p| p.programme_id != programme_id);
        self.priorities.extend(priorities.iter().cloned());
        self.persist(keys::PROGRAMME_PRIORITIES, &self.priorities);

        let Some(taking_stock) = self
            .taking_stocks
            .iter_mut()
            .find(|pts| pts.programme_id == programme_id && pts.academic_year == academic_year)
        else {
            return;
        };

        let mut changed = false;
        for data in taking_stock.categories.values_mut() {
            for imp in &mut data.improvements {
                if let Some(matching) = priorities.iter().find(|p| p.id == imp.id)
                    && matching.selected != imp.selected_as_priority
                {
                    imp.selected_as_priority = matching.selected;
                    changed = true;
                }
            }
        }
        if changed {
            taking_stock.updated_at = Utc::now();
            self.persist(keys::PROGRAMME_TAKING_STOCK, &self.taking_stocks);
        }
    }

    /// Saved priorities for a programme that are marked selected.
    #[must_use]
    pub fn selected_priorities(&self, programme_id: &str) -> Vec<&ProgrammePriority> {
        self.priorities
            .iter()
            .filter(|p| p.programme_id == programme_id && p.selected)
            .collect()
    }
}
