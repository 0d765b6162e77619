//! Taking Stock repository.

use chrono::Utc;

use delta_core::entities::ProgrammeTakingStock;
use delta_core::ids::{PREFIX_TAKING_STOCK, generate_id};

use crate::keys;
use crate::store::DeltaStore;

impl DeltaStore {
    #[must_use]
    pub fn get_taking_stock(
        &self,
        programme_id: &str,
        academic_year: &str,
    ) -> Option<&ProgrammeTakingStock> {
        self.taking_stocks
            .iter()
            .find(|pts| pts.programme_id == programme_id && pts.academic_year == academic_year)
    }

    /// Upsert a Taking Stock document by id, falling back to the
    /// (programme, year) pair for fresh documents.
    pub fn save_taking_stock(&mut self, mut record: ProgrammeTakingStock) -> ProgrammeTakingStock {
        let now = Utc::now();
        record.updated_at = now;
        if record.id.is_empty() {
            record.id = generate_id(PREFIX_TAKING_STOCK);
            record.created_at = now;
        }

        let existing = self.taking_stocks.iter_mut().find(|pts| {
            pts.id == record.id
                || (pts.programme_id == record.programme_id
                    && pts.academic_year == record.academic_year)
        });
        match existing {
            Some(slot) => *slot = record.clone(),
            None => self.taking_stocks.push(record.clone()),
        }
        self.persist(keys::PROGRAMME_TAKING_STOCK, &self.taking_stocks);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use delta_core::entities::{TakingStockCategoryData, TakingStockImprovement};
    use delta_core::enums::{Category, MaturityLevel, Provenance};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn store() -> DeltaStore {
        DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap()
    }

    fn record(programme_id: &str, year: &str) -> ProgrammeTakingStock {
        let now = Utc::now();
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Assessment,
            TakingStockCategoryData {
                recommended_level: MaturityLevel::Consolidating,
                selected_level: None,
                rationale_override: None,
                evidence_summary: vec!["Based on 3 evaluated modules.".to_string()],
                what_we_do_well: String::new(),
                areas_for_development: String::new(),
                improvements: vec![TakingStockImprovement {
                    id: "imp-1".to_string(),
                    component_id: Category::Assessment,
                    text: "Diversify assessment methods.".to_string(),
                    generated_by: Provenance::System,
                    selected_as_priority: false,
                    created_at: now,
                }],
                updated_at: now,
            },
        );
        ProgrammeTakingStock {
            id: String::new(),
            programme_id: programme_id.to_string(),
            academic_year: year.to_string(),
            categories,
            updated_at: now,
            created_at: now,
        }
    }

    #[test]
    fn save_assigns_id_and_upserts_by_programme_year() {
        let mut store = store();
        let saved = store.save_taking_stock(record("p1", "2024-25"));
        assert!(saved.id.starts_with("tks-"));

        let mut second = record("p1", "2024-25");
        second
            .categories
            .get_mut(&Category::Assessment)
            .unwrap()
            .selected_level = Some(MaturityLevel::Leading);
        store.save_taking_stock(second);

        assert_eq!(store.taking_stocks.len(), 1);
        let current = store.get_taking_stock("p1", "2024-25").unwrap();
        assert_eq!(
            current.categories[&Category::Assessment].selected_level,
            Some(MaturityLevel::Leading)
        );
    }

    #[test]
    fn documents_are_scoped_by_year() {
        let mut store = store();
        store.save_taking_stock(record("p1", "2024-25"));
        store.save_taking_stock(record("p1", "2025-26"));
        assert_eq!(store.taking_stocks.len(), 2);
        assert!(store.get_taking_stock("p1", "2023-24").is_none());
    }
}
