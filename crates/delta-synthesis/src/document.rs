//! Taking Stock document assembly.
//!
//! Fresh documents get one category block per framework category, seeded
//! from synthesis. Refreshing an existing document replaces only the
//! synthesized parts (recommended level, evidence snapshot) and leaves every
//! team judgement (selected level, rationale, narratives, improvement
//! selections) untouched.

use chrono::{DateTime, Utc};

use delta_core::entities::{
    ProgrammeTakingStock, TakingStockCategoryData, TakingStockImprovement,
};
use delta_core::enums::{Category, Provenance};
use delta_core::ids::{PREFIX_IMPROVEMENT, PREFIX_TAKING_STOCK, generate_id};

use crate::ModuleSample;
use crate::recommend::{Synthesis, synthesize};
use crate::suggest::improvement_suggestions;

fn system_improvements(
    category: Category,
    samples: &[ModuleSample<'_>],
    now: DateTime<Utc>,
) -> Vec<TakingStockImprovement> {
    improvement_suggestions(category, samples)
        .into_iter()
        .map(|text| TakingStockImprovement {
            id: generate_id(PREFIX_IMPROVEMENT),
            component_id: category,
            text,
            generated_by: Provenance::System,
            selected_as_priority: false,
            created_at: now,
        })
        .collect()
}

fn fresh_category_data(
    category: Category,
    synthesis: Synthesis,
    samples: &[ModuleSample<'_>],
    now: DateTime<Utc>,
) -> TakingStockCategoryData {
    TakingStockCategoryData {
        recommended_level: synthesis.level,
        selected_level: None,
        rationale_override: None,
        evidence_summary: synthesis.evidence,
        what_we_do_well: String::new(),
        areas_for_development: String::new(),
        improvements: system_improvements(category, samples, now),
        updated_at: now,
    }
}

/// Migrate legacy free-text development areas into structured improvements.
fn migrate_legacy_areas(
    category: Category,
    data: &mut TakingStockCategoryData,
    now: DateTime<Utc>,
) {
    data.improvements = data
        .areas_for_development
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| TakingStockImprovement {
            id: generate_id(PREFIX_IMPROVEMENT),
            component_id: category,
            text: line
                .trim_start_matches(['-', '•', '*'])
                .trim_start()
                .to_string(),
            generated_by: Provenance::User,
            selected_as_priority: false,
            created_at: now,
        })
        .collect();
}

/// Build a fresh Taking Stock document from synthesis.
#[must_use]
pub fn build_document(
    programme_id: &str,
    academic_year: &str,
    samples: &[ModuleSample<'_>],
    now: DateTime<Utc>,
) -> ProgrammeTakingStock {
    let mut document = ProgrammeTakingStock {
        id: generate_id(PREFIX_TAKING_STOCK),
        programme_id: programme_id.to_string(),
        academic_year: academic_year.to_string(),
        categories: std::collections::BTreeMap::new(),
        updated_at: now,
        created_at: now,
    };
    for category in Category::ALL {
        let synthesis = synthesize(category, samples);
        document.categories.insert(
            category,
            fresh_category_data(category, synthesis, samples, now),
        );
    }
    document
}

/// Refresh an existing document against current evaluations.
///
/// Synthesized fields are recomputed per category; team input survives.
/// A category whose improvement list is empty but whose legacy free-text
/// area has content gets that text migrated into user improvements first.
/// Fresh system suggestions are then merged in, deduplicated by exact text,
/// so refreshing with unchanged evaluations is idempotent. Categories
/// missing from the document entirely are added fresh.
pub fn refresh_document(
    document: &mut ProgrammeTakingStock,
    samples: &[ModuleSample<'_>],
    now: DateTime<Utc>,
) {
    for category in Category::ALL {
        let synthesis = synthesize(category, samples);
        match document.categories.get_mut(&category) {
            Some(data) => {
                data.recommended_level = synthesis.level;
                data.evidence_summary = synthesis.evidence;
                if data.improvements.is_empty() && !data.areas_for_development.is_empty() {
                    migrate_legacy_areas(category, data, now);
                }
                for suggestion in system_improvements(category, samples, now) {
                    if !data.improvements.iter().any(|imp| imp.text == suggestion.text) {
                        data.improvements.push(suggestion);
                    }
                }
            }
            None => {
                document.categories.insert(
                    category,
                    fresh_category_data(category, synthesis, samples, now),
                );
            }
        }
    }
    document.updated_at = now;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::evaluation_with;
    use delta_core::entities::ModuleMetadata;
    use delta_core::enums::MaturityLevel;
    use delta_core::framework::answer_key;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_document_covers_all_categories_with_system_improvements() {
        let document = build_document("p1", "2024-25", &[], Utc::now());
        assert_eq!(document.categories.len(), 5);
        for data in document.categories.values() {
            assert_eq!(data.recommended_level, MaturityLevel::Developing);
            assert_eq!(data.selected_level, None);
            assert!(!data.improvements.is_empty());
            assert!(data
                .improvements
                .iter()
                .all(|imp| imp.generated_by == Provenance::System));
        }
    }

    #[test]
    fn refresh_updates_synthesis_but_keeps_team_judgement() {
        let mut document = build_document("p1", "2024-25", &[], Utc::now());
        {
            let data = document
                .categories
                .get_mut(&Category::Assessment)
                .unwrap();
            data.selected_level = Some(MaturityLevel::Leading);
            data.what_we_do_well = "Strong portfolio culture.".to_string();
            data.improvements[0].selected_as_priority = true;
        }
        let kept = document.categories[&Category::Assessment].improvements[0].clone();

        // now there is an evaluated module with strong assessment answers
        let mut evaluation = evaluation_with(Some(ModuleMetadata::default()));
        for q in 0..3 {
            evaluation
                .answers
                .insert(answer_key(Category::Assessment, q), 5);
        }
        let samples = [ModuleSample::new("Major Project A", &evaluation)];
        refresh_document(&mut document, &samples, Utc::now());

        let data = &document.categories[&Category::Assessment];
        assert_eq!(data.recommended_level, MaturityLevel::Leading);
        assert_eq!(data.evidence_summary[0], "Based on 1 evaluated modules.");
        assert_eq!(data.selected_level, Some(MaturityLevel::Leading));
        assert_eq!(data.what_we_do_well, "Strong portfolio culture.");
        // existing improvement and its selection survive; new suggestions append
        assert_eq!(data.improvements[0], kept);
        assert!(data.improvements.len() > 1);
    }

    #[test]
    fn refresh_is_idempotent_for_unchanged_evaluations() {
        let evaluation = evaluation_with(Some(ModuleMetadata::default()));
        let samples = [ModuleSample::new("Media Theory", &evaluation)];
        let mut document = build_document("p1", "2024-25", &samples, Utc::now());
        let before = document.categories.clone();
        refresh_document(&mut document, &samples, Utc::now());
        for (category, data) in &document.categories {
            let texts: Vec<&str> = data.improvements.iter().map(|i| i.text.as_str()).collect();
            let expected: Vec<&str> =
                before[category].improvements.iter().map(|i| i.text.as_str()).collect();
            assert_eq!(texts, expected);
        }
    }

    #[test]
    fn refresh_migrates_legacy_free_text_into_improvements() {
        let mut document = build_document("p1", "2024-25", &[], Utc::now());
        {
            let data = document
                .categories
                .get_mut(&Category::EvidenceBased)
                .unwrap();
            data.improvements.clear();
            data.areas_for_development =
                "- Broaden evidence sources\n* Periodic longitudinal review".to_string();
        }
        refresh_document(&mut document, &[], Utc::now());
        let improvements = &document.categories[&Category::EvidenceBased].improvements;
        assert_eq!(improvements[0].text, "Broaden evidence sources");
        assert_eq!(improvements[0].generated_by, Provenance::User);
        assert_eq!(improvements[1].text, "Periodic longitudinal review");
        // fresh system suggestions still merge in after the migrated lines
        assert!(improvements[2..]
            .iter()
            .all(|imp| imp.generated_by == Provenance::System));
    }

    #[test]
    fn refresh_adds_missing_categories() {
        let mut document = build_document("p1", "2024-25", &[], Utc::now());
        document.categories.remove(&Category::TeachingPractice);
        refresh_document(&mut document, &[], Utc::now());
        assert!(document.categories.contains_key(&Category::TeachingPractice));
    }
}
