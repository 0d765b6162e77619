//! Evaluation repository: save with derived scores, upsert by natural key,
//! append-only history.

use chrono::Utc;

use delta_core::entities::{ModuleEvaluation, ModuleEvaluationHistory};
use delta_core::enums::TimingBand;
use delta_core::ids::{PREFIX_EVALUATION, PREFIX_HISTORY, generate_id};
use delta_core::scoring;

use crate::keys;
use crate::store::DeltaStore;

const WEIGHT_WARNING: &str =
    "The total assessment weighting does not sum to approximately 100%. Please review the weights.";

/// What a save produced: the stored record, its new history version, and any
/// non-blocking warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub evaluation: ModuleEvaluation,
    pub version_number: u32,
    pub warnings: Vec<String>,
}

impl DeltaStore {
    /// Save an evaluation, deriving scores from its answers.
    ///
    /// The natural key is (`module_id`, `academic_year`): saving again for
    /// the same pair replaces the active record while keeping `created_at`
    /// and the evaluation id. Every save appends an immutable history
    /// snapshot with the next version number.
    ///
    /// Validation never blocks the save. An assessment weight total outside
    /// 95–105% produces a warning; a due week outside teaching weeks 1–15 is
    /// clamped to week 1 in the early band.
    pub fn save_evaluation(&mut self, mut evaluation: ModuleEvaluation) -> SaveOutcome {
        let now = Utc::now();
        let mut warnings = Vec::new();

        let (scores, levels) = scoring::derive_category_results(&evaluation.answers);
        evaluation.category_scores = scores;
        evaluation.category_levels = levels;
        evaluation.indicator_scores = scoring::derive_indicator_scores(&evaluation.answers);

        if let Some(metadata) = evaluation.metadata.as_mut() {
            if !metadata.assessments.is_empty() {
                let total: f64 = metadata.assessments.iter().map(|a| a.weight).sum();
                if !(95.0..=105.0).contains(&total) {
                    warnings.push(WEIGHT_WARNING.to_string());
                }
            }
            for assessment in &mut metadata.assessments {
                if (1..=15).contains(&assessment.due_week) {
                    assessment.timing_band = TimingBand::from_week(assessment.due_week);
                } else {
                    assessment.due_week = 1;
                    assessment.timing_band = TimingBand::Early;
                }
            }
        }

        let existing = self.evaluations.iter().find(|e| {
            e.module_id == evaluation.module_id && e.academic_year == evaluation.academic_year
        });
        match existing {
            Some(existing) => {
                if evaluation.id.is_none() {
                    evaluation.id = existing.id.clone();
                }
                evaluation.created_at = existing.created_at.or(Some(now));
            }
            None => {
                if evaluation.id.is_none() {
                    evaluation.id = Some(generate_id(PREFIX_EVALUATION));
                }
                evaluation.created_at = Some(now);
            }
        }
        evaluation.updated_at = Some(now);
        evaluation.completed_at = now;

        self.evaluations.retain(|e| {
            !(e.module_id == evaluation.module_id && e.academic_year == evaluation.academic_year)
        });
        self.evaluations.push(evaluation.clone());
        self.persist(keys::EVALUATIONS, &self.evaluations);

        let evaluation_id = evaluation.id.clone().unwrap_or_default();
        let version_number = self
            .history
            .iter()
            .filter(|h| h.module_evaluation_id == evaluation_id)
            .map(|h| h.version_number)
            .max()
            .unwrap_or(0)
            + 1;
        self.history.push(ModuleEvaluationHistory {
            id: generate_id(PREFIX_HISTORY),
            module_evaluation_id: evaluation_id,
            module_id: evaluation.module_id.clone(),
            version_number,
            snapshot: evaluation.clone(),
            created_at: now,
        });
        self.persist(keys::EVALUATIONS_HISTORY, &self.history);

        SaveOutcome {
            evaluation,
            version_number,
            warnings,
        }
    }

    /// The evaluation for a module. With a year, the exact record; without,
    /// the most recently updated one.
    #[must_use]
    pub fn get_evaluation(
        &self,
        module_id: &str,
        academic_year: Option<&str>,
    ) -> Option<&ModuleEvaluation> {
        let mut candidates: Vec<&ModuleEvaluation> = self
            .evaluations
            .iter()
            .filter(|e| e.module_id == module_id)
            .collect();
        match academic_year {
            Some(year) => candidates.into_iter().find(|e| e.academic_year == year),
            None => {
                candidates.sort_by_key(|e| std::cmp::Reverse(e.updated_at));
                candidates.into_iter().next()
            }
        }
    }

    /// History for a module, newest version first.
    #[must_use]
    pub fn evaluation_history(&self, module_id: &str) -> Vec<&ModuleEvaluationHistory> {
        let mut entries: Vec<&ModuleEvaluationHistory> = self
            .history
            .iter()
            .filter(|h| h.module_id == module_id)
            .collect();
        entries.sort_by_key(|h| std::cmp::Reverse(h.version_number));
        entries
    }

    /// Evaluations for all modules linked into a programme, for one year.
    #[must_use]
    pub fn programme_evaluations(
        &self,
        programme_id: &str,
        academic_year: &str,
    ) -> Vec<&ModuleEvaluation> {
        self.programme_modules
            .iter()
            .filter(|pm| pm.programme_id == programme_id)
            .filter_map(|pm| self.get_evaluation(&pm.module_id, Some(academic_year)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medium::MemoryMedium;
    use delta_core::entities::{ModuleAssessment, ModuleMetadata};
    use delta_core::enums::{Category, MaturityLevel};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn store() -> DeltaStore {
        DeltaStore::open(Box::new(MemoryMedium::new()), false).unwrap()
    }

    fn evaluation(module_id: &str, year: &str) -> ModuleEvaluation {
        let mut answers = BTreeMap::new();
        for q in 0..3 {
            answers.insert(format!("0_{q}"), 5u8);
            answers.insert(format!("4_{q}"), 2u8);
        }
        ModuleEvaluation {
            id: None,
            user_id: "u1".to_string(),
            module_id: module_id.to_string(),
            academic_year: year.to_string(),
            answers,
            category_scores: BTreeMap::new(),
            category_levels: BTreeMap::new(),
            indicator_scores: BTreeMap::new(),
            evidence_summaries: BTreeMap::new(),
            artefacts: BTreeMap::new(),
            module_headline: None,
            metadata: None,
            completed_at: Utc::now(),
            created_at: None,
            updated_at: None,
        }
    }

    fn assessment(weight: f64, due_week: i32) -> ModuleAssessment {
        ModuleAssessment {
            id: "a1".to_string(),
            name: "Project".to_string(),
            assessment_type: "project".to_string(),
            weight,
            due_week,
            shared: false,
            shared_with: None,
            evidence_type: None,
            evidence_content: None,
            timing_band: TimingBand::Late,
        }
    }

    #[test]
    fn save_derives_scores_and_levels() {
        let mut store = store();
        let outcome = store.save_evaluation(evaluation("m1", "2024-25"));
        let eval = &outcome.evaluation;
        assert_eq!(eval.category_scores[&Category::StrategyCapacity], 10);
        assert_eq!(
            eval.category_levels[&Category::StrategyCapacity],
            MaturityLevel::Leading
        );
        // three 2s sum to 6 → score 3 → developing
        assert_eq!(eval.category_scores[&Category::Assessment], 3);
        assert_eq!(
            eval.category_levels[&Category::Assessment],
            MaturityLevel::Developing
        );
        assert_eq!(eval.indicator_scores.get("sc_1"), Some(&5));
        assert_eq!(outcome.version_number, 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn resave_same_module_and_year_replaces_and_versions() {
        let mut store = store();
        let first = store.save_evaluation(evaluation("m1", "2024-25"));
        let second = store.save_evaluation(evaluation("m1", "2024-25"));

        assert_eq!(store.evaluations.len(), 1);
        assert_eq!(second.evaluation.id, first.evaluation.id);
        assert_eq!(second.evaluation.created_at, first.evaluation.created_at);
        assert_eq!(second.version_number, 2);

        let history = store.evaluation_history("m1");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].version_number, 2);
        assert_eq!(history[1].version_number, 1);
    }

    #[test]
    fn different_years_coexist() {
        let mut store = store();
        store.save_evaluation(evaluation("m1", "2023-24"));
        store.save_evaluation(evaluation("m1", "2024-25"));
        assert_eq!(store.evaluations.len(), 2);
        assert!(store.get_evaluation("m1", Some("2023-24")).is_some());
        // without a year the latest updated record wins
        let latest = store.get_evaluation("m1", None).unwrap();
        assert_eq!(latest.academic_year, "2024-25");
    }

    #[test]
    fn weight_total_outside_band_warns_but_saves() {
        let mut store = store();
        let mut eval = evaluation("m1", "2024-25");
        eval.metadata = Some(ModuleMetadata {
            assessments: vec![assessment(60.0, 12), assessment(20.0, 6)],
            ..ModuleMetadata::default()
        });
        let outcome = store.save_evaluation(eval);
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("approximately 100%"));
        assert_eq!(store.evaluations.len(), 1);
    }

    #[test]
    fn weight_total_within_band_passes() {
        let mut store = store();
        let mut eval = evaluation("m1", "2024-25");
        eval.metadata = Some(ModuleMetadata {
            assessments: vec![assessment(60.0, 12), assessment(38.0, 6)],
            ..ModuleMetadata::default()
        });
        let outcome = store.save_evaluation(eval);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn out_of_range_due_week_clamps_to_week_one() {
        let mut store = store();
        let mut eval = evaluation("m1", "2024-25");
        eval.metadata = Some(ModuleMetadata {
            assessments: vec![assessment(100.0, 22)],
            ..ModuleMetadata::default()
        });
        let outcome = store.save_evaluation(eval);
        let saved = &outcome.evaluation.metadata.as_ref().unwrap().assessments[0];
        assert_eq!(saved.due_week, 1);
        assert_eq!(saved.timing_band, TimingBand::Early);
    }

    #[test]
    fn in_range_due_week_gets_recomputed_band() {
        let mut store = store();
        let mut eval = evaluation("m1", "2024-25");
        // stored band says late but week 6 is mid; save corrects it
        eval.metadata = Some(ModuleMetadata {
            assessments: vec![assessment(100.0, 6)],
            ..ModuleMetadata::default()
        });
        let outcome = store.save_evaluation(eval);
        let saved = &outcome.evaluation.metadata.as_ref().unwrap().assessments[0];
        assert_eq!(saved.timing_band, TimingBand::Mid);
    }
}
