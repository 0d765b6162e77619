//! Per-category evidence statistics.
//!
//! Each variant counts how many evaluated modules show specific evidence for
//! its category, using metadata predicates. The counts feed both the level
//! recommendation and the improvement suggestions.

use std::collections::BTreeMap;

use serde::Serialize;

use delta_core::entities::{ModuleAssessment, ModuleMetadata};
use delta_core::enums::Category;

use crate::ModuleSample;

fn longer_than(s: Option<&String>, n: usize) -> bool {
    s.is_some_and(|s| s.len() > n)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StrategyCapacityStats {
    pub total: u32,
    /// Modules citing substantive policy influence beyond the boilerplate.
    pub policies: u32,
    pub external: u32,
    pub staff_dev: u32,
    pub partnership: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceBasedStats {
    pub total: u32,
    /// Modules drawing on more than one evidence source.
    pub evidence_sources: u32,
    pub redesigned: u32,
    pub feedback_action: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignOfLearningStats {
    pub total: u32,
    pub udl: u32,
    pub curriculum_links: u32,
    /// Modules making active (not repository-only) use of the VLE.
    pub vle: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeachingPracticeStats {
    pub total: u32,
    pub active_learning: u32,
    pub digital: u32,
    pub transition: u32,
}

/// Assessment timing analysis across the programme's declared assessments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentTiming {
    pub total_summative: u32,
    /// Weeks where three or more summative assessments fall due.
    pub clustering: Vec<i32>,
    /// Modules with a zero-weight or formative component due by week 4.
    pub early_formative: u32,
    /// Rounded mean of each module's first summative due-week, 0 when no
    /// module has a summative assessment.
    pub avg_first_summative: i32,
    pub distribution: BTreeMap<i32, u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentStats {
    pub total: u32,
    pub authentic: u32,
    /// Modules assessing with at least one non-exam method.
    pub varied: u32,
    pub feedback: u32,
    pub peer: u32,
    pub timing: AssessmentTiming,
}

/// Stats for one category, matching the category's own evidence predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentStats {
    StrategyCapacity(StrategyCapacityStats),
    EvidenceBased(EvidenceBasedStats),
    DesignOfLearning(DesignOfLearningStats),
    TeachingPractice(TeachingPracticeStats),
    Assessment(AssessmentStats),
}

/// Per-module evidence predicates, shared between stats and the
/// recommendation pass.
pub(crate) mod predicates {
    use super::{ModuleMetadata, longer_than};

    pub fn substantive_policies(meta: &ModuleMetadata) -> bool {
        meta.policies_influencing.as_deref().is_some_and(|p| {
            p.len() > 10 && !p.contains("Standard university T&L policy")
        })
    }

    pub fn external_requirements(meta: &ModuleMetadata) -> bool {
        longer_than(meta.external_requirements.as_ref(), 5)
    }

    pub fn staff_development(meta: &ModuleMetadata) -> bool {
        longer_than(meta.staff_development_influence.as_ref(), 5)
    }

    pub fn student_partnership(meta: &ModuleMetadata) -> bool {
        meta.student_partnership
            .as_deref()
            .is_some_and(|p| p.len() > 5 && !p.contains("Standard feedback loop"))
    }

    pub fn multiple_evidence_sources(meta: &ModuleMetadata) -> bool {
        meta.evidence_sources.len() > 1
    }

    pub fn redesigned(meta: &ModuleMetadata) -> bool {
        meta.changes_last_3_years
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains("redesign"))
    }

    pub fn feedback_acted_on(meta: &ModuleMetadata) -> bool {
        longer_than(meta.student_feedback_summary.as_ref(), 10)
    }

    pub fn any_udl(meta: &ModuleMetadata) -> bool {
        !meta.udl_indicators.is_empty()
    }

    pub fn curriculum_links(meta: &ModuleMetadata) -> bool {
        longer_than(meta.curriculum_connections.as_ref(), 5)
    }

    pub fn active_vle_use(meta: &ModuleMetadata) -> bool {
        meta.learning_environment_use
            .as_deref()
            .is_some_and(|l| l.contains("Active use"))
    }

    pub fn active_learning(meta: &ModuleMetadata) -> bool {
        meta.teaching_approaches
            .iter()
            .any(|a| a == "pbl" || a == "studio")
    }

    pub fn broad_digital_practice(meta: &ModuleMetadata) -> bool {
        meta.digital_practice.len() > 1
    }

    pub fn transition_support(meta: &ModuleMetadata) -> bool {
        longer_than(meta.transition_support.as_ref(), 5)
    }

    pub fn authentic_assessment(meta: &ModuleMetadata) -> bool {
        meta.authentic_assessment_rationale
            .as_deref()
            .is_some_and(|r| r.len() > 20 && !r.contains("Traditional"))
    }

    pub fn varied_assessment(meta: &ModuleMetadata) -> bool {
        meta.assessments.iter().any(|a| a.assessment_type != "exam")
    }

    pub fn rich_feedback_formats(meta: &ModuleMetadata) -> bool {
        meta.feedback_practices
            .as_deref()
            .is_some_and(|f| f.contains("Audio"))
    }

    pub fn self_peer_assessment(meta: &ModuleMetadata) -> bool {
        meta.self_peer_assessment == Some(true)
    }
}

fn is_formative(a: &ModuleAssessment) -> bool {
    a.weight == 0.0 || a.assessment_type == "formative"
}

fn count<F>(samples: &[ModuleSample<'_>], pred: F) -> u32
where
    F: Fn(&ModuleMetadata) -> bool,
{
    samples
        .iter()
        .filter(|s| s.evaluation.metadata.as_ref().is_some_and(&pred))
        .count() as u32
}

fn assessment_timing(samples: &[ModuleSample<'_>]) -> AssessmentTiming {
    let mut distribution: BTreeMap<i32, u32> = BTreeMap::new();
    let mut total_summative = 0u32;
    for sample in samples {
        let Some(meta) = sample.evaluation.metadata.as_ref() else {
            continue;
        };
        for a in meta.assessments.iter().filter(|a| a.weight > 0.0) {
            total_summative += 1;
            *distribution.entry(a.due_week).or_default() += 1;
        }
    }
    let clustering: Vec<i32> = distribution
        .iter()
        .filter(|&(_, &count)| count >= 3)
        .map(|(&week, _)| week)
        .collect();

    let early_formative = count(samples, |meta| {
        meta.assessments
            .iter()
            .any(|a| is_formative(a) && a.due_week <= 4)
    });

    let first_summative_weeks: Vec<i32> = samples
        .iter()
        .filter_map(|s| {
            s.evaluation
                .metadata
                .as_ref()?
                .assessments
                .iter()
                .filter(|a| a.weight > 0.0)
                .map(|a| a.due_week)
                .min()
        })
        .collect();
    let avg_first_summative = if first_summative_weeks.is_empty() {
        0
    } else {
        let sum: i32 = first_summative_weeks.iter().sum();
        (f64::from(sum) / first_summative_weeks.len() as f64).round() as i32
    };

    AssessmentTiming {
        total_summative,
        clustering,
        early_formative,
        avg_first_summative,
        distribution,
    }
}

impl ComponentStats {
    /// Compute the stats for one category over the evaluated modules.
    #[must_use]
    pub fn for_category(category: Category, samples: &[ModuleSample<'_>]) -> Self {
        let total = samples.len() as u32;
        match category {
            Category::StrategyCapacity => Self::StrategyCapacity(StrategyCapacityStats {
                total,
                policies: count(samples, predicates::substantive_policies),
                external: count(samples, predicates::external_requirements),
                staff_dev: count(samples, predicates::staff_development),
                partnership: count(samples, predicates::student_partnership),
            }),
            Category::EvidenceBased => Self::EvidenceBased(EvidenceBasedStats {
                total,
                evidence_sources: count(samples, predicates::multiple_evidence_sources),
                redesigned: count(samples, predicates::redesigned),
                feedback_action: count(samples, predicates::feedback_acted_on),
            }),
            Category::DesignOfLearning => Self::DesignOfLearning(DesignOfLearningStats {
                total,
                udl: count(samples, predicates::any_udl),
                curriculum_links: count(samples, predicates::curriculum_links),
                vle: count(samples, predicates::active_vle_use),
            }),
            Category::TeachingPractice => Self::TeachingPractice(TeachingPracticeStats {
                total,
                active_learning: count(samples, predicates::active_learning),
                digital: count(samples, predicates::broad_digital_practice),
                transition: count(samples, predicates::transition_support),
            }),
            Category::Assessment => Self::Assessment(AssessmentStats {
                total,
                authentic: count(samples, predicates::authentic_assessment),
                varied: count(samples, predicates::varied_assessment),
                feedback: count(samples, predicates::rich_feedback_formats),
                peer: count(samples, predicates::self_peer_assessment),
                timing: assessment_timing(samples),
            }),
        }
    }

    /// The evidence predicate used for the level recommendation: whether one
    /// module shows specific evidence for this category.
    #[must_use]
    pub fn specific_evidence(category: Category, meta: &ModuleMetadata) -> bool {
        match category {
            Category::StrategyCapacity => meta
                .policies_influencing
                .as_deref()
                .is_some_and(|p| p.len() > 10),
            Category::EvidenceBased => predicates::multiple_evidence_sources(meta),
            Category::DesignOfLearning => predicates::any_udl(meta),
            Category::TeachingPractice => predicates::active_learning(meta),
            Category::Assessment => predicates::varied_assessment(meta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::evaluation_with;
    use delta_core::enums::TimingBand;
    use pretty_assertions::assert_eq;

    fn assessment(assessment_type: &str, weight: f64, due_week: i32) -> ModuleAssessment {
        ModuleAssessment {
            id: "a".to_string(),
            name: "A".to_string(),
            assessment_type: assessment_type.to_string(),
            weight,
            due_week,
            shared: false,
            shared_with: None,
            evidence_type: None,
            evidence_content: None,
            timing_band: TimingBand::from_week(due_week),
        }
    }

    #[test]
    fn boilerplate_policy_text_does_not_count() {
        let strong = ModuleMetadata {
            policies_influencing: Some(
                "Aligned with the National Forum Authentic Assessment Framework.".to_string(),
            ),
            ..ModuleMetadata::default()
        };
        let weak = ModuleMetadata {
            policies_influencing: Some(
                "Standard university T&L policy followed regarding assessment.".to_string(),
            ),
            ..ModuleMetadata::default()
        };
        let evals = [evaluation_with(Some(strong)), evaluation_with(Some(weak))];
        let samples: Vec<ModuleSample<'_>> = evals
            .iter()
            .map(|e| ModuleSample::new("M", e))
            .collect();
        let ComponentStats::StrategyCapacity(stats) =
            ComponentStats::for_category(Category::StrategyCapacity, &samples)
        else {
            panic!("wrong variant");
        };
        assert_eq!(stats.total, 2);
        assert_eq!(stats.policies, 1);
    }

    #[test]
    fn missing_metadata_counts_toward_total_only() {
        let evals = [evaluation_with(None)];
        let samples: Vec<ModuleSample<'_>> =
            evals.iter().map(|e| ModuleSample::new("M", e)).collect();
        let ComponentStats::EvidenceBased(stats) =
            ComponentStats::for_category(Category::EvidenceBased, &samples)
        else {
            panic!("wrong variant");
        };
        assert_eq!(stats.total, 1);
        assert_eq!(stats.evidence_sources, 0);
    }

    #[test]
    fn timing_detects_clustering_and_early_formative() {
        let meta = |due_weeks: &[i32], formative_week: Option<i32>| {
            let mut assessments: Vec<ModuleAssessment> = due_weeks
                .iter()
                .map(|&w| assessment("project", 50.0, w))
                .collect();
            if let Some(w) = formative_week {
                assessments.push(assessment("formative", 0.0, w));
            }
            ModuleMetadata {
                assessments,
                ..ModuleMetadata::default()
            }
        };
        let evals = [
            evaluation_with(Some(meta(&[12, 6], Some(3)))),
            evaluation_with(Some(meta(&[12], None))),
            evaluation_with(Some(meta(&[12, 9], Some(8)))),
        ];
        let samples: Vec<ModuleSample<'_>> =
            evals.iter().map(|e| ModuleSample::new("M", e)).collect();
        let ComponentStats::Assessment(stats) =
            ComponentStats::for_category(Category::Assessment, &samples)
        else {
            panic!("wrong variant");
        };
        // week 12 carries three summatives
        assert_eq!(stats.timing.clustering, vec![12]);
        assert_eq!(stats.timing.total_summative, 5);
        // only the first module has a formative task by week 4
        assert_eq!(stats.timing.early_formative, 1);
        // first summative weeks are 6, 12, 9 → mean 9
        assert_eq!(stats.timing.avg_first_summative, 9);
    }

    #[test]
    fn varied_assessment_requires_a_non_exam_method() {
        let exam_only = ModuleMetadata {
            assessments: vec![assessment("exam", 100.0, 14)],
            ..ModuleMetadata::default()
        };
        let mixed = ModuleMetadata {
            assessments: vec![assessment("exam", 60.0, 14), assessment("project", 40.0, 8)],
            ..ModuleMetadata::default()
        };
        let evals = [
            evaluation_with(Some(exam_only)),
            evaluation_with(Some(mixed)),
        ];
        let samples: Vec<ModuleSample<'_>> =
            evals.iter().map(|e| ModuleSample::new("M", e)).collect();
        let ComponentStats::Assessment(stats) =
            ComponentStats::for_category(Category::Assessment, &samples)
        else {
            panic!("wrong variant");
        };
        assert_eq!(stats.varied, 1);
    }
}
