//! Level recommendation and evidence snapshot for one category.

use serde::Serialize;

use delta_core::enums::{Category, MaturityLevel};
use delta_core::framework::{QUESTIONS_PER_CATEGORY, answer_key};

use crate::ModuleSample;
use crate::stats::{ComponentStats, predicates};

const MAX_EVIDENCE_POINTS: usize = 4;
const NO_EVALUATIONS: &str = "No module evaluations submitted yet for this academic year.";

/// The synthesis result for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Synthesis {
    pub level: MaturityLevel,
    /// Snapshot lines: headline counts first, then up to four deduplicated
    /// module-specific points.
    pub evidence: Vec<String>,
    /// Quoted per-module evidence summaries, surfaced as strength material.
    pub strengths: Vec<String>,
}

/// Synthesize the recommendation for one category.
///
/// The level is a step function over two signals: the share of modules whose
/// metadata shows specific evidence for the category, and the average of the
/// category's own Likert answers across all modules. Either signal alone can
/// lift the level.
#[must_use]
pub fn synthesize(category: Category, samples: &[ModuleSample<'_>]) -> Synthesis {
    if samples.is_empty() {
        return Synthesis {
            level: MaturityLevel::Developing,
            evidence: vec![NO_EVALUATIONS.to_string()],
            strengths: Vec::new(),
        };
    }

    let mut total_score = 0u32;
    let mut answer_count = 0u32;
    let mut evidence_points: Vec<String> = Vec::new();
    let mut strengths: Vec<String> = Vec::new();
    let mut specific_evidence_count = 0u32;

    for sample in samples {
        let evaluation = sample.evaluation;
        let name = sample.module_name;

        for q in 0..QUESTIONS_PER_CATEGORY {
            if let Some(&value) = evaluation.answers.get(&answer_key(category, q)) {
                total_score += u32::from(value);
                answer_count += 1;
            }
        }

        if let Some(meta) = evaluation.metadata.as_ref() {
            if ComponentStats::specific_evidence(category, meta) {
                specific_evidence_count += 1;
            }
            collect_evidence_points(category, name, meta, &mut evidence_points);
        }

        if let Some(summary) = evaluation.evidence_summaries.get(&category) {
            strengths.push(format!("{name}: \"{summary}\""));
        }
    }

    let avg_score = if answer_count > 0 {
        f64::from(total_score) / f64::from(answer_count)
    } else {
        0.0
    };
    let evidence_ratio = f64::from(specific_evidence_count) / samples.len() as f64;

    let level = if evidence_ratio > 0.75 || avg_score >= 4.0 {
        MaturityLevel::Leading
    } else if evidence_ratio > 0.4 || avg_score >= 3.0 {
        MaturityLevel::Consolidating
    } else {
        MaturityLevel::Developing
    };

    let mut evidence = vec![
        format!("Based on {} evaluated modules.", samples.len()),
        format!("Average component score: {avg_score:.1} / 5.0"),
        format!(
            "{} modules ({}%) show specific evidence for this component.",
            specific_evidence_count,
            (evidence_ratio * 100.0).round() as i64
        ),
    ];
    let mut seen = std::collections::HashSet::new();
    evidence.extend(
        evidence_points
            .into_iter()
            .filter(|p| seen.insert(p.clone()))
            .take(MAX_EVIDENCE_POINTS),
    );

    Synthesis {
        level,
        evidence,
        strengths,
    }
}

fn collect_evidence_points(
    category: Category,
    name: &str,
    meta: &delta_core::entities::ModuleMetadata,
    points: &mut Vec<String>,
) {
    match category {
        Category::StrategyCapacity => {
            if let Some(policies) = meta.policies_influencing.as_deref()
                && policies.len() > 10
                && points.len() < 2
                && policies != "Standard university T&L policy."
            {
                points.push(format!("{name}: \"{policies}\""));
            }
            if let Some(external) = meta.external_requirements.as_deref() {
                points.push(format!("{name}: Driven by {external}"));
            }
        }
        Category::EvidenceBased => {
            if meta
                .changes_last_3_years
                .as_deref()
                .is_some_and(|c| c.contains("redesign"))
            {
                points.push(format!("{name}: Major redesign based on evidence."));
            }
        }
        Category::DesignOfLearning => {
            if meta.curriculum_connections.is_some() {
                points.push(format!("{name} connects explicitly to other stages."));
            }
        }
        Category::TeachingPractice => {
            if predicates::active_learning(meta) {
                points.push(format!("{name} uses active learning (PBL/Studio)."));
            }
        }
        Category::Assessment => {
            if let Some(rationale) = meta.authentic_assessment_rationale.as_deref()
                && rationale.len() > 20
                && !rationale.contains("Traditional")
            {
                points.push(format!("{name}: \"{rationale}\""));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::evaluation_with;
    use delta_core::entities::{ModuleEvaluation, ModuleMetadata};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn with_answers(category: Category, values: [u8; 3]) -> ModuleEvaluation {
        let mut evaluation = evaluation_with(None);
        for (q, v) in values.into_iter().enumerate() {
            evaluation.answers.insert(answer_key(category, q), v);
        }
        evaluation
    }

    #[test]
    fn empty_programme_is_developing_with_placeholder_line() {
        let synthesis = synthesize(Category::Assessment, &[]);
        assert_eq!(synthesis.level, MaturityLevel::Developing);
        assert_eq!(synthesis.evidence, vec![NO_EVALUATIONS.to_string()]);
        assert!(synthesis.strengths.is_empty());
    }

    #[rstest]
    #[case([5, 4, 4], MaturityLevel::Leading)]
    #[case([3, 3, 3], MaturityLevel::Consolidating)]
    #[case([2, 2, 2], MaturityLevel::Developing)]
    fn average_score_alone_sets_the_level(
        #[case] values: [u8; 3],
        #[case] expected: MaturityLevel,
    ) {
        let evaluation = with_answers(Category::TeachingPractice, values);
        let samples = [ModuleSample::new("Media Theory", &evaluation)];
        assert_eq!(synthesize(Category::TeachingPractice, &samples).level, expected);
    }

    #[test]
    fn evidence_ratio_alone_can_lift_the_level() {
        // low scores, but every module shows specific evidence
        let meta = ModuleMetadata {
            teaching_approaches: vec!["pbl".to_string()],
            ..ModuleMetadata::default()
        };
        let mut evaluation = with_answers(Category::TeachingPractice, [2, 2, 2]);
        evaluation.metadata = Some(meta);
        let samples = [ModuleSample::new("Interactive Design", &evaluation)];
        let synthesis = synthesize(Category::TeachingPractice, &samples);
        // ratio 1.0 > 0.75
        assert_eq!(synthesis.level, MaturityLevel::Leading);
        assert!(synthesis
            .evidence
            .contains(&"Interactive Design uses active learning (PBL/Studio).".to_string()));
    }

    #[test]
    fn headline_lines_report_counts_and_ratio() {
        let a = with_answers(Category::Assessment, [4, 4, 4]);
        let b = with_answers(Category::Assessment, [2, 2, 2]);
        let samples = [ModuleSample::new("A", &a), ModuleSample::new("B", &b)];
        let synthesis = synthesize(Category::Assessment, &samples);
        assert_eq!(synthesis.evidence[0], "Based on 2 evaluated modules.");
        assert_eq!(synthesis.evidence[1], "Average component score: 3.0 / 5.0");
        assert_eq!(
            synthesis.evidence[2],
            "0 modules (0%) show specific evidence for this component."
        );
    }

    #[test]
    fn module_points_are_deduplicated_and_capped() {
        let meta = ModuleMetadata {
            curriculum_connections: Some("Builds on Stage 1.".to_string()),
            ..ModuleMetadata::default()
        };
        let evals: Vec<ModuleEvaluation> = (0..6)
            .map(|_| {
                let mut e = evaluation_with(Some(meta.clone()));
                e.answers.insert(answer_key(Category::DesignOfLearning, 0), 3);
                e
            })
            .collect();
        // same module name everywhere → a single deduplicated point
        let samples: Vec<ModuleSample<'_>> =
            evals.iter().map(|e| ModuleSample::new("M", e)).collect();
        let synthesis = synthesize(Category::DesignOfLearning, &samples);
        let points: Vec<_> = synthesis.evidence.iter().skip(3).collect();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0], "M connects explicitly to other stages.");
    }

    #[test]
    fn strengths_quote_the_evidence_summaries() {
        let mut evaluation = with_answers(Category::Assessment, [3, 3, 3]);
        evaluation
            .evidence_summaries
            .insert(Category::Assessment, "Portfolio mirrors practice.".to_string());
        let samples = [ModuleSample::new("Major Project A", &evaluation)];
        let synthesis = synthesize(Category::Assessment, &samples);
        assert_eq!(
            synthesis.strengths,
            vec!["Major Project A: \"Portfolio mirrors practice.\"".to_string()]
        );
    }
}
