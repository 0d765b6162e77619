//! Demo dataset.
//!
//! Seeds two programmes with a full module set, owners, and one evaluation
//! per module so heatmaps and synthesis have material to work with. The data
//! is deterministic: repeated seeds of an empty store produce identical
//! records apart from timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use delta_core::entities::{
    Module, ModuleAssessment, ModuleEvaluation, ModuleMetadata, ModuleOwner, Programme,
    ProgrammeChair, ProgrammeModule,
};
use delta_core::enums::{ArtefactType, Category, CoreElective, Semester, TimingBand};
use delta_core::framework::{QUESTIONS_PER_CATEGORY, answer_key};
use delta_core::scoring;

use crate::keys;
use crate::store::DeltaStore;

pub const DEMO_ACADEMIC_YEAR: &str = "2024-25";

struct ModuleSpec {
    id: &'static str,
    code: &'static str,
    name: &'static str,
    credits: u32,
}

const DP101_MODULES: [ModuleSpec; 8] = [
    ModuleSpec { id: "m_dp1_1", code: "DM101", name: "Digital Foundations", credits: 5 },
    ModuleSpec { id: "m_dp1_2", code: "DM102", name: "Media Theory", credits: 5 },
    ModuleSpec { id: "m_dp1_3", code: "DM201", name: "Interactive Design", credits: 10 },
    ModuleSpec { id: "m_dp1_4", code: "DM202", name: "User Experience Studio", credits: 10 },
    ModuleSpec { id: "m_dp1_5", code: "DM301", name: "Advanced Web Tech", credits: 5 },
    ModuleSpec { id: "m_dp1_6", code: "DM302", name: "Digital Ethics", credits: 5 },
    ModuleSpec { id: "m_dp1_7", code: "DM401", name: "Major Project A", credits: 20 },
    ModuleSpec { id: "m_dp1_8", code: "DM402", name: "Portfolio Development", credits: 10 },
];

const ED202_MODULES: [ModuleSpec; 4] = [
    ModuleSpec { id: "m_ed2_1", code: "ED501", name: "Curriculum Design", credits: 10 },
    ModuleSpec { id: "m_ed2_2", code: "ED502", name: "Assessment Strategies", credits: 10 },
    ModuleSpec { id: "m_ed2_3", code: "ED503", name: "Technology Enhanced Learning", credits: 10 },
    ModuleSpec { id: "m_ed2_4", code: "ED504", name: "Research Methods", credits: 10 },
];

fn demo_programmes(now: DateTime<Utc>) -> [Programme; 2] {
    [
        Programme {
            id: "demo_prog_1".to_string(),
            code: "DP101".to_string(),
            name: "BA (Hons) in Digital Media".to_string(),
            school: Some("School of Creative Arts".to_string()),
            faculty: Some("Arts & Humanities".to_string()),
            discipline_area: Some("Media".to_string()),
            nfq_level: Some("Level 8".to_string()),
            mode: Some("Full-time".to_string()),
            created_at: now,
            updated_at: now,
        },
        Programme {
            id: "demo_prog_2".to_string(),
            code: "ED202".to_string(),
            name: "MSc in Education Practice".to_string(),
            school: Some("School of Education".to_string()),
            faculty: Some("Arts, Humanities & Social Sciences".to_string()),
            discipline_area: Some("Education".to_string()),
            nfq_level: Some("Level 9".to_string()),
            mode: Some("Part-time".to_string()),
            created_at: now,
            updated_at: now,
        },
    ]
}

/// Deterministic stand-in for the per-answer jitter: the offset cycles
/// through {0, +1, -1} by position so scores vary without randomness.
fn jitter(module_index: usize, category_index: usize, question_index: usize) -> i8 {
    match (module_index + category_index + question_index) % 3 {
        0 => 0,
        1 => 1,
        _ => -1,
    }
}

fn demo_answers(module_index: usize, base_score: i8) -> BTreeMap<String, u8> {
    let mut answers = BTreeMap::new();
    for category in Category::ALL {
        for q in 0..QUESTIONS_PER_CATEGORY {
            let raw = base_score + jitter(module_index, category.index(), q);
            answers.insert(answer_key(category, q), raw.clamp(1, 5) as u8);
        }
    }
    answers
}

fn assessment(
    id: &str,
    name: &str,
    assessment_type: &str,
    weight: f64,
    due_week: i32,
) -> ModuleAssessment {
    ModuleAssessment {
        id: id.to_string(),
        name: name.to_string(),
        assessment_type: assessment_type.to_string(),
        weight,
        due_week,
        shared: false,
        shared_with: None,
        evidence_type: Some(ArtefactType::Note),
        evidence_content: None,
        timing_band: TimingBand::from_week(due_week),
    }
}

#[allow(clippy::too_many_lines)]
fn demo_metadata(spec: &ModuleSpec, is_strong: bool, is_digital: bool) -> ModuleMetadata {
    let mut assessments = vec![assessment(
        "a1",
        "Project",
        "project",
        if is_strong { 50.0 } else { 100.0 },
        12,
    )];
    if is_strong {
        assessments.push(assessment("a2", "Mid-term Review", "presentation", 30.0, 6));
        assessments.push(assessment("a3", "Reflection", "essay", 20.0, 9));
    }
    if is_digital {
        assessments.push(assessment("a4", "Early Feedback Task", "formative", 0.0, 3));
    }

    ModuleMetadata {
        module_types: if is_digital {
            vec!["core".to_string(), "online_hybrid".to_string()]
        } else {
            vec!["core".to_string(), "in_person".to_string()]
        },
        teaching_team_size: if is_strong {
            "medium_team_4_6".to_string()
        } else {
            "small_team_2_3".to_string()
        },
        cohort_characteristics: vec!["mixed_level".to_string()],
        assessments,
        udl_indicators: if is_digital {
            vec![
                "multiple_means_expression".to_string(),
                "flexible_deadlines".to_string(),
            ]
        } else {
            Vec::new()
        },
        digital_practice: if is_digital {
            vec!["vle_template".to_string(), "accessibility_checked".to_string()]
        } else {
            vec!["vle_template".to_string()]
        },
        student_feedback_overall: if is_strong { 5 } else { 3 },
        student_feedback_volume: "moderate_10_30".to_string(),
        module_risk_level: "no_concern".to_string(),
        module_risk_reasons: Vec::new(),
        teaching_hours_band: None,
        marking_hours_band: None,
        policies_influencing: Some(if is_strong {
            "Module design explicitly aligned with the National Forum Authentic Assessment Framework (2021). Incorporated institutional guidelines on AI use in assessment (2024)."
        } else {
            "Standard university T&L policy followed regarding assessment turnaround times and grading criteria."
        }.to_string()),
        external_requirements: Some(if spec.name.contains("Ethics") {
            "Meets professional body requirements for ethics in practice (CORU/Teaching Council)."
        } else {
            "No specific external body requirements."
        }.to_string()),
        staff_development_influence: Some(if is_strong {
            "Teaching team completed Digital Badge in UDL and Assessment Design."
        } else {
            "Staff attend annual T&L showcase events."
        }.to_string()),
        student_partnership: Some(if is_strong {
            "Students co-designed assessment criteria and rubric in Week 2."
        } else {
            "Standard end-of-module feedback loop via student survey."
        }.to_string()),
        evidence_sources: if is_strong {
            vec![
                "module_survey".to_string(),
                "focus_group".to_string(),
                "external_examiner".to_string(),
            ]
        } else {
            vec!["module_survey".to_string()]
        },
        changes_last_3_years: Some(if is_strong {
            "Major redesign to move to 100% continuous assessment based on student feedback."
        } else {
            "Minor updates to reading list and VLE structure."
        }.to_string()),
        student_feedback_summary: Some(if is_strong {
            "Students consistently praise the authentic nature of the tasks and clarity of feedback."
        } else {
            "Students find the workload heavy at times, but appreciate the structure."
        }.to_string()),
        curriculum_connections: Some(if spec.credits > 10 {
            "Explicitly connects with research methods module in previous semester."
        } else {
            "Builds on foundational concepts from Stage 1."
        }.to_string()),
        learning_environment_use: Some(if is_digital {
            "Active use of VLE discussion boards, wiki, and collaborative whiteboard tools for async work."
        } else {
            "VLE primarily used as document repository for slides and readings."
        }.to_string()),
        teaching_approaches: if is_strong {
            vec!["pbl".to_string(), "studio".to_string()]
        } else {
            vec!["lecture".to_string(), "seminar".to_string()]
        },
        transition_support: Some(if spec.code.contains("101") {
            "Dedicated induction weeks, jargon buster glossary, and peer mentoring programme."
        } else {
            "Standard office hours and email support."
        }.to_string()),
        diversity_support: Some(if is_digital {
            "All materials provided in alternative formats (accessible PDF, captioned video). Flexible deadline policy."
        } else {
            "Standard student support services referral process."
        }.to_string()),
        authentic_assessment_rationale: Some(if is_strong {
            "Assessment mirrors professional practice tasks (e.g. client brief, portfolio) rather than academic essays."
        } else {
            "Traditional essay format used to test theoretical understanding of core concepts."
        }.to_string()),
        feedback_practices: Some(if is_strong {
            "Audio feedback provided on drafts; peer review cycles included before final submission."
        } else {
            "Written feedback on final submission via VLE rubric within 3 weeks."
        }.to_string()),
        self_peer_assessment: Some(is_strong || is_digital),
    }
}

fn evidence_summaries(metadata: &ModuleMetadata) -> BTreeMap<Category, String> {
    let opt = |s: &Option<String>| s.clone().unwrap_or_default();
    let mut out = BTreeMap::new();
    out.insert(
        Category::StrategyCapacity,
        format!(
            "{}\n\n{}\n\n{}",
            opt(&metadata.policies_influencing),
            opt(&metadata.external_requirements),
            opt(&metadata.staff_development_influence)
        ),
    );
    out.insert(
        Category::EvidenceBased,
        format!(
            "{}\n\nEvidence Sources: {}\n\nRecent Changes: {}",
            opt(&metadata.student_feedback_summary),
            metadata.evidence_sources.join(", "),
            opt(&metadata.changes_last_3_years)
        ),
    );
    out.insert(
        Category::DesignOfLearning,
        format!(
            "{}\n\n{}",
            opt(&metadata.curriculum_connections),
            opt(&metadata.learning_environment_use)
        ),
    );
    out.insert(
        Category::TeachingPractice,
        format!(
            "{}\n\n{}",
            opt(&metadata.transition_support),
            opt(&metadata.diversity_support)
        ),
    );
    out.insert(
        Category::Assessment,
        format!(
            "{}\n\n{}",
            opt(&metadata.authentic_assessment_rationale),
            opt(&metadata.feedback_practices)
        ),
    );
    out
}

fn demo_owner_id(module_id: &str) -> &'static str {
    match module_id {
        "m_dp1_1" | "m_ed2_1" => "u1",
        "m_dp1_2" | "m_dp1_3" | "m_ed2_2" => "u2",
        _ => "u3",
    }
}

/// Populate and persist the demo dataset. Callers must have checked the
/// store is empty.
pub(crate) fn seed_demo_data(store: &mut DeltaStore) {
    let now = Utc::now();
    let [prog1, prog2] = demo_programmes(now);

    store.programme_chairs = vec![
        ProgrammeChair {
            id: "chair_1".to_string(),
            user_id: "u1".to_string(),
            programme_id: prog1.id.clone(),
        },
        ProgrammeChair {
            id: "chair_2".to_string(),
            user_id: "u1".to_string(),
            programme_id: prog2.id.clone(),
        },
    ];

    let mut modules = Vec::new();
    let mut programme_modules = Vec::new();
    let mut owners = Vec::new();
    let mut evaluations = Vec::new();

    let mut link = |spec: &ModuleSpec,
                    i: usize,
                    programme: &Programme,
                    pm_prefix: &str,
                    stage: u8,
                    modules: &mut Vec<Module>,
                    programme_modules: &mut Vec<ProgrammeModule>| {
        modules.push(Module {
            id: spec.id.to_string(),
            code: spec.code.to_string(),
            name: spec.name.to_string(),
            credits: Some(spec.credits),
            programme_id: Some(programme.id.clone()),
            programme_name: Some(programme.name.clone()),
        });
        programme_modules.push(ProgrammeModule {
            id: format!("{pm_prefix}{i}"),
            programme_id: programme.id.clone(),
            module_id: spec.id.to_string(),
            stage: Some(stage),
            semester: Some(if i % 2 == 0 {
                Semester::Autumn
            } else {
                Semester::Spring
            }),
            is_core: Some(CoreElective::Core),
        });
    };

    for (i, spec) in DP101_MODULES.iter().enumerate() {
        let stage = (i / 2 + 1) as u8;
        link(spec, i, &prog1, "pm_dp1_", stage, &mut modules, &mut programme_modules);
    }
    for (i, spec) in ED202_MODULES.iter().enumerate() {
        link(spec, i, &prog2, "pm_ed2_", 1, &mut modules, &mut programme_modules);
    }

    let all_specs = DP101_MODULES.iter().chain(ED202_MODULES.iter());
    for (i, spec) in all_specs.enumerate() {
        let owner_id = demo_owner_id(spec.id);
        owners.push(ModuleOwner {
            id: format!("mo_{}", spec.id),
            user_id: owner_id.to_string(),
            module_id: spec.id.to_string(),
        });

        // score profile cycles high / mid / low across the module list
        let base_score: i8 = match i % 3 {
            0 => 5,
            1 => 3,
            _ => 2,
        };
        let is_strong = base_score == 5;
        let is_digital = i % 3 == 1;

        let answers = demo_answers(i, base_score);
        let (category_scores, category_levels) = scoring::derive_category_results(&answers);
        let indicator_scores = scoring::derive_indicator_scores(&answers);
        let metadata = demo_metadata(spec, is_strong, is_digital);
        let summaries = evidence_summaries(&metadata);

        let headline = if is_strong {
            format!("A flagship module demonstrating best practice in {}.", spec.name)
        } else {
            format!(
                "A solid module with opportunities to enhance digital engagement in {}.",
                spec.name
            )
        };

        evaluations.push(ModuleEvaluation {
            id: Some(format!("eval_{}", spec.id)),
            user_id: owner_id.to_string(),
            module_id: spec.id.to_string(),
            academic_year: DEMO_ACADEMIC_YEAR.to_string(),
            answers,
            category_scores,
            category_levels,
            indicator_scores,
            evidence_summaries: summaries,
            artefacts: BTreeMap::new(),
            module_headline: Some(headline),
            metadata: Some(metadata),
            completed_at: now,
            created_at: Some(now),
            updated_at: Some(now),
        });
    }

    store.programmes = vec![prog1, prog2];
    store.modules = modules;
    store.programme_modules = programme_modules;
    store.module_owners = owners;
    store.evaluations = evaluations;

    store.persist(keys::PROGRAMMES, &store.programmes);
    store.persist(keys::MODULES, &store.modules);
    store.persist(keys::PROGRAMME_CHAIRS, &store.programme_chairs);
    store.persist(keys::PROGRAMME_MODULES, &store.programme_modules);
    store.persist(keys::MODULE_OWNERS, &store.module_owners);
    store.persist(keys::EVALUATIONS, &store.evaluations);
}
