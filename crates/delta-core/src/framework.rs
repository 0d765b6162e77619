//! The DELTA framework tables: five categories, each with three indicators
//! and three Likert questions.
//!
//! These are fixed constants of the external rubric. Question order within a
//! category matters: answer-map keys are `"{category_index}_{question_index}"`
//! with both indices zero-based.

use crate::enums::Category;

/// Questions per category. The scoring rescale in [`crate::scoring`] assumes
/// exactly three 1–5 ratings.
pub const QUESTIONS_PER_CATEGORY: usize = 3;

/// A single observable indicator within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// One Likert question, linked to the indicator it evidences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkQuestion {
    pub text: &'static str,
    pub indicator_id: &'static str,
}

/// Static definition of one DELTA category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub id: Category,
    pub label: &'static str,
    pub description: &'static str,
    pub indicators: [Indicator; QUESTIONS_PER_CATEGORY],
    pub questions: [FrameworkQuestion; QUESTIONS_PER_CATEGORY],
}

pub static CATEGORY_DEFINITIONS: [CategoryDefinition; 5] = [
    CategoryDefinition {
        id: Category::StrategyCapacity,
        label: "Strategy & Capacity Building",
        description: "To what extent is this module informed by institutional/national policies and professional requirements?",
        indicators: [
            Indicator {
                id: "sc_1",
                label: "Policy Alignment",
                description: "Informed by institutional/national T&L policies",
            },
            Indicator {
                id: "sc_2",
                label: "Professional Requirements",
                description: "Shaped by external reviews/professional bodies",
            },
            Indicator {
                id: "sc_3",
                label: "Enhancement Planning",
                description: "Planned enhancements aligned with school priorities",
            },
        ],
        questions: [
            FrameworkQuestion {
                text: "To what extent is this module informed by institutional or national T&L policies?",
                indicator_id: "sc_1",
            },
            FrameworkQuestion {
                text: "To what extent do external reviews or professional requirements shape this module?",
                indicator_id: "sc_2",
            },
            FrameworkQuestion {
                text: "To what extent do you plan enhancements for this module in line with School/Faculty priorities?",
                indicator_id: "sc_3",
            },
        ],
    },
    CategoryDefinition {
        id: Category::EvidenceBased,
        label: "Evidence-Based Approach",
        description: "Use of feedback and data to inform module design and delivery.",
        indicators: [
            Indicator {
                id: "eb_1",
                label: "Student Feedback",
                description: "Use of formal/informal feedback",
            },
            Indicator {
                id: "eb_2",
                label: "Engagement Analytics",
                description: "Analysis of engagement data",
            },
            Indicator {
                id: "eb_3",
                label: "Pedagogical Research",
                description: "Informed by scholarship",
            },
        ],
        questions: [
            FrameworkQuestion {
                text: "To what extent do you use student feedback (formal/informal) to refine this module?",
                indicator_id: "eb_1",
            },
            FrameworkQuestion {
                text: "To what extent do you analyse engagement data (e.g., VLE stats, attendance) to support students?",
                indicator_id: "eb_2",
            },
            FrameworkQuestion {
                text: "To what extent is the module design informed by pedagogical research or scholarship?",
                indicator_id: "eb_3",
            },
        ],
    },
    CategoryDefinition {
        id: Category::DesignOfLearning,
        label: "Design of Learning",
        description: "Structure, alignment, and inclusivity of the learning experience.",
        indicators: [
            Indicator {
                id: "dl_1",
                label: "Constructive Alignment",
                description: "Alignment of outcomes, activities, assessments",
            },
            Indicator {
                id: "dl_2",
                label: "Inclusive Design",
                description: "Support for diverse learner needs",
            },
            Indicator {
                id: "dl_3",
                label: "Workload Balance",
                description: "Clear communication and balance of workload",
            },
        ],
        questions: [
            FrameworkQuestion {
                text: "To what extent are learning outcomes, activities, and assessments constructively aligned?",
                indicator_id: "dl_1",
            },
            FrameworkQuestion {
                text: "To what extent is the module structured to support diverse learner needs (inclusivity)?",
                indicator_id: "dl_2",
            },
            FrameworkQuestion {
                text: "To what extent is the workload balanced and clearly communicated to students?",
                indicator_id: "dl_3",
            },
        ],
    },
    CategoryDefinition {
        id: Category::TeachingPractice,
        label: "Teaching & Learning Practice",
        description: "Engagement, variety of approaches, and digital/blended learning.",
        indicators: [
            Indicator {
                id: "tp_1",
                label: "Active Learning",
                description: "Strategies to engage students",
            },
            Indicator {
                id: "tp_2",
                label: "Transition Support",
                description: "Support through levels of study",
            },
            Indicator {
                id: "tp_3",
                label: "Digital Enhancement",
                description: "Meaningful use of digital tools",
            },
        ],
        questions: [
            FrameworkQuestion {
                text: "To what extent do you use active learning strategies to engage students?",
                indicator_id: "tp_1",
            },
            FrameworkQuestion {
                text: "To what extent do you support students in transitioning to/through this level of study?",
                indicator_id: "tp_2",
            },
            FrameworkQuestion {
                text: "To what extent are digital tools used meaningfully to enhance learning?",
                indicator_id: "tp_3",
            },
        ],
    },
    CategoryDefinition {
        id: Category::Assessment,
        label: "Assessment",
        description: "Variety, authenticity, and quality of feedback in assessment.",
        indicators: [
            Indicator {
                id: "as_1",
                label: "Assessment Variety",
                description: "Methods suitable for outcomes",
            },
            Indicator {
                id: "as_2",
                label: "Authentic Assessment",
                description: "Relevance to real-world contexts",
            },
            Indicator {
                id: "as_3",
                label: "Feedback Quality",
                description: "Timely and actionable feedback",
            },
        ],
        questions: [
            FrameworkQuestion {
                text: "To what extent do you use a variety of assessment methods suitable for the outcomes?",
                indicator_id: "as_1",
            },
            FrameworkQuestion {
                text: "To what extent are assessments designed to be authentic or relevant to real-world contexts?",
                indicator_id: "as_2",
            },
            FrameworkQuestion {
                text: "To what extent is feedback provided in a timely and actionable manner?",
                indicator_id: "as_3",
            },
        ],
    },
];

impl Category {
    /// Static framework definition for this category.
    #[must_use]
    pub fn definition(self) -> &'static CategoryDefinition {
        &CATEGORY_DEFINITIONS[self.index()]
    }

    /// Display label from the framework table.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.definition().label
    }

    /// The category's three Likert questions.
    #[must_use]
    pub fn questions(self) -> &'static [FrameworkQuestion; QUESTIONS_PER_CATEGORY] {
        &self.definition().questions
    }
}

/// Answer-map key for a (category, question) pair, e.g. `"0_2"`.
#[must_use]
pub fn answer_key(category: Category, question_index: usize) -> String {
    format!("{}_{}", category.index(), question_index)
}
