//! # delta-synthesis
//!
//! Programme-level synthesis over module evaluations.
//!
//! Given the evaluated modules of a programme for one academic year, this
//! crate derives per-category evidence statistics ([`stats`]), a recommended
//! maturity level with an evidence snapshot ([`recommend`]), canned
//! improvement suggestions ([`suggest`]), and the assembled Taking Stock
//! document ([`document`]).
//!
//! All of it is heuristic and advisory: teams override levels and edit
//! improvement lists downstream.

pub mod document;
pub mod recommend;
pub mod stats;
pub mod suggest;

use delta_core::entities::ModuleEvaluation;

/// One evaluated module as synthesis input: the evaluation plus the module
/// name used in evidence lines.
#[derive(Debug, Clone, Copy)]
pub struct ModuleSample<'a> {
    pub module_name: &'a str,
    pub evaluation: &'a ModuleEvaluation,
}

impl<'a> ModuleSample<'a> {
    #[must_use]
    pub const fn new(module_name: &'a str, evaluation: &'a ModuleEvaluation) -> Self {
        Self {
            module_name,
            evaluation,
        }
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use delta_core::entities::{ModuleEvaluation, ModuleMetadata};

    pub fn evaluation_with(metadata: Option<ModuleMetadata>) -> ModuleEvaluation {
        ModuleEvaluation {
            id: Some("evl-test0001".to_string()),
            user_id: "u1".to_string(),
            module_id: "m1".to_string(),
            academic_year: "2024-25".to_string(),
            answers: BTreeMap::new(),
            category_scores: BTreeMap::new(),
            category_levels: BTreeMap::new(),
            indicator_scores: BTreeMap::new(),
            evidence_summaries: BTreeMap::new(),
            artefacts: BTreeMap::new(),
            module_headline: None,
            metadata,
            completed_at: Utc::now(),
            created_at: None,
            updated_at: None,
        }
    }
}
