//! Score derivation from Likert answers.
//!
//! Each category has three questions answered on a 1–5 scale. The raw sum
//! (3–15) is rescaled to 0–10 and stepped into a maturity level. Missing
//! answers count as 0, so a partially answered category still scores.

use std::collections::BTreeMap;

use crate::enums::{Category, MaturityLevel};
use crate::framework::{QUESTIONS_PER_CATEGORY, answer_key};

/// Rescale a raw Likert sum to the 0–10 score.
///
/// `round(((sum - 3) / 12) * 10)`, clamped to 0–10. The clamp makes the
/// function total: sums below 3 (possible when answers are missing) floor at
/// 0, and nothing can exceed 10.
#[must_use]
pub fn calculate_score(sum: u32) -> u8 {
    let scaled = ((f64::from(sum) - 3.0) / 12.0) * 10.0;
    let rounded = scaled.round();
    if rounded <= 0.0 {
        0
    } else if rounded >= 10.0 {
        10
    } else {
        // rounded is an integer in 1..=9 here
        rounded as u8
    }
}

/// Raw answer sum for one category, with missing answers counting as 0.
#[must_use]
pub fn category_sum(answers: &BTreeMap<String, u8>, category: Category) -> u32 {
    (0..QUESTIONS_PER_CATEGORY)
        .map(|q| u32::from(answers.get(&answer_key(category, q)).copied().unwrap_or(0)))
        .sum()
}

/// Derived score and level for every category.
#[must_use]
pub fn derive_category_results(
    answers: &BTreeMap<String, u8>,
) -> (
    BTreeMap<Category, u8>,
    BTreeMap<Category, MaturityLevel>,
) {
    let mut scores = BTreeMap::new();
    let mut levels = BTreeMap::new();
    for category in Category::ALL {
        let score = calculate_score(category_sum(answers, category));
        scores.insert(category, score);
        levels.insert(category, MaturityLevel::from_score(score));
    }
    (scores, levels)
}

/// Per-indicator raw answers, keyed by indicator id (`"sc_1"`, ...). Question
/// order within a category matches indicator order, so question `q` of a
/// category evidences its indicator `q`.
#[must_use]
pub fn derive_indicator_scores(answers: &BTreeMap<String, u8>) -> BTreeMap<String, u8> {
    let mut out = BTreeMap::new();
    for category in Category::ALL {
        let def = category.definition();
        for (q, indicator) in def.indicators.iter().enumerate() {
            if let Some(&value) = answers.get(&answer_key(category, q)) {
                out.insert(indicator.id.to_string(), value);
            }
        }
    }
    out
}
