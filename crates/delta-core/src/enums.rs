//! Category, level, and tag enums for the DELTA evaluation tool.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `Category` derives `Ord` in declaration order, which is also the framework's
//! display order and the order used for map keys in stored records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The five fixed DELTA framework categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StrategyCapacity,
    EvidenceBased,
    DesignOfLearning,
    TeachingPractice,
    Assessment,
}

impl Category {
    /// All categories in framework order.
    pub const ALL: [Self; 5] = [
        Self::StrategyCapacity,
        Self::EvidenceBased,
        Self::DesignOfLearning,
        Self::TeachingPractice,
        Self::Assessment,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrategyCapacity => "strategy_capacity",
            Self::EvidenceBased => "evidence_based",
            Self::DesignOfLearning => "design_of_learning",
            Self::TeachingPractice => "teaching_practice",
            Self::Assessment => "assessment",
        }
    }

    /// Zero-based position in framework order. Answer-map keys use this index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::StrategyCapacity => 0,
            Self::EvidenceBased => 1,
            Self::DesignOfLearning => 2,
            Self::TeachingPractice => 3,
            Self::Assessment => 4,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::StrategyCapacity),
            1 => Some(Self::EvidenceBased),
            2 => Some(Self::DesignOfLearning),
            3 => Some(Self::TeachingPractice),
            4 => Some(Self::Assessment),
            _ => None,
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaturityLevel
// ---------------------------------------------------------------------------

/// Coarse three-point maturity scale derived from a 0–10 category score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Developing,
    Consolidating,
    Leading,
}

impl MaturityLevel {
    /// Deterministic step function on the 0–10 score.
    ///
    /// ```text
    /// 0..=3  → developing
    /// 4..=7  → consolidating
    /// 8..    → leading
    /// ```
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score <= 3 {
            Self::Developing
        } else if score <= 7 {
            Self::Consolidating
        } else {
            Self::Leading
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Developing => "developing",
            Self::Consolidating => "consolidating",
            Self::Leading => "leading",
        }
    }

}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TimingBand
// ---------------------------------------------------------------------------

/// Semester position of an assessment due-week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimingBand {
    Early,
    Mid,
    Late,
}

impl TimingBand {
    /// Band for a due-week. Total over all integers: callers rely on values
    /// outside the 1–15 teaching weeks still resolving (negative → early,
    /// beyond the semester → late).
    #[must_use]
    pub const fn from_week(week: i32) -> Self {
        if week <= 4 {
            Self::Early
        } else if week <= 9 {
            Self::Mid
        } else {
            Self::Late
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Mid => "mid",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for TimingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Semester / CoreElective
// ---------------------------------------------------------------------------

/// Delivery semester of a programme-module link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    Autumn,
    Spring,
    YearLong,
}

impl Semester {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autumn => "autumn",
            Self::Spring => "spring",
            Self::YearLong => "year_long",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a module is core or elective within a programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CoreElective {
    Core,
    Elective,
}

impl CoreElective {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Elective => "elective",
        }
    }
}

impl fmt::Display for CoreElective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// Whether an improvement or priority was suggested by the synthesis engine
/// or entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    System,
    User,
}

impl Provenance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role tag on a user account. A UI permission hint, not an enforcement
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ProgrammeChair,
    ModuleLead,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProgrammeChair => "programme_chair",
            Self::ModuleLead => "module_lead",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArtefactType
// ---------------------------------------------------------------------------

/// Kind of supporting artefact attached to an evaluation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArtefactType {
    File,
    Link,
    Note,
}

impl ArtefactType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Link => "link",
            Self::Note => "note",
        }
    }
}

impl fmt::Display for ArtefactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_order_matches_indices() {
        for (i, cat) in Category::ALL.into_iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(Category::from_index(i), Some(cat));
        }
        assert_eq!(Category::from_index(5), None);
    }

    #[test]
    fn category_roundtrips_through_str() {
        for cat in Category::ALL {
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
        assert_eq!(Category::parse("nonsense"), None);
    }

    #[test]
    fn category_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Category::Assessment, 7u8);
        map.insert(Category::StrategyCapacity, 3u8);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"strategy_capacity":3,"assessment":7}"#);
        let back: std::collections::BTreeMap<Category, u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(MaturityLevel::from_score(0), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_score(3), MaturityLevel::Developing);
        assert_eq!(MaturityLevel::from_score(4), MaturityLevel::Consolidating);
        assert_eq!(MaturityLevel::from_score(7), MaturityLevel::Consolidating);
        assert_eq!(MaturityLevel::from_score(8), MaturityLevel::Leading);
        assert_eq!(MaturityLevel::from_score(10), MaturityLevel::Leading);
    }

    #[test]
    fn timing_band_boundaries() {
        assert_eq!(TimingBand::from_week(4), TimingBand::Early);
        assert_eq!(TimingBand::from_week(5), TimingBand::Mid);
        assert_eq!(TimingBand::from_week(9), TimingBand::Mid);
        assert_eq!(TimingBand::from_week(10), TimingBand::Late);
    }

    #[test]
    fn timing_band_is_total_outside_teaching_weeks() {
        assert_eq!(TimingBand::from_week(-3), TimingBand::Early);
        assert_eq!(TimingBand::from_week(0), TimingBand::Early);
        assert_eq!(TimingBand::from_week(52), TimingBand::Late);
    }
}
