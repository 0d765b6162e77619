//! Entity identifier generation.
//!
//! IDs are `prefix-8hex`, e.g. `prg-a3f8b2c1`. The prefix names the entity
//! kind so a bare ID in a log line or a JSON dump is self-describing.

use std::fmt::Write as _;

pub const PREFIX_PROGRAMME: &str = "prg";
pub const PREFIX_MODULE: &str = "mod";
pub const PREFIX_PROGRAMME_MODULE: &str = "pgm";
pub const PREFIX_MODULE_OWNER: &str = "own";
pub const PREFIX_PROGRAMME_CHAIR: &str = "chr";
pub const PREFIX_PROFILE: &str = "prf";
pub const PREFIX_TEAM_MEMBER: &str = "ptm";
pub const PREFIX_EVALUATION: &str = "evl";
pub const PREFIX_HISTORY: &str = "evh";
pub const PREFIX_TAKING_STOCK: &str = "tks";
pub const PREFIX_IMPROVEMENT: &str = "imp";
pub const PREFIX_PRIORITY: &str = "pri";
pub const PREFIX_THEME: &str = "thm";
pub const PREFIX_GOAL: &str = "gol";

pub const ALL_PREFIXES: [&str; 14] = [
    PREFIX_PROGRAMME,
    PREFIX_MODULE,
    PREFIX_PROGRAMME_MODULE,
    PREFIX_MODULE_OWNER,
    PREFIX_PROGRAMME_CHAIR,
    PREFIX_PROFILE,
    PREFIX_TEAM_MEMBER,
    PREFIX_EVALUATION,
    PREFIX_HISTORY,
    PREFIX_TAKING_STOCK,
    PREFIX_IMPROVEMENT,
    PREFIX_PRIORITY,
    PREFIX_THEME,
    PREFIX_GOAL,
];

/// Generate a fresh `prefix-8hex` id.
///
/// Falls back to clock-derived bytes if the OS entropy source is unavailable,
/// which is acceptable for these non-secret identifiers.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    if getrandom::fill(&mut bytes).is_err() {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0);
        bytes.copy_from_slice(&nanos.to_le_bytes()[..4]);
    }
    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('-');
    for b in bytes {
        let _ = write!(id, "{b:02x}");
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_have_prefix_and_eight_hex_chars() {
        let id = generate_id(PREFIX_PROGRAMME);
        let (prefix, hex) = id.split_once('-').unwrap();
        assert_eq!(prefix, "prg");
        assert_eq!(hex.len(), 8);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for prefix in ALL_PREFIXES {
            assert!(seen.insert(prefix), "duplicate prefix {prefix}");
        }
    }
}
