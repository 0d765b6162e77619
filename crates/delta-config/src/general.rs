//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default academic year evaluated when none is given on the command line.
fn default_academic_year() -> String {
    "2024-25".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Academic year used when a command does not pass `--year`.
    #[serde(default = "default_academic_year")]
    pub academic_year: String,

    /// Programme ID assumed when a command does not pass `--programme`.
    #[serde(default)]
    pub default_programme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            academic_year: default_academic_year(),
            default_programme: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.academic_year, "2024-25");
        assert!(config.default_programme.is_empty());
    }
}
