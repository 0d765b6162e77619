//! Persistent store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding the per-collection JSON files. Empty means the
    /// platform data directory (`~/.local/share/delta` on Linux).
    #[serde(default)]
    pub data_dir: String,

    /// Seed demo programmes, modules and evaluations when the store is empty.
    #[serde(default)]
    pub demo_mode: bool,

    /// Keep everything in memory and persist nothing. Useful for dry runs.
    #[serde(default)]
    pub ephemeral: bool,
}

impl StoreConfig {
    /// Resolve the data directory, falling back to the platform default.
    ///
    /// Returns `None` only when the directory is unset and the platform
    /// provides no data directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        if self.data_dir.is_empty() {
            dirs::data_dir().map(|p| p.join("delta"))
        } else {
            Some(PathBuf::from(&self.data_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_data_dir_wins() {
        let config = StoreConfig {
            data_dir: "/tmp/delta-data".to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(
            config.resolved_data_dir(),
            Some(PathBuf::from("/tmp/delta-data"))
        );
    }

    #[test]
    fn defaults_persist_to_disk() {
        let config = StoreConfig::default();
        assert!(!config.demo_mode);
        assert!(!config.ephemeral);
    }
}
