use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use delta_config::DeltaConfig;
use delta_store::{DeltaStore, JsonFileMedium, MemoryMedium, StorageMedium};

use crate::cli::GlobalFlags;

/// Everything a command handler needs: the loaded config and an open store.
pub struct AppContext {
    pub config: DeltaConfig,
    pub store: DeltaStore,
}

impl AppContext {
    /// Open the store described by config and flags.
    ///
    /// `--data-dir` beats the configured directory; an ephemeral store keeps
    /// everything in memory and persists nothing.
    pub fn init(config: DeltaConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let medium: Box<dyn StorageMedium> = if config.store.ephemeral {
            debug!("opening ephemeral in-memory store");
            Box::new(MemoryMedium::new())
        } else {
            let dir = flags
                .data_dir
                .clone()
                .map(PathBuf::from)
                .or_else(|| config.store.resolved_data_dir())
                .context("no data directory available; set store.data_dir or --data-dir")?;
            debug!(dir = %dir.display(), "opening JSON file store");
            Box::new(JsonFileMedium::new(dir)?)
        };
        let store = DeltaStore::open(medium, config.store.demo_mode)?;
        Ok(Self { config, store })
    }

    /// The academic year commands act on: `--year` wins over config.
    #[must_use]
    pub fn academic_year<'a>(&'a self, flags: &'a GlobalFlags) -> &'a str {
        flags
            .year
            .as_deref()
            .unwrap_or(&self.config.general.academic_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use pretty_assertions::assert_eq;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            year: None,
            data_dir: None,
        }
    }

    #[test]
    fn ephemeral_store_opens_without_a_data_dir() {
        let config = DeltaConfig {
            store: delta_config::StoreConfig {
                ephemeral: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = AppContext::init(config, &flags()).expect("context should open");
        assert!(ctx.store.list_programmes().is_empty());
    }

    #[test]
    fn data_dir_flag_beats_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeltaConfig::default();
        let mut f = flags();
        f.data_dir = Some(dir.path().to_string_lossy().into_owned());
        let ctx = AppContext::init(config, &f).expect("context should open");
        assert!(ctx.store.list_modules().is_empty());
    }

    #[test]
    fn year_flag_beats_configured_year() {
        let config = DeltaConfig {
            store: delta_config::StoreConfig {
                ephemeral: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = AppContext::init(config, &flags()).unwrap();
        assert_eq!(ctx.academic_year(&flags()), "2024-25");

        let mut f = flags();
        f.year = Some("2026-27".to_string());
        assert_eq!(ctx.academic_year(&f), "2026-27");
    }
}
