//! Command-line interface for spell-fixer.
//!
//! Provides argument parsing using clap derive macros.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::{AppConfig, AppPaths, FoldOrder};

/// Fix misspelled words in a phrase using a remote spellchecker
#[derive(Parser, Debug)]
#[command(name = "spell-fixer", version, about = "Fix misspelled words in a phrase")]
pub struct Cli {
    /// Phrase to correct. When omitted, each line read from stdin is corrected.
    /// Put `--` before words that start with a hyphen
    #[arg(value_name = "PHRASE")]
    pub phrase: Vec<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Spellchecker base URL (serves /misspelled and /corrections)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Order in which corrections are applied (resolution, token)
    #[arg(long, value_name = "ORDER")]
    pub fold_order: Option<FoldOrder>,

    /// Write the effective configuration back to the config file
    #[arg(long)]
    pub save_config: bool,
}

impl Cli {
    /// The phrase given on the command line, words joined by single spaces.
    pub fn phrase(&self) -> Option<String> {
        if self.phrase.is_empty() {
            None
        } else {
            Some(self.phrase.join(" "))
        }
    }

    /// The settings file in use: `--config`, or the platform default.
    pub fn settings_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| AppPaths::new().settings_file)
    }

    /// Load the settings file and apply the command-line overrides.
    ///
    /// An unreadable file falls back to defaults with a warning, unless
    /// `--save-config` was given: saving would then overwrite the user's
    /// file with defaults, so that case is an error instead.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let path = self.settings_path();
        let mut config = match AppConfig::load_from(&path) {
            Ok(config) => config,
            Err(e) if self.save_config => {
                return Err(e).with_context(|| {
                    format!(
                        "refusing to save over unreadable config {}",
                        path.display()
                    )
                });
            }
            Err(e) => {
                log::warn!("Failed to load config ({e}); using defaults");
                AppConfig::default()
            }
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Write `config` to the settings file when `--save-config` was given.
    pub fn persist(&self, config: &AppConfig) -> Result<()> {
        if !self.save_config {
            return Ok(());
        }
        let path = self.settings_path();
        config
            .save_to(&path)
            .with_context(|| format!("failed to save config to {}", path.display()))?;
        log::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.base_url {
            config.service.base_url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.service.timeout_secs = Some(secs);
        }
        if let Some(order) = self.fold_order {
            config.pipeline.fold_order = order;
        }
    }
}
