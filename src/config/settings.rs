//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Base URL of the public spellchecker cloud function.
pub const DEFAULT_BASE_URL: &str =
    "https://us-east1-serverless-306422.cloudfunctions.net/spellchecker";

// ---------------------------------------------------------------------------
// FoldOrder
// ---------------------------------------------------------------------------

/// Order in which correction results are folded into the phrase.
///
/// | Variant      | Fold sequence                                   |
/// |--------------|-------------------------------------------------|
/// | `Resolution` | order in which the correction lookups resolved  |
/// | `Token`      | left-to-right order of the tokens in the phrase |
///
/// `Resolution` is the default. With several misspelled words its output
/// can differ between runs when the service answers out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldOrder {
    Resolution,
    Token,
}

impl Default for FoldOrder {
    fn default() -> Self {
        Self::Resolution
    }
}

impl fmt::Display for FoldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldOrder::Resolution => f.write_str("resolution"),
            FoldOrder::Token => f.write_str("token"),
        }
    }
}

impl FromStr for FoldOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resolution" => Ok(FoldOrder::Resolution),
            "token" => Ok(FoldOrder::Token),
            other => Err(format!(
                "unknown fold order '{other}' (expected 'resolution' or 'token')"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// ServiceConfig
// ---------------------------------------------------------------------------

/// Connection settings for the remote spellchecking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL; `/misspelled` and `/corrections` are appended to it.
    pub base_url: String,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: None,
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineConfig
// ---------------------------------------------------------------------------

/// Settings for the correction pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How correction results are sequenced during the fold.
    pub fold_order: FoldOrder,
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use spell_fixer::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// println!("{}", config.service.base_url);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote service settings.
    pub service: ServiceConfig,
    /// Correction pipeline settings.
    pub pipeline: PipelineConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.service.base_url, loaded.service.base_url);
        assert_eq!(original.service.timeout_secs, loaded.service.timeout_secs);
        assert_eq!(original.pipeline.fold_order, loaded.pipeline.fold_order);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");

        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.pipeline.fold_order, FoldOrder::Resolution);
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(
            cfg.service.base_url,
            "https://us-east1-serverless-306422.cloudfunctions.net/spellchecker"
        );
        assert!(cfg.service.timeout_secs.is_none());
        assert_eq!(cfg.pipeline.fold_order, FoldOrder::Resolution);
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.service.base_url = "http://localhost:8080".into();
        cfg.service.timeout_secs = Some(5);
        cfg.pipeline.fold_order = FoldOrder::Token;

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.service.base_url, "http://localhost:8080");
        assert_eq!(loaded.service.timeout_secs, Some(5));
        assert_eq!(loaded.pipeline.fold_order, FoldOrder::Token);
    }

    /// Sections missing from the file fall back to their defaults.
    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[pipeline]\nfold_order = \"token\"\n").expect("write");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.pipeline.fold_order, FoldOrder::Token);
        assert_eq!(loaded.service.base_url, DEFAULT_BASE_URL);
    }

    /// The spelling printed by the CLI and logs is accepted in the file.
    #[test]
    fn display_form_loads_from_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("display.toml");
        let content = format!(
            "[service]\nbase_url = \"http://localhost:9000\"\n\n[pipeline]\nfold_order = \"{}\"\n",
            FoldOrder::Token
        );
        std::fs::write(&path, content).expect("write");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.pipeline.fold_order, FoldOrder::Token);
        assert_eq!(loaded.service.base_url, "http://localhost:9000");
    }

    #[test]
    fn saved_fold_order_uses_display_form() {
        let mut cfg = AppConfig::default();
        cfg.pipeline.fold_order = FoldOrder::Token;

        let content = toml::to_string_pretty(&cfg).expect("serialise");

        assert!(content.contains("fold_order = \"token\""), "{content}");
    }

    #[test]
    fn fold_order_parses_case_insensitively() {
        assert_eq!("Token".parse::<FoldOrder>(), Ok(FoldOrder::Token));
        assert_eq!("resolution".parse::<FoldOrder>(), Ok(FoldOrder::Resolution));
        assert!("random".parse::<FoldOrder>().is_err());
    }

    #[test]
    fn fold_order_display_round_trips() {
        for order in [FoldOrder::Resolution, FoldOrder::Token] {
            assert_eq!(order.to_string().parse::<FoldOrder>(), Ok(order));
        }
    }
}
