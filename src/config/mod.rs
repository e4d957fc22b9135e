//! Configuration module for the spell fixer.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the remote
//! service and the correction pipeline, `AppPaths` for the platform config
//! directory, and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, FoldOrder, PipelineConfig, ServiceConfig, DEFAULT_BASE_URL};
