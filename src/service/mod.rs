//! Remote spellchecking service client.
//!
//! This module provides:
//! * [`SpellService`]: async trait for the two lookups the pipeline needs.
//! * [`HttpSpellService`]: reqwest client for the `/misspelled` and
//!   `/corrections` endpoints.
//! * [`MisspellingResult`] / [`CorrectionResult`]: response bodies.
//! * [`ServiceError`]: transport, status and parse failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use spell_fixer::config::ServiceConfig;
//! use spell_fixer::service::{HttpSpellService, SpellService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = HttpSpellService::from_config(&ServiceConfig::default());
//!
//!     let check = service.is_misspelled("helo").await.unwrap();
//!     if check.misspelled {
//!         let found = service.corrections(&check.word).await.unwrap();
//!         println!("{:?}", found.primary());
//!     }
//! }
//! ```

pub mod client;
pub mod types;

#[cfg(test)]
pub mod mock;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{HttpSpellService, ServiceError, SpellService};
pub use types::{CorrectionResult, MisspellingResult};

#[cfg(test)]
pub use mock::MockSpellService;
