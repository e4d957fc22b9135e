//! Correction pipeline: phrase → misspelling checks → correction lookups →
//! corrected phrase.
//!
//! # Architecture
//!
//! ```text
//! SpellChecker::submit(phrase)
//!        │
//!        ├─ tokenize            blank → ValidationError
//!        │
//!        ├─ check_phrase        JoinSet: one is_misspelled() per token
//!        │     └─ barrier       wait for all, first error wins
//!        │
//!        ├─ correct             JoinSet: one corrections() per misspelled word
//!        │     └─ barrier       wait for all, first error wins
//!        │
//!        └─ fold                first suggestion replaces first occurrence,
//!                               applied in resolution (or token) order
//!
//! SharedState (Arc<Mutex<AppState>>) ←─── read by the front end
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use spell_fixer::config::AppConfig;
//! use spell_fixer::pipeline::SpellChecker;
//! use spell_fixer::service::HttpSpellService;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let service = Arc::new(HttpSpellService::from_config(&config.service));
//!     let checker = SpellChecker::from_config(&config, service);
//!
//!     let _ = checker.submit("Ths is a tst").await;
//!     println!("{}", checker.view());
//! }
//! ```

mod barrier;
pub mod corrector;
pub mod dispatcher;
pub mod error;
pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use corrector::{correct, fold, Replacement};
pub use dispatcher::{check_phrase, tokenize};
pub use error::{PipelineError, EMPTY_PHRASE_MESSAGE};
pub use runner::SpellChecker;
pub use state::{new_shared_state, AppState, PipelineState, SharedState, View};
