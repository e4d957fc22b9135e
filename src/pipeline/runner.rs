//! Submission orchestrator. Drives check → correct → fold for one phrase.
//!
//! [`SpellChecker`] owns the [`SharedState`] and the service handle.
//!
//! # Flow
//!
//! ```text
//! submit(phrase)
//!   └─▶ reset state, freeze phrase
//!         ├─ blank → Failed (ValidationError, no requests, never loading)
//!         └─▶ check_phrase      [Checking]   one request per token, barrier
//!               └─▶ correct     [Correcting] one request per misspelled word, barrier
//!                     └─▶ fold  [Done]       corrected phrase published
//! any lookup error ──▶ [Failed]  corrected phrase stays empty
//! ```

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::config::{AppConfig, FoldOrder};
use crate::service::SpellService;

use super::corrector::correct;
use super::dispatcher::{check_phrase, tokenize};
use super::error::PipelineError;
use super::state::{new_shared_state, AppState, PipelineState, SharedState, View};

/// Runs correction submissions against a [`SpellService`].
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use spell_fixer::config::AppConfig;
/// use spell_fixer::pipeline::SpellChecker;
/// use spell_fixer::service::HttpSpellService;
///
/// # async fn example() {
/// let config = AppConfig::default();
/// let service = Arc::new(HttpSpellService::from_config(&config.service));
/// let checker = SpellChecker::from_config(&config, service);
///
/// match checker.submit("I has a dog").await {
///     Ok(corrected) => println!("{corrected}"),
///     Err(e) => eprintln!("Error: {e}"),
/// }
/// # }
/// ```
pub struct SpellChecker {
    state: SharedState,
    service: Arc<dyn SpellService>,
    fold_order: FoldOrder,
}

impl SpellChecker {
    /// Create a checker with its own fresh state and the default fold order.
    pub fn new(service: Arc<dyn SpellService>) -> Self {
        Self::with_state(new_shared_state(), service)
    }

    /// Create a checker that publishes into an existing `state`.
    pub fn with_state(state: SharedState, service: Arc<dyn SpellService>) -> Self {
        Self {
            state,
            service,
            fold_order: FoldOrder::default(),
        }
    }

    pub fn from_config(config: &AppConfig, service: Arc<dyn SpellService>) -> Self {
        Self::new(service).with_fold_order(config.pipeline.fold_order)
    }

    pub fn with_fold_order(mut self, fold_order: FoldOrder) -> Self {
        self.fold_order = fold_order;
        self
    }

    pub fn fold_order(&self) -> FoldOrder {
        self.fold_order
    }

    /// Handle to the observable state.
    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    /// Snapshot of what should be displayed right now.
    pub fn view(&self) -> View {
        self.lock().view()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// Correct `phrase` and publish the outcome to the shared state.
    ///
    /// The returned value mirrors what ends up in the state: the corrected
    /// phrase on success, the first error observed otherwise.
    pub async fn submit(&self, phrase: &str) -> Result<String, PipelineError> {
        self.lock().begin(phrase);

        if let Err(e) = tokenize(phrase) {
            return Err(self.fail(e));
        }

        log::info!("{}", View::Loading);
        self.set_pipeline(PipelineState::Checking);
        let misspelled = match check_phrase(&self.service, phrase).await {
            Ok(found) => found,
            Err(e) => return Err(self.fail(e)),
        };

        self.set_pipeline(PipelineState::Correcting);
        let words: Vec<String> = misspelled.into_iter().map(|m| m.word).collect();
        let corrected = match correct(&self.service, phrase, &words, self.fold_order).await {
            Ok(corrected) => corrected,
            Err(e) => return Err(self.fail(e)),
        };

        log::info!("corrected {} word(s)", words.len());
        self.lock().finish(corrected.clone());
        Ok(corrected)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_pipeline(&self, pipeline: PipelineState) {
        log::debug!("pipeline: {}", pipeline.label());
        self.lock().pipeline = pipeline;
    }

    fn fail(&self, error: PipelineError) -> PipelineError {
        if error.is_validation() {
            log::debug!("rejected blank phrase");
        } else {
            log::error!("submission failed: {error}");
        }
        self.lock().fail(error.clone());
        error
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
