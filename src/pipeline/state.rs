//! Submission state machine and shared application state.
//!
//! [`PipelineState`] tracks which phase the current submission is in.
//! [`AppState`] holds everything a front end observes: the submitted phrase,
//! the corrected phrase, the loading flag and the last error. [`View`] is the
//! single thing to display, derived from `AppState`.
//!
//! [`SharedState`] is a type alias for `Arc<Mutex<AppState>>`.

use std::fmt;
use std::sync::{Arc, Mutex};

use super::error::PipelineError;

// ---------------------------------------------------------------------------
// PipelineState
// ---------------------------------------------------------------------------

/// States of a correction submission.
///
/// ```text
/// Idle ──submit──▶ Checking ──all checks settled──▶ Correcting ──fold──▶ Done
/// Idle ──submit (blank)──▶ Failed
/// Checking / Correcting ──any lookup failed──▶ Failed
/// Done / Failed ──submit──▶ Checking
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    /// Misspelling checks are in flight.
    Checking,
    /// Correction lookups are in flight.
    Correcting,
    Done,
    Failed,
}

impl PipelineState {
    /// Returns `true` while requests are in flight.
    ///
    /// ```
    /// use spell_fixer::pipeline::PipelineState;
    ///
    /// assert!(!PipelineState::Idle.is_busy());
    /// assert!(PipelineState::Checking.is_busy());
    /// assert!(PipelineState::Correcting.is_busy());
    /// assert!(!PipelineState::Done.is_busy());
    /// assert!(!PipelineState::Failed.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, PipelineState::Checking | PipelineState::Correcting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "Idle",
            PipelineState::Checking => "Checking",
            PipelineState::Correcting => "Correcting",
            PipelineState::Done => "Done",
            PipelineState::Failed => "Failed",
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// What a front end should show. Exactly one at a time, chosen with the
/// precedence error > loading > result > idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Idle,
    Loading,
    Result(String),
    Error(String),
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Idle => Ok(()),
            View::Loading => f.write_str("Checking..."),
            View::Result(corrected) => write!(f, "Result: {corrected}"),
            View::Error(details) => write!(f, "Error: {details}"),
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Observable state of the most recent submission.
///
/// Reset at the start of every submission; nothing carries over between
/// submissions apart from what the next one overwrites.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current phase.
    pub pipeline: PipelineState,

    /// The phrase as submitted, untrimmed.
    pub phrase: String,

    /// The corrected phrase. Empty until a submission completes, and kept
    /// empty when it fails.
    pub corrected_phrase: String,

    /// Error that ended the last submission, if any.
    pub error: Option<PipelineError>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` from dispatch of the first check until both phases finish or
    /// the submission fails.
    pub fn is_loading(&self) -> bool {
        self.pipeline.is_busy()
    }

    /// Clear the previous outcome and freeze `phrase` for a new submission.
    pub fn begin(&mut self, phrase: &str) {
        self.pipeline = PipelineState::Idle;
        self.phrase = phrase.to_string();
        self.corrected_phrase.clear();
        self.error = None;
    }

    pub fn finish(&mut self, corrected: String) {
        self.pipeline = PipelineState::Done;
        self.corrected_phrase = corrected;
    }

    pub fn fail(&mut self, error: PipelineError) {
        self.pipeline = PipelineState::Failed;
        self.corrected_phrase.clear();
        self.error = Some(error);
    }

    /// The single view to render for this state.
    pub fn view(&self) -> View {
        if let Some(error) = &self.error {
            View::Error(error.to_string())
        } else if self.is_loading() {
            View::Loading
        } else if !self.corrected_phrase.is_empty() {
            View::Result(self.corrected_phrase.clone())
        } else {
            View::Idle
        }
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`AppState`].
///
/// Lock for a short critical section only; never hold the guard across an
/// `.await`.
pub type SharedState = Arc<Mutex<AppState>>;

pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(AppState::new()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
