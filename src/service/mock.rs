//! In-process [`SpellService`] double for pipeline tests.
//!
//! Words are "correct" unless registered with [`MockSpellService::misspelled`].
//! Per-word delays make resolve order controllable under tokio's paused clock,
//! and per-word failures exercise the error paths. Every call is counted.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::service::client::{ServiceError, SpellService};
use crate::service::types::{CorrectionResult, MisspellingResult};

#[derive(Default)]
pub struct MockSpellService {
    suggestions: HashMap<String, Vec<String>>,
    check_delays: HashMap<String, Duration>,
    correction_delays: HashMap<String, Duration>,
    failing_checks: HashSet<String>,
    failing_corrections: HashSet<String>,
    check_calls: AtomicUsize,
    correction_calls: AtomicUsize,
    completed: Mutex<Vec<String>>,
}

impl MockSpellService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `word` as misspelled with the given suggestion list.
    pub fn misspelled(mut self, word: &str, suggestions: &[&str]) -> Self {
        self.suggestions.insert(
            word.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn check_delay(mut self, word: &str, delay: Duration) -> Self {
        self.check_delays.insert(word.to_string(), delay);
        self
    }

    pub fn correction_delay(mut self, word: &str, delay: Duration) -> Self {
        self.correction_delays.insert(word.to_string(), delay);
        self
    }

    pub fn fail_check(mut self, word: &str) -> Self {
        self.failing_checks.insert(word.to_string());
        self
    }

    pub fn fail_corrections(mut self, word: &str) -> Self {
        self.failing_corrections.insert(word.to_string());
        self
    }

    pub fn check_calls(&self) -> usize {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn correction_calls(&self) -> usize {
        self.correction_calls.load(Ordering::SeqCst)
    }

    /// Calls that ran to completion (success or failure), in completion
    /// order, as `"check:<word>"` / `"corrections:<word>"`.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    async fn pause(delays: &HashMap<String, Duration>, word: &str) {
        if let Some(delay) = delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn record(&self, kind: &str, word: &str) {
        self.completed.lock().unwrap().push(format!("{kind}:{word}"));
    }
}

#[async_trait]
impl SpellService for MockSpellService {
    async fn is_misspelled(&self, word: &str) -> Result<MisspellingResult, ServiceError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        Self::pause(&self.check_delays, word).await;
        self.record("check", word);

        if self.failing_checks.contains(word) {
            return Err(ServiceError::Request(format!("connection reset checking '{word}'")));
        }

        Ok(MisspellingResult {
            word: word.to_string(),
            misspelled: self.suggestions.contains_key(word),
        })
    }

    async fn corrections(&self, word: &str) -> Result<CorrectionResult, ServiceError> {
        self.correction_calls.fetch_add(1, Ordering::SeqCst);
        Self::pause(&self.correction_delays, word).await;
        self.record("corrections", word);

        if self.failing_corrections.contains(word) {
            return Err(ServiceError::Status(503));
        }

        Ok(CorrectionResult {
            word: word.to_string(),
            corrections: self.suggestions.get(word).cloned().unwrap_or_default(),
        })
    }
}
