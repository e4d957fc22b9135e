//! Phase 2: look up corrections for the misspelled words and fold them into
//! the phrase.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::config::FoldOrder;
use crate::service::{ServiceError, SpellService};

use super::barrier::settle;
use super::error::PipelineError;

/// One pending edit: swap the first occurrence of `word` for `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Position of `word` among the misspelled words handed to [`correct`].
    pub index: usize,
    pub word: String,
    pub replacement: String,
}

/// Apply `replacements` one after another, each on the output of the last.
///
/// Only the first occurrence of each word is touched, and the search runs on
/// the already-edited text, so an earlier replacement can hide or create a
/// match for a later one.
///
/// ```
/// use spell_fixer::pipeline::{fold, Replacement};
///
/// let edits = [Replacement { index: 0, word: "bad".into(), replacement: "good".into() }];
/// assert_eq!(fold("bad bad day", &edits), "good bad day");
/// ```
pub fn fold(phrase: &str, replacements: &[Replacement]) -> String {
    replacements.iter().fold(phrase.to_string(), |acc, edit| {
        acc.replacen(&edit.word, &edit.replacement, 1)
    })
}

/// Fetch the top suggestion for every word in `misspelled` and fold them into
/// `phrase`.
///
/// With nothing to correct the phrase comes back untouched and no request is
/// made. Otherwise every lookup is spawned at once and the fold starts only
/// after all of them have settled. `order` decides whether edits are applied
/// as the lookups resolved or in phrase order.
pub async fn correct(
    service: &Arc<dyn SpellService>,
    phrase: &str,
    misspelled: &[String],
    order: FoldOrder,
) -> Result<String, PipelineError> {
    if misspelled.is_empty() {
        return Ok(phrase.to_string());
    }

    log::debug!("looking up corrections for {} word(s)", misspelled.len());

    let mut set = JoinSet::new();
    for (index, word) in misspelled.iter().cloned().enumerate() {
        let service = Arc::clone(service);
        set.spawn(async move {
            let found = service.corrections(&word).await?;
            let replacement = found
                .primary()
                .map(str::to_string)
                .ok_or_else(|| ServiceError::NoCorrections(word.clone()))?;
            Ok::<_, ServiceError>(Replacement {
                index,
                word,
                replacement,
            })
        });
    }

    let mut replacements = settle(set).await?;
    if order == FoldOrder::Token {
        replacements.sort_by_key(|edit| edit.index);
    }

    for edit in &replacements {
        log::debug!("{:?} -> {:?}", edit.word, edit.replacement);
    }

    Ok(fold(phrase, &replacements))
}
