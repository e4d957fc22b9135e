//! Phase 1: split the phrase into tokens and check every token concurrently.

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::service::{MisspellingResult, ServiceError, SpellService};

use super::barrier::settle;
use super::error::PipelineError;

/// Split `phrase` into tokens on single spaces after trimming the ends.
///
/// Runs of internal spaces are kept as empty tokens. Blank input is a
/// [`PipelineError::Validation`].
///
/// ```
/// use spell_fixer::pipeline::tokenize;
///
/// assert_eq!(tokenize("  I has a dog ").unwrap(), vec!["I", "has", "a", "dog"]);
/// assert_eq!(tokenize("a  b").unwrap(), vec!["a", "", "b"]);
/// assert!(tokenize(" \t ").is_err());
/// ```
pub fn tokenize(phrase: &str) -> Result<Vec<&str>, PipelineError> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::Validation);
    }
    Ok(trimmed.split(' ').collect())
}

/// Check every token of `phrase` and return the misspelled ones in token
/// order.
///
/// One request per token is spawned up front. The call returns only after
/// all of them have settled, even when one fails early.
pub async fn check_phrase(
    service: &Arc<dyn SpellService>,
    phrase: &str,
) -> Result<Vec<MisspellingResult>, PipelineError> {
    let tokens = tokenize(phrase)?;
    log::debug!("checking {} token(s)", tokens.len());

    let mut set = JoinSet::new();
    for (index, token) in tokens.into_iter().enumerate() {
        let service = Arc::clone(service);
        let token = token.to_string();
        set.spawn(async move {
            let result = service.is_misspelled(&token).await?;
            Ok::<_, ServiceError>((index, result))
        });
    }

    let mut checked = settle(set).await?;
    checked.sort_by_key(|(index, _)| *index);

    let misspelled: Vec<MisspellingResult> = checked
        .into_iter()
        .map(|(_, result)| result)
        .filter(|result| result.misspelled)
        .collect();

    log::debug!("{} misspelled token(s)", misspelled.len());
    Ok(misspelled)
}
