//! All-settle barrier over a set of spawned lookups.

use tokio::task::JoinSet;

use crate::service::ServiceError;

use super::error::PipelineError;

/// Wait for every task in `set` and return their outputs in the order they
/// completed.
///
/// A failure does not abort the siblings: the barrier keeps draining until
/// the set is empty and only then reports the first error it saw. Results
/// that arrive after an error are dropped.
pub(crate) async fn settle<T>(
    mut set: JoinSet<Result<T, ServiceError>>,
) -> Result<Vec<T>, PipelineError>
where
    T: Send + 'static,
{
    let mut settled = Vec::with_capacity(set.len());
    let mut first_error: Option<PipelineError> = None;

    while let Some(joined) = set.join_next().await {
        let outcome = match joined {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(PipelineError::Transport(e)),
            Err(e) => Err(PipelineError::Internal(e.to_string())),
        };

        match outcome {
            Ok(value) => {
                if first_error.is_none() {
                    settled.push(value);
                }
            }
            Err(e) => {
                log::warn!("lookup failed: {e}");
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(settled),
    }
}
