//! Per-call timeout wrapping for model requests.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::pipeline::error::{wrap_error, ErrorContext, PipelineError, Stage};

/// Default budget for a single model call.
pub const DEFAULT_TIMEOUT_MS: u64 = 180_000;

/// Smallest accepted budget; configured values below this fall back to the
/// default rather than producing an instantly-expiring call.
pub const MIN_TIMEOUT_MS: u64 = 1_000;

/// Resolve a configured timeout to the budget actually used.
pub fn effective_timeout_ms(configured: u64) -> u64 {
    if configured < MIN_TIMEOUT_MS {
        DEFAULT_TIMEOUT_MS
    } else {
        configured
    }
}

/// Run one model call under a timeout.
///
/// The countdown is armed before the call and disarmed on every exit path;
/// on expiry the in-flight future is dropped, which aborts the underlying
/// HTTP request, and the result is a timeout error for `stage`. Failures
/// from the call itself are classified via `wrap_error`. No partial result
/// survives either way.
pub async fn call_with_timeout<T, F>(
    timeout_ms: u64,
    stage: Stage,
    context: ErrorContext,
    call: F,
) -> Result<T, PipelineError>
where
    F: Future<Output = Result<T>>,
{
    let budget = effective_timeout_ms(timeout_ms);
    match tokio::time::timeout(Duration::from_millis(budget), call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(wrap_error(err, stage, context)),
        Err(_) => {
            let mut err = PipelineError::timeout(budget, stage);
            err.context = context;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::error::ErrorKind;

    #[test]
    fn values_below_floor_fall_back_to_default() {
        assert_eq!(effective_timeout_ms(0), DEFAULT_TIMEOUT_MS);
        assert_eq!(effective_timeout_ms(999), DEFAULT_TIMEOUT_MS);
        assert_eq!(effective_timeout_ms(1_000), 1_000);
        assert_eq!(effective_timeout_ms(250_000), 250_000);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_yields_timeout_error_with_context() {
        let result: Result<(), PipelineError> = call_with_timeout(
            1_000,
            Stage::Refinement,
            ErrorContext::default().with_chunk(1, 3),
            std::future::pending(),
        )
        .await;

        let err = result.expect_err("expected timeout");
        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.stage, Stage::Refinement);
        assert_eq!(err.context.chunk_index, Some(1));
        assert!(err.message.contains("1s"), "got: {}", err.message);
    }

    #[tokio::test]
    async fn success_passes_value_through() {
        let result = call_with_timeout(
            5_000,
            Stage::Refinement,
            ErrorContext::default(),
            async { Ok(42) },
        )
        .await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn call_failure_is_classified() {
        let result: Result<(), PipelineError> = call_with_timeout(
            5_000,
            Stage::Generation,
            ErrorContext::default(),
            async { Err(anyhow::anyhow!("401 Unauthorized")) },
        )
        .await;

        let err = result.expect_err("expected classified error");
        assert_eq!(err.kind, ErrorKind::ApiKeyMissing);
        assert_eq!(err.stage, Stage::Generation);
    }
}
