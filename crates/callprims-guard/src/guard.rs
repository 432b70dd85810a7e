use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::context::CallContext;
use crate::error::{CallError, ErrorCode};

/// An ordered precondition check run after input validation and before the
/// handler.
///
/// Implementations resolve on success and fail with a caller-facing
/// [`CallError`] on rejection. The pipeline surfaces that error verbatim, so
/// a guard owns its error code, message, and details. Guards may do async
/// work (external lookups); the chain awaits each guard to completion before
/// the next one runs.
///
/// Guards are supplied at configuration time, owned by the configuration
/// snapshot, and shared read-only across all calls to all endpoints built
/// from it.
#[async_trait]
pub trait Guard: Send + Sync {
    async fn handle(&self, input: &Value, context: &CallContext) -> Result<(), CallError>;
}

/// Rejects calls that carry no platform authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAuth;

#[async_trait]
impl Guard for RequireAuth {
    async fn handle(&self, _input: &Value, context: &CallContext) -> Result<(), CallError> {
        if context.auth.is_some() {
            Ok(())
        } else {
            debug!(
                endpoint = context.endpoint_name.as_deref().unwrap_or("<inline>"),
                "rejecting unauthenticated call"
            );
            Err(CallError::new(
                ErrorCode::Unauthenticated,
                "The function must be called while authenticated.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn require_auth_passes_authenticated_calls() {
        let ctx = CallContext::authenticated("user-1", json!({}));
        assert!(RequireAuth.handle(&json!({}), &ctx).await.is_ok());
    }

    #[tokio::test]
    async fn require_auth_rejects_anonymous_calls() {
        let err = RequireAuth
            .handle(&json!({}), &CallContext::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
        assert!(err.details.is_none());
    }
}
