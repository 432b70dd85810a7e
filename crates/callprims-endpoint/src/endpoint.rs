use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use callprims_guard::{CallContext, CallError, ErrorCode, Guard};
use callprims_schema::{SchemaValidator, ValidationIssue, ValidationOutcome};

/// Future returned by a boxed endpoint handler.
pub type BoxCallFuture = Pin<Box<dyn Future<Output = Result<Value, CallError>> + Send>>;

/// Boxed business handler, invoked after validation and guards.
pub(crate) type HandlerFn = Arc<dyn Fn(Value, CallContext) -> BoxCallFuture + Send + Sync>;

/// Message accompanying every schema rejection. Clients read the details
/// payload, not this string.
const SCHEMA_REJECTION_MESSAGE: &str = "Details object contains more info.";

/// A built callable endpoint: validate → guards → handler.
///
/// Fully immutable after construction, so concurrent calls are independent
/// and share nothing mutable.
pub struct Endpoint {
    name: Option<String>,
    regions: Vec<String>,
    guards: Vec<Arc<dyn Guard>>,
    validator: Arc<SchemaValidator>,
    handler: HandlerFn,
}

impl Endpoint {
    pub(crate) fn new(
        name: Option<String>,
        regions: Vec<String>,
        guards: Vec<Arc<dyn Guard>>,
        validator: Arc<SchemaValidator>,
        handler: HandlerFn,
    ) -> Self {
        Self {
            name,
            regions,
            guards,
            validator,
            handler,
        }
    }

    /// Deployment regions for the hosting platform, verbatim from the
    /// configuration the endpoint was built with.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Schema name, for endpoints built from a named schema.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run one call through the pipeline.
    ///
    /// Strict order, no retries: schema validation first, then each guard
    /// awaited in sequence, then the handler. The first failing step aborts
    /// the call — a schema rejection is reported as `invalid-argument` with
    /// the structured issue list, a guard rejection is surfaced verbatim,
    /// and a handler error flows through unchanged.
    pub async fn call(
        &self,
        input: Value,
        mut context: CallContext,
    ) -> Result<Value, CallError> {
        if let Some(name) = &self.name {
            context.endpoint_name = Some(name.clone());
        }

        if let ValidationOutcome::Invalid(issues) = self.validator.validate(&input) {
            debug!(
                endpoint = self.name.as_deref().unwrap_or("<inline>"),
                issues = issues.len(),
                "input rejected by schema"
            );
            return Err(schema_rejection(issues));
        }

        for guard in &self.guards {
            guard.handle(&input, &context).await?;
        }

        (self.handler)(input, context).await
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("regions", &self.regions)
            .field("guards", &format_args!("<{} guards>", self.guards.len()))
            .finish_non_exhaustive()
    }
}

/// Client-input error in the exact wire shape expected by callable tooling.
fn schema_rejection(issues: Vec<ValidationIssue>) -> CallError {
    CallError::new(ErrorCode::InvalidArgument, SCHEMA_REJECTION_MESSAGE)
        .with_details(json!({ "code": "schema", "details": issues }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn schema_rejection_has_the_wire_shape() {
        let err = schema_rejection(vec![ValidationIssue {
            path: "/name".to_string(),
            message: "not a string".to_string(),
        }]);

        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.message, "Details object contains more info.");
        assert_eq!(
            err.details,
            Some(json!({
                "code": "schema",
                "details": [{"path": "/name", "message": "not a string"}]
            }))
        );
    }
}
