use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authentication state of the caller, as supplied by the hosting platform.
///
/// The pipeline treats the token claims as opaque; guards decide what to do
/// with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerAuth {
    /// Stable identifier of the authenticated user.
    pub uid: String,
    /// Decoded token claims.
    #[serde(default)]
    pub claims: Value,
}

/// Per-invocation context handed to guards and handlers.
///
/// Created fresh for every call and discarded afterwards. `endpoint_name`
/// is tagged by the pipeline when the endpoint was built from a named
/// schema, so guards, handlers, and diagnostics can tell which endpoint
/// logic is executing.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub auth: Option<CallerAuth>,
    pub instance_id_token: Option<String>,
    pub endpoint_name: Option<String>,
}

impl CallContext {
    /// Context for an anonymous caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for an authenticated caller.
    pub fn authenticated(uid: impl Into<String>, claims: Value) -> Self {
        Self {
            auth: Some(CallerAuth {
                uid: uid.into(),
                claims,
            }),
            ..Self::default()
        }
    }
}
