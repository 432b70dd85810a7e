use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use callprims_guard::{CallContext, CallError};
use callprims_schema::{Result, SchemaRegistry};

use crate::config::{ConfigOverrides, EndpointConfig};
use crate::endpoint::{BoxCallFuture, Endpoint, HandlerFn};

/// Reference to the schema an endpoint validates against.
#[derive(Debug, Clone)]
pub enum SchemaRef {
    /// Resolve from the registry by name. Calls to the endpoint carry this
    /// name in their context.
    Named(String),
    /// Compile fresh at build time; not cached by name.
    Inline(Value),
}

impl From<&str> for SchemaRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for SchemaRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Value> for SchemaRef {
    fn from(definition: Value) -> Self {
        Self::Inline(definition)
    }
}

/// Builds callable endpoints bound to one configuration snapshot.
///
/// Construct one at process start, after the registry is initialized.
/// Per-endpoint variations derive a new builder through
/// [`with_config`](Self::with_config); the original is never mutated, so
/// concurrent endpoint construction cannot race.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    config: EndpointConfig,
    registry: Arc<SchemaRegistry>,
}

impl EndpointBuilder {
    pub fn new(config: EndpointConfig, registry: Arc<SchemaRegistry>) -> Self {
        Self { config, registry }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Derive a builder whose configuration has the given fields replaced.
    pub fn with_config(&self, overrides: ConfigOverrides) -> Self {
        Self {
            config: self.config.apply(overrides),
            registry: Arc::clone(&self.registry),
        }
    }

    /// Build a callable endpoint from a handler and a schema reference.
    ///
    /// Named schemas resolve through the registry; an unknown name fails
    /// here, at build time, with a [`StateError`](callprims_schema::StateError)
    /// — not at the first production call. Inline schemas are compiled
    /// fresh. Beyond compilation, nothing happens at build time.
    pub fn build<F, Fut>(&self, handler: F, schema: impl Into<SchemaRef>) -> Result<Endpoint>
    where
        F: Fn(Value, CallContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Value, CallError>> + Send + 'static,
    {
        let (name, validator) = match schema.into() {
            SchemaRef::Named(name) => {
                let validator = self.registry.get(&name)?;
                (Some(name), validator)
            }
            SchemaRef::Inline(definition) => {
                let validator = SchemaRegistry::compile(&definition)?;
                (None, Arc::new(validator))
            }
        };

        debug!(
            endpoint = name.as_deref().unwrap_or("<inline>"),
            guards = self.config.guards.len(),
            "built callable endpoint"
        );

        let handler: HandlerFn = Arc::new(move |input, context| -> BoxCallFuture {
            Box::pin(handler(input, context))
        });

        Ok(Endpoint::new(
            name,
            self.config.default_regions.clone(),
            self.config.guards.clone(),
            validator,
            handler,
        ))
    }
}
