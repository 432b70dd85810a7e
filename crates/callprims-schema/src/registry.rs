use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StateError};
use crate::validator::SchemaValidator;

/// Name-keyed registry of compiled validators with a two-phase lifecycle.
///
/// A registry starts uninitialized. [`initialize`](Self::initialize) compiles
/// every supplied definition exactly once; from then on the contents are
/// immutable and the registry can be shared across threads (`Arc`) without
/// locking. Intended use is one instance per process, created at startup and
/// threaded into endpoint construction; tests may hold as many independent
/// registries as they like.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    validators: OnceLock<HashMap<String, Arc<SchemaValidator>>>,
}

impl SchemaRegistry {
    /// Create an uninitialized registry.
    pub fn new() -> Self {
        Self {
            validators: OnceLock::new(),
        }
    }

    /// Compile and publish the full schema set.
    ///
    /// Every call after the first successful one fails with
    /// [`StateError::AlreadyInitialized`]. If any definition does not
    /// compile, the whole initialization fails and nothing is published.
    pub fn initialize(&self, schemas: HashMap<String, Value>) -> Result<()> {
        if self.validators.get().is_some() {
            return Err(StateError::AlreadyInitialized);
        }

        let mut compiled = HashMap::with_capacity(schemas.len());
        for (name, definition) in schemas {
            let validator = SchemaValidator::from_definition(&definition).map_err(|err| {
                match err {
                    StateError::CompileFailed(message) => {
                        StateError::CompileFailed(format!("{name}: {message}"))
                    }
                    other => other,
                }
            })?;
            compiled.insert(name, Arc::new(validator));
        }

        let count = compiled.len();
        self.validators
            .set(compiled)
            .map_err(|_| StateError::AlreadyInitialized)?;
        debug!(schemas = count, "schema registry initialized");
        Ok(())
    }

    /// Whether `initialize` has completed.
    pub fn is_initialized(&self) -> bool {
        self.validators.get().is_some()
    }

    /// Look up a previously compiled validator by name.
    ///
    /// A missing name is a configuration bug, not a caller input error, and
    /// is reported as a [`StateError`].
    pub fn get(&self, name: &str) -> Result<Arc<SchemaValidator>> {
        let validators = self.validators.get().ok_or(StateError::NotInitialized)?;
        validators
            .get(name)
            .cloned()
            .ok_or_else(|| StateError::SchemaNotFound(name.to_string()))
    }

    /// Compile an ad-hoc schema definition, bypassing the name cache.
    pub fn compile(definition: &Value) -> Result<SchemaValidator> {
        SchemaValidator::from_definition(definition)
    }

    /// Check if a name has a registered schema.
    pub fn has_schema(&self, name: &str) -> bool {
        self.validators
            .get()
            .is_some_and(|validators| validators.contains_key(name))
    }

    /// Names with registered schemas, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .validators
            .get()
            .map(|validators| validators.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn greet_schemas() -> HashMap<String, Value> {
        HashMap::from([(
            "greet".to_string(),
            json!({
                "type": "object",
                "properties": { "name": { "type": "string" } },
                "required": ["name"]
            }),
        )])
    }

    #[test]
    fn initialize_and_get() {
        let registry = SchemaRegistry::new();
        registry.initialize(greet_schemas()).unwrap();

        let validator = registry.get("greet").unwrap();
        assert!(validator.validate(&json!({"name": "Ada"})).is_valid());
        assert!(!validator.validate(&json!({"name": 7})).is_valid());
    }

    #[test]
    fn double_initialize_fails_every_time() {
        let registry = SchemaRegistry::new();
        registry.initialize(greet_schemas()).unwrap();

        assert!(matches!(
            registry.initialize(greet_schemas()),
            Err(StateError::AlreadyInitialized)
        ));
        assert!(matches!(
            registry.initialize(HashMap::new()),
            Err(StateError::AlreadyInitialized)
        ));
        // First initialization remains intact.
        assert!(registry.has_schema("greet"));
    }

    #[test]
    fn get_before_initialize_fails() {
        let registry = SchemaRegistry::new();
        assert!(matches!(
            registry.get("greet"),
            Err(StateError::NotInitialized)
        ));
        assert!(!registry.is_initialized());
    }

    #[test]
    fn unknown_name_fails() {
        let registry = SchemaRegistry::new();
        registry.initialize(greet_schemas()).unwrap();

        assert!(matches!(
            registry.get("missing"),
            Err(StateError::SchemaNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn compile_failure_names_the_schema() {
        let registry = SchemaRegistry::new();
        let schemas = HashMap::from([(
            "broken".to_string(),
            json!({"type": "definitely-not-a-type"}),
        )]);

        match registry.initialize(schemas) {
            Err(StateError::CompileFailed(message)) => {
                assert!(message.starts_with("broken: "));
            }
            other => panic!("expected CompileFailed, got {other:?}"),
        }
        // Failed initialization publishes nothing.
        assert!(!registry.is_initialized());
    }

    #[test]
    fn inline_compile_is_independent_of_lifecycle() {
        let validator = SchemaRegistry::compile(&json!({"type": "array"})).unwrap();
        assert!(validator.validate(&json!([1, 2])).is_valid());
        assert!(!validator.validate(&json!("nope")).is_valid());
    }

    #[test]
    fn names_are_sorted() {
        let registry = SchemaRegistry::new();
        let schemas = HashMap::from([
            ("zeta".to_string(), json!({"type": "object"})),
            ("alpha".to_string(), json!({"type": "string"})),
        ]);
        registry.initialize(schemas).unwrap();

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        assert!(registry.has_schema("alpha"));
        assert!(!registry.has_schema("beta"));
    }
}
