/// Configuration and lifecycle errors around the schema registry.
///
/// These indicate a broken deployment configuration, not bad caller input.
/// They surface at process startup or endpoint construction and are never
/// converted into a caller-facing response.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The registry was initialized a second time.
    #[error("schema registry is already initialized")]
    AlreadyInitialized,

    /// The registry was used before initialization.
    #[error("schema registry is not initialized")]
    NotInitialized,

    /// No schema was registered under the given name.
    #[error("no schema registered under name {0:?}")]
    SchemaNotFound(String),

    /// The schema definition could not be compiled.
    #[error("failed to compile schema: {0}")]
    CompileFailed(String),
}

pub type Result<T> = std::result::Result<T, StateError>;
