//! Compile-once JSON Schema validation for callable endpoints.
//!
//! Every schema is compiled exactly once, at process startup, and validated
//! against many times per call. The registry's explicit two-phase lifecycle
//! makes double initialization and use-before-initialization loud
//! configuration errors instead of silent fallbacks.

pub mod error;
pub mod registry;
pub mod validator;

pub use error::{Result, StateError};
pub use registry::SchemaRegistry;
pub use validator::{SchemaValidator, ValidationIssue, ValidationOutcome};
