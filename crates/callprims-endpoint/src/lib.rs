//! Endpoint construction and the per-call dispatch pipeline.
//!
//! This is the composition layer: a schema reference, a guard chain, and a
//! business handler become one callable unit with a fixed runtime pipeline —
//! validate, then guards in order, then the handler. Configuration
//! mismatches (unknown schema names, uninitialized registry) fail at build
//! time with a [`StateError`]; only input, guard, and handler errors ever
//! reach the caller.

pub mod builder;
pub mod config;
pub mod endpoint;

pub use builder::{EndpointBuilder, SchemaRef};
pub use callprims_schema::{Result, StateError};
pub use config::{ConfigOverrides, EndpointConfig};
pub use endpoint::Endpoint;
