//! Validated callable endpoints with guard-chain authorization.
//!
//! callprims builds remote-call endpoints from three pieces: a precompiled
//! input schema, an ordered chain of precondition guards, and a business
//! handler. The result is one callable unit with a fixed per-call pipeline:
//! validate → guards → handler. Configuration mistakes fail at startup or
//! build time; only input, guard, and handler errors ever reach a caller.
//!
//! # Crate Structure
//!
//! - [`schema`] — Compile-once JSON Schema registry
//! - [`guard`] — Guard contract, call context, caller-facing errors
//! - [`endpoint`] — Endpoint builder and dispatch pipeline

/// Re-export schema types.
pub mod schema {
    pub use callprims_schema::*;
}

/// Re-export guard types.
pub mod guard {
    pub use callprims_guard::*;
}

/// Re-export endpoint types.
pub mod endpoint {
    pub use callprims_endpoint::*;
}
