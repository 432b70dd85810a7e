//! Guard contract and caller-facing error vocabulary for callable endpoints.
//!
//! A guard is a single async capability: validate-or-reject. Any number of
//! independent implementations compose by list concatenation in the endpoint
//! configuration, and the dispatch pipeline runs them strictly in order.

pub mod context;
pub mod error;
pub mod guard;

pub use context::{CallContext, CallerAuth};
pub use error::{CallError, CallResult, ErrorCode};
pub use guard::{Guard, RequireAuth};
