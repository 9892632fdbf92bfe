//! Domain API modules.
//!
//! One function per backend operation. Each is a pure mapping from typed
//! parameters to a single [`crate::http::HttpClient`] call with a fixed
//! method, path, and parameter placement. No branching beyond omitting
//! unset optional filters.

pub mod auth;
pub mod building;
pub mod classroom;
pub mod classroom_type;
