//! Request, response and envelope types for the relay.
//!
//! All of them live for a single request/response cycle.

pub mod completion;
pub mod envelope;
pub mod prompt;
