/// Groq Relay — Shared Library
///
/// This crate contains the configuration, models, provider client
/// and request pipeline used by the serverless functions.
///
/// Each function in `api/` imports from this library
/// to keep handlers thin and logic testable.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod models;
pub mod provider;

pub use error::{ProviderError, RelayError, Result};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
