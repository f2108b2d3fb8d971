//! Typed HTTP client for the Attest WHY-submission and verification API.
//!
//! [`WhyApi`](api::WhyApi) wraps the nine REST endpoints with [`reqwest`];
//! payload types live in [`payloads`] and validate themselves against the
//! domain rules in `attest-core` before anything goes on the wire.

pub mod api;
pub mod config;
pub mod error;
pub mod payloads;

pub use api::WhyApi;
pub use config::ClientConfig;
pub use error::WhyApiError;
