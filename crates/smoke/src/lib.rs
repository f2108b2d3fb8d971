//! Manual smoke test for the Attest WHY API.
//!
//! Runs the full WHY-submission lifecycle against a live server as a strictly
//! sequential scenario: status-view read-back, creation through all three
//! channels, review, resolution, and the notification read transition. The
//! first failing step aborts the run.

pub mod scenario;

pub use scenario::{run, ScenarioConfig, SmokeError};
