//! Domain model for the Attest verification platform.
//!
//! Pure types and validation logic shared by the API client and the smoke
//! runner: access tiers, per-method verification status, the WHY-submission
//! lifecycle, notification read state, and the loading-aware status overview.
//! No I/O lives here.

pub mod error;
pub mod method;
pub mod notification;
pub mod overview;
pub mod preference;
pub mod submission;
pub mod tier;
pub mod types;

pub use error::CoreError;
