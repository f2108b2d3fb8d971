//! Wire payloads for the WHY API.
//!
//! The server speaks camelCase JSON; every DTO here renames accordingly.
//! Statuses, trigger types, and submission methods stay as strings on the
//! wire and are checked against the constant vocabularies in `attest-core`
//! before a request is sent.

use serde::{Deserialize, Serialize};

use attest_core::method::MethodStatusSets;
use attest_core::types::{DbId, Timestamp};
use attest_core::{submission, CoreError};

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A WHY submission as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhySubmission {
    pub id: DbId,
    pub trigger_type: String,
    pub submission_method: String,
    pub content: String,
    pub status: String,
    #[serde(default)]
    pub reviewer_id: Option<DbId>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// A WHY notification as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyNotification {
    pub id: DbId,
    pub notification_type: String,
    pub content: String,
    pub status: String,
    #[serde(default)]
    pub read_at: Option<Timestamp>,
}

impl WhyNotification {
    /// Whether the notification has been read.
    pub fn is_read(&self) -> bool {
        self.status == attest_core::notification::STATUS_READ
    }
}

// ---------------------------------------------------------------------------
// Read responses
// ---------------------------------------------------------------------------

/// Response from `GET /api/users/{id}/access-tier`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTierResponse {
    pub tier: String,
}

/// Response from `GET /api/users/{id}/verifications`.
///
/// The individual verification records are not consumed anywhere in the
/// client, so they stay as raw JSON values.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationsResponse {
    #[serde(default)]
    pub verifications: Vec<serde_json::Value>,
    pub status: MethodStatusSets,
}

// ---------------------------------------------------------------------------
// Creation requests
// ---------------------------------------------------------------------------

/// Body for `POST /api/users/{id}/why-submissions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    pub trigger_type: String,
    pub submission_method: String,
    pub content: String,
}

impl CreateSubmissionRequest {
    /// Check the request against the domain vocabularies.
    pub fn validate(&self) -> Result<(), CoreError> {
        submission::validate_trigger_type(&self.trigger_type)?;
        submission::validate_submission_method(&self.submission_method)?;
        submission::validate_content(&self.content)
    }
}

/// Body for `POST /api/users/{id}/why-submissions/text`. The submission
/// method is implied by the endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTextSubmissionRequest {
    pub trigger_type: String,
    pub content: String,
}

impl CreateTextSubmissionRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        submission::validate_trigger_type(&self.trigger_type)?;
        submission::validate_content(&self.content)
    }
}

/// Body for `POST /api/why-submissions/sms`. Identified by phone number; the
/// server resolves the owning user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsSubmissionRequest {
    pub phone_number: String,
    pub content: String,
}

impl SmsSubmissionRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.phone_number.trim().is_empty() {
            return Err(CoreError::Validation(
                "An SMS submission requires a phone number".to_string(),
            ));
        }
        submission::validate_content(&self.content)
    }
}

// ---------------------------------------------------------------------------
// Creation responses
// ---------------------------------------------------------------------------

/// Response from the form-based create: the submission plus the notification
/// raised for it. Both are always present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionResponse {
    pub submission: WhySubmission,
    pub notification: WhyNotification,
}

/// Response from the text and SMS create paths, which return only the
/// submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEnvelope {
    pub submission: WhySubmission,
}

// ---------------------------------------------------------------------------
// Update requests
// ---------------------------------------------------------------------------

/// Body for `PATCH /api/why-submissions/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubmissionRequest {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl UpdateSubmissionRequest {
    /// Move a submission to `REVIEWING` under the given reviewer.
    pub fn reviewing(reviewer_id: DbId) -> Self {
        Self {
            status: submission::STATUS_REVIEWING.to_string(),
            reviewer_id: Some(reviewer_id),
            resolution: None,
        }
    }

    /// Resolve a submission with the given resolution text.
    pub fn resolved(resolution: impl Into<String>) -> Self {
        Self {
            status: submission::STATUS_RESOLVED.to_string(),
            reviewer_id: None,
            resolution: Some(resolution.into()),
        }
    }

    /// Reject a submission.
    pub fn rejected() -> Self {
        Self {
            status: submission::STATUS_REJECTED.to_string(),
            reviewer_id: None,
            resolution: None,
        }
    }

    /// Check the status value and its required field pairings.
    pub fn validate(&self) -> Result<(), CoreError> {
        submission::validate_update_fields(
            &self.status,
            self.reviewer_id,
            self.resolution.as_deref(),
        )
    }
}

/// Body for `PATCH /api/why-notifications/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationRequest {
    pub status: String,
}

impl UpdateNotificationRequest {
    /// Mark the notification as read.
    pub fn read() -> Self {
        Self {
            status: attest_core::notification::STATUS_READ.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        attest_core::notification::validate_status(&self.status)
    }
}
