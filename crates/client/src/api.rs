//! REST client for the Attest WHY API.
//!
//! Wraps the verification read endpoints and the WHY-submission /
//! notification lifecycle endpoints using [`reqwest`]. Mutating calls
//! validate their payloads against the `attest-core` rules before sending.

use attest_core::types::DbId;

use crate::config::ClientConfig;
use crate::error::WhyApiError;
use crate::payloads::{
    AccessTierResponse, CreateSubmissionRequest, CreateSubmissionResponse,
    CreateTextSubmissionRequest, SmsSubmissionRequest, SubmissionEnvelope,
    UpdateNotificationRequest, UpdateSubmissionRequest, VerificationsResponse, WhyNotification,
    WhySubmission,
};

/// HTTP client for a single Attest API server.
pub struct WhyApi {
    client: reqwest::Client,
    base_url: String,
}

impl WhyApi {
    /// Create a new client for the given base URL, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling or a pre-configured timeout).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Create a client from environment-driven configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, WhyApiError> {
        let client = config.build_client()?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- verification reads ----

    /// Fetch a user's access tier.
    ///
    /// Sends `GET /api/users/{id}/access-tier`.
    pub async fn access_tier(&self, user_id: DbId) -> Result<AccessTierResponse, WhyApiError> {
        let response = self
            .client
            .get(format!("{}/api/users/{}/access-tier", self.base_url, user_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a user's verification records and per-method membership lists.
    ///
    /// Sends `GET /api/users/{id}/verifications`.
    pub async fn verifications(&self, user_id: DbId) -> Result<VerificationsResponse, WhyApiError> {
        let response = self
            .client
            .get(format!("{}/api/users/{}/verifications", self.base_url, user_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- submission lifecycle ----

    /// Create a WHY submission through the form channel.
    ///
    /// Sends `POST /api/users/{id}/why-submissions`. The response carries
    /// both the submission and the notification raised for it.
    pub async fn create_submission(
        &self,
        user_id: DbId,
        request: &CreateSubmissionRequest,
    ) -> Result<CreateSubmissionResponse, WhyApiError> {
        request.validate()?;

        let response = self
            .client
            .post(format!("{}/api/users/{}/why-submissions", self.base_url, user_id))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a WHY submission through the quick-text channel.
    ///
    /// Sends `POST /api/users/{id}/why-submissions/text`.
    pub async fn create_text_submission(
        &self,
        user_id: DbId,
        request: &CreateTextSubmissionRequest,
    ) -> Result<SubmissionEnvelope, WhyApiError> {
        request.validate()?;

        let response = self
            .client
            .post(format!(
                "{}/api/users/{}/why-submissions/text",
                self.base_url, user_id
            ))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Create a WHY submission from an inbound SMS. The user is resolved
    /// server-side from the phone number.
    ///
    /// Sends `POST /api/why-submissions/sms`.
    pub async fn create_sms_submission(
        &self,
        request: &SmsSubmissionRequest,
    ) -> Result<SubmissionEnvelope, WhyApiError> {
        request.validate()?;

        let response = self
            .client
            .post(format!("{}/api/why-submissions/sms", self.base_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List a user's WHY submissions.
    ///
    /// Sends `GET /api/users/{id}/why-submissions`.
    pub async fn list_submissions(&self, user_id: DbId) -> Result<Vec<WhySubmission>, WhyApiError> {
        let response = self
            .client
            .get(format!("{}/api/users/{}/why-submissions", self.base_url, user_id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Update a submission's status (and the fields paired with it).
    ///
    /// Sends `PATCH /api/why-submissions/{id}`. Fails fast with a
    /// [`WhyApiError::Validation`] if the status/field pairing is invalid.
    pub async fn update_submission(
        &self,
        submission_id: DbId,
        request: &UpdateSubmissionRequest,
    ) -> Result<WhySubmission, WhyApiError> {
        request.validate()?;

        let response = self
            .client
            .patch(format!("{}/api/why-submissions/{}", self.base_url, submission_id))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- notifications ----

    /// List a user's WHY notifications.
    ///
    /// Sends `GET /api/users/{id}/why-notifications`.
    pub async fn list_notifications(
        &self,
        user_id: DbId,
    ) -> Result<Vec<WhyNotification>, WhyApiError> {
        let response = self
            .client
            .get(format!(
                "{}/api/users/{}/why-notifications",
                self.base_url, user_id
            ))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Update a notification's status. Marking READ sets `readAt`
    /// server-side.
    ///
    /// Sends `PATCH /api/why-notifications/{id}`.
    pub async fn update_notification(
        &self,
        notification_id: DbId,
        request: &UpdateNotificationRequest,
    ) -> Result<WhyNotification, WhyApiError> {
        request.validate()?;

        let response = self
            .client
            .patch(format!(
                "{}/api/why-notifications/{}",
                self.base_url, notification_id
            ))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`WhyApiError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, WhyApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(WhyApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, WhyApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
