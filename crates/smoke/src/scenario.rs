//! The sequential lifecycle scenario.
//!
//! Each step awaits its HTTP call before the next is issued; there is no
//! retry or compensation. Expectation failures and API failures both abort
//! the remainder of the run via `?`.

use attest_client::payloads::{
    CreateSubmissionRequest, CreateTextSubmissionRequest, SmsSubmissionRequest,
    UpdateNotificationRequest, UpdateSubmissionRequest,
};
use attest_client::{WhyApi, WhyApiError};
use attest_core::overview::OverviewState;
use attest_core::submission::{
    METHOD_FORM, STATUS_RESOLVED, STATUS_REVIEWING, TRIGGER_EMPLOYMENT_GAP, TRIGGER_GENERAL,
};
use attest_core::types::DbId;

/// Errors that abort the smoke run.
#[derive(Debug, thiserror::Error)]
pub enum SmokeError {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] WhyApiError),

    /// A response did not meet a scenario expectation.
    #[error("Check failed: {0}")]
    Check(String),
}

/// Scenario parameters loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// User whose submissions and notifications are exercised.
    pub user_id: DbId,
    /// Reviewer assigned during the REVIEWING transition.
    pub reviewer_id: DbId,
    /// Phone number for the SMS creation path.
    pub phone_number: String,
}

impl ScenarioConfig {
    /// Load scenario parameters from environment variables with defaults.
    ///
    /// | Env Var              | Default         |
    /// |----------------------|-----------------|
    /// | `SMOKE_USER_ID`      | `1`             |
    /// | `SMOKE_REVIEWER_ID`  | `2`             |
    /// | `SMOKE_PHONE_NUMBER` | `010-1234-5678` |
    pub fn from_env() -> Self {
        let user_id: DbId = std::env::var("SMOKE_USER_ID")
            .unwrap_or_else(|_| "1".into())
            .parse()
            .expect("SMOKE_USER_ID must be a valid i64");

        let reviewer_id: DbId = std::env::var("SMOKE_REVIEWER_ID")
            .unwrap_or_else(|_| "2".into())
            .parse()
            .expect("SMOKE_REVIEWER_ID must be a valid i64");

        let phone_number =
            std::env::var("SMOKE_PHONE_NUMBER").unwrap_or_else(|_| "010-1234-5678".into());

        Self {
            user_id,
            reviewer_id,
            phone_number,
        }
    }
}

/// Fail the run with a [`SmokeError::Check`] unless `condition` holds.
fn check(condition: bool, message: impl Into<String>) -> Result<(), SmokeError> {
    if condition {
        Ok(())
    } else {
        Err(SmokeError::Check(message.into()))
    }
}

/// Run the full scenario against a live server.
pub async fn run(api: &WhyApi, config: &ScenarioConfig) -> Result<(), SmokeError> {
    let user_id = config.user_id;

    // Status view read-back: both reads plus the derived overview.
    let tier = api.access_tier(user_id).await?;
    let verifications = api.verifications(user_id).await?;
    let overview = OverviewState::from_parts(Some(&tier.tier), Some(&verifications.status));
    check(!overview.is_loading(), "overview should be ready after both reads")?;
    tracing::info!(
        tier = %tier.tier,
        progress = overview.progress_percent().unwrap_or(0),
        label = overview.tier_label().unwrap_or("-"),
        "Status view read-back"
    );
    if let OverviewState::Ready(overview) = &overview {
        for (method, status) in overview.methods.iter() {
            tracing::info!(method = method.as_str(), status = status.as_str(), "Method status");
        }
    }

    // Step 1: create a submission through the form channel.
    let created = api
        .create_submission(
            user_id,
            &CreateSubmissionRequest {
                trigger_type: TRIGGER_GENERAL.to_string(),
                submission_method: METHOD_FORM.to_string(),
                content: "I made several large transfers to family overseas.".to_string(),
            },
        )
        .await?;
    let submission_id = created.submission.id;
    let notification_id = created.notification.id;
    check(
        created.submission.status != STATUS_RESOLVED,
        "a new submission must not start RESOLVED",
    )?;
    tracing::info!(
        submission_id,
        notification_id,
        status = %created.submission.status,
        "Created form submission"
    );

    // Step 2: create a submission through the quick-text channel.
    let text_created = api
        .create_text_submission(
            user_id,
            &CreateTextSubmissionRequest {
                trigger_type: TRIGGER_EMPLOYMENT_GAP.to_string(),
                content: "Between contracts from January to March.".to_string(),
            },
        )
        .await?;
    tracing::info!(submission_id = text_created.submission.id, "Created text submission");

    // Step 3: create a submission over SMS, identified by phone number.
    let sms_created = api
        .create_sms_submission(&SmsSubmissionRequest {
            phone_number: config.phone_number.clone(),
            content: "Replying by SMS as requested.".to_string(),
        })
        .await?;
    tracing::info!(submission_id = sms_created.submission.id, "Created SMS submission");

    // Step 4: the list must contain the submission from step 1.
    let submissions = api.list_submissions(user_id).await?;
    check(
        submissions.iter().any(|s| s.id == submission_id),
        format!("submission {submission_id} should appear in the user's list"),
    )?;
    tracing::info!(count = submissions.len(), "Listed submissions");

    // Step 5: move the submission to REVIEWING under a reviewer.
    let reviewing = api
        .update_submission(
            submission_id,
            &UpdateSubmissionRequest::reviewing(config.reviewer_id),
        )
        .await?;
    check(
        reviewing.status == STATUS_REVIEWING,
        format!("expected status REVIEWING, got '{}'", reviewing.status),
    )?;
    tracing::info!(submission_id, reviewer_id = config.reviewer_id, "Submission under review");

    // Step 6: resolve it; the resolution text must be echoed back exactly.
    let resolution_text = "Transfers verified against bank statements.";
    let resolved = api
        .update_submission(submission_id, &UpdateSubmissionRequest::resolved(resolution_text))
        .await?;
    check(
        resolved.status == STATUS_RESOLVED,
        format!("expected status RESOLVED, got '{}'", resolved.status),
    )?;
    check(
        resolved.resolution.as_deref() == Some(resolution_text),
        "resolution text should be echoed back exactly",
    )?;
    tracing::info!(submission_id, "Submission resolved");

    // Step 7: the notification from step 1 must be listed for the user.
    let notifications = api.list_notifications(user_id).await?;
    check(
        notifications.iter().any(|n| n.id == notification_id),
        format!("notification {notification_id} should appear in the user's list"),
    )?;
    tracing::info!(count = notifications.len(), "Listed notifications");

    // Step 8: mark the notification read; readAt must come back populated.
    let read = api
        .update_notification(notification_id, &UpdateNotificationRequest::read())
        .await?;
    check(read.is_read(), "notification should report READ")?;
    check(
        read.read_at.is_some(),
        "readAt must be populated on the READ transition",
    )?;
    tracing::info!(notification_id, read_at = ?read.read_at, "Notification read");

    Ok(())
}
