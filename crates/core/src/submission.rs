//! WHY-submission status constants, transition rules, and validation.
//!
//! A WHY submission is a user-authored explanation requested during a
//! verification workflow. It is created through one of three channels and
//! moves through a review lifecycle driven by status-update calls.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly created submission.
pub const STATUS_SUBMITTED: &str = "SUBMITTED";
/// A reviewer has picked up the submission.
pub const STATUS_REVIEWING: &str = "REVIEWING";
/// The submission was accepted and closed with a resolution.
pub const STATUS_RESOLVED: &str = "RESOLVED";
/// The submission was rejected.
pub const STATUS_REJECTED: &str = "REJECTED";

/// All valid submission statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_SUBMITTED,
    STATUS_REVIEWING,
    STATUS_RESOLVED,
    STATUS_REJECTED,
];

// ---------------------------------------------------------------------------
// Trigger types and submission methods
// ---------------------------------------------------------------------------

/// General inquiry trigger.
pub const TRIGGER_GENERAL: &str = "GENERAL";
/// Employment-verification gap trigger.
pub const TRIGGER_EMPLOYMENT_GAP: &str = "EMPLOYMENT_GAP";

/// All valid trigger types.
pub const VALID_TRIGGER_TYPES: &[&str] = &[TRIGGER_GENERAL, TRIGGER_EMPLOYMENT_GAP];

/// Submission entered through the full form.
pub const METHOD_FORM: &str = "FORM";
/// Submission entered through the quick-text path.
pub const METHOD_TEXT: &str = "TEXT";
/// Submission received over SMS.
pub const METHOD_SMS: &str = "SMS";

/// All valid submission methods.
pub const VALID_SUBMISSION_METHODS: &[&str] = &[METHOD_FORM, METHOD_TEXT, METHOD_SMS];

/// Maximum length for submission content (characters).
pub const MAX_CONTENT_LENGTH: usize = 4_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid submission status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate that a trigger type is one of the known values.
pub fn validate_trigger_type(trigger_type: &str) -> Result<(), CoreError> {
    if VALID_TRIGGER_TYPES.contains(&trigger_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid trigger type '{}'. Must be one of: {:?}",
            trigger_type, VALID_TRIGGER_TYPES
        )))
    }
}

/// Validate that a submission method is one of the known channels.
pub fn validate_submission_method(method: &str) -> Result<(), CoreError> {
    if VALID_SUBMISSION_METHODS.contains(&method) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid submission method '{}'. Must be one of: {:?}",
            method, VALID_SUBMISSION_METHODS
        )))
    }
}

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `SUBMITTED` -> `REVIEWING`, `REJECTED`
/// - `REVIEWING` -> `RESOLVED`, `REJECTED`
/// - `RESOLVED`  -> (terminal)
/// - `REJECTED`  -> (terminal)
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_SUBMITTED => &[STATUS_REVIEWING, STATUS_REJECTED],
        STATUS_REVIEWING => &[STATUS_RESOLVED, STATUS_REJECTED],
        _ => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot transition submission from '{}' to '{}'. Allowed transitions: {:?}",
            current, next, allowed
        )))
    }
}

/// Validate the field pairings required by a status update.
///
/// `REVIEWING` requires a reviewer id; `RESOLVED` requires non-empty
/// resolution text.
pub fn validate_update_fields(
    status: &str,
    reviewer_id: Option<DbId>,
    resolution: Option<&str>,
) -> Result<(), CoreError> {
    validate_status(status)?;

    if status == STATUS_REVIEWING && reviewer_id.is_none() {
        return Err(CoreError::Validation(
            "A reviewerId is required when moving a submission to REVIEWING".to_string(),
        ));
    }

    if status == STATUS_RESOLVED {
        let has_resolution = resolution.is_some_and(|r| !r.trim().is_empty());
        if !has_resolution {
            return Err(CoreError::Validation(
                "Resolution text is required when moving a submission to RESOLVED".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate submission content: non-empty after trimming, within the length
/// bound.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Submission content must not be empty".to_string(),
        ));
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Submission content exceeds maximum length of {} characters (got {})",
            MAX_CONTENT_LENGTH,
            content.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
