//! WHY-notification status constants and transition rules.
//!
//! One notification accompanies each WHY submission. Its only mutation is the
//! UNREAD → READ transition, which stamps `readAt` server-side exactly once.

use crate::error::CoreError;

/// Initial status for a newly created notification.
pub const STATUS_UNREAD: &str = "UNREAD";
/// The notification has been read.
pub const STATUS_READ: &str = "READ";

/// All valid notification statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_UNREAD, STATUS_READ];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid notification status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
///
/// `UNREAD` may move to `READ`; `READ` is terminal.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    validate_status(current)?;
    validate_status(next)?;

    if current == STATUS_UNREAD && next == STATUS_READ {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Cannot transition notification from '{current}' to '{next}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_statuses_are_valid() {
        assert!(validate_status(STATUS_UNREAD).is_ok());
        assert!(validate_status(STATUS_READ).is_ok());
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("SEEN").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn unread_can_move_to_read() {
        assert!(validate_transition(STATUS_UNREAD, STATUS_READ).is_ok());
    }

    #[test]
    fn read_is_terminal() {
        assert!(validate_transition(STATUS_READ, STATUS_UNREAD).is_err());
        assert!(validate_transition(STATUS_READ, STATUS_READ).is_err());
    }

    #[test]
    fn self_transition_from_unread_is_rejected() {
        assert!(validate_transition(STATUS_UNREAD, STATUS_UNREAD).is_err());
    }
}
