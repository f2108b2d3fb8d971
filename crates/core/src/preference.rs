//! Versioned record for the promotional-widget dismissal preference.
//!
//! Replaces the bare browser boolean with an explicit record carrying a
//! schema version and dismissal time, so stored preferences can be migrated
//! or expired later. Storage itself lives with the embedding application;
//! this module only defines the serialization contract.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Current schema version for [`WidgetDismissal`].
pub const DISMISSAL_VERSION: u32 = 1;

/// User preference recording that the promotional widget was dismissed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDismissal {
    pub version: u32,
    pub dismissed: bool,
    pub dismissed_at: Option<Timestamp>,
}

impl WidgetDismissal {
    /// Record a dismissal at the given time.
    pub fn dismiss_at(now: Timestamp) -> Self {
        Self {
            version: DISMISSAL_VERSION,
            dismissed: true,
            dismissed_at: Some(now),
        }
    }

    /// The default, not-dismissed record.
    pub fn not_dismissed() -> Self {
        Self {
            version: DISMISSAL_VERSION,
            dismissed: false,
            dismissed_at: None,
        }
    }

    /// Migrate from the legacy unversioned boolean flag. The legacy flag
    /// carried no timestamp.
    pub fn from_legacy_flag(dismissed: bool) -> Self {
        Self {
            version: DISMISSAL_VERSION,
            dismissed,
            dismissed_at: None,
        }
    }

    /// Whether the record is at the current schema version.
    pub fn is_current(&self) -> bool {
        self.version == DISMISSAL_VERSION
    }

    /// Effective dismissal state. Records from an unknown schema version are
    /// treated as not dismissed so the widget re-prompts instead of staying
    /// hidden on stale data.
    pub fn is_dismissed(&self) -> bool {
        self.is_current() && self.dismissed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dismissal_stamps_time_and_version() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let record = WidgetDismissal::dismiss_at(now);
        assert!(record.is_dismissed());
        assert_eq!(record.version, DISMISSAL_VERSION);
        assert_eq!(record.dismissed_at, Some(now));
    }

    #[test]
    fn default_record_is_not_dismissed() {
        assert!(!WidgetDismissal::not_dismissed().is_dismissed());
    }

    #[test]
    fn legacy_flag_migrates_without_timestamp() {
        let record = WidgetDismissal::from_legacy_flag(true);
        assert!(record.is_dismissed());
        assert_eq!(record.dismissed_at, None);
        assert!(record.is_current());
    }

    #[test]
    fn unknown_version_is_treated_as_not_dismissed() {
        let record = WidgetDismissal {
            version: DISMISSAL_VERSION + 1,
            dismissed: true,
            dismissed_at: None,
        };
        assert!(!record.is_dismissed());
    }

    #[test]
    fn serde_round_trip_preserves_the_record() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let record = WidgetDismissal::dismiss_at(now);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: WidgetDismissal = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
