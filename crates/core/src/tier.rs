//! Access tier model.
//!
//! A user's verification completeness is summarised as one of three tiers.
//! The tier drives the progress indicator shown in the status view; an
//! unrecognized or absent tier falls back to the lowest tier rather than
//! failing the render.

use serde::{Deserialize, Serialize};

/// Wire value for the basic tier.
pub const TIER_BASIC: &str = "BASIC";
/// Wire value for the standard tier.
pub const TIER_STANDARD: &str = "STANDARD";
/// Wire value for the full tier.
pub const TIER_FULL: &str = "FULL";

/// Coarse verification completeness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessTier {
    Basic,
    Standard,
    Full,
}

impl AccessTier {
    /// Parse a wire tier value. Returns `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            TIER_BASIC => Some(Self::Basic),
            TIER_STANDARD => Some(Self::Standard),
            TIER_FULL => Some(Self::Full),
            _ => None,
        }
    }

    /// Parse a wire tier value, falling back to [`AccessTier::Basic`] for
    /// unrecognized input.
    pub fn parse_or_default(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::Basic)
    }

    /// Progress percentage for the tier progress bar.
    ///
    /// Basic → 33, Standard → 66, Full → 100.
    pub fn progress_percent(self) -> u8 {
        match self {
            Self::Basic => 33,
            Self::Standard => 66,
            Self::Full => 100,
        }
    }

    /// Human-readable tier label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Full => "Full",
        }
    }

    /// Wire value for the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => TIER_BASIC,
            Self::Standard => TIER_STANDARD,
            Self::Full => TIER_FULL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_parse_to_their_tier() {
        assert_eq!(AccessTier::parse("BASIC"), Some(AccessTier::Basic));
        assert_eq!(AccessTier::parse("STANDARD"), Some(AccessTier::Standard));
        assert_eq!(AccessTier::parse("FULL"), Some(AccessTier::Full));
    }

    #[test]
    fn unrecognized_tier_does_not_parse() {
        assert_eq!(AccessTier::parse("PLATINUM"), None);
        assert_eq!(AccessTier::parse("basic"), None);
        assert_eq!(AccessTier::parse(""), None);
    }

    #[test]
    fn unrecognized_tier_falls_back_to_basic() {
        assert_eq!(AccessTier::parse_or_default("PLATINUM"), AccessTier::Basic);
        assert_eq!(AccessTier::parse_or_default(""), AccessTier::Basic);
    }

    #[test]
    fn progress_percent_is_the_three_step_function() {
        assert_eq!(AccessTier::Basic.progress_percent(), 33);
        assert_eq!(AccessTier::Standard.progress_percent(), 66);
        assert_eq!(AccessTier::Full.progress_percent(), 100);
        // Fallback path: unrecognized tier reports the basic percentage.
        assert_eq!(AccessTier::parse_or_default("???").progress_percent(), 33);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for tier in [AccessTier::Basic, AccessTier::Standard, AccessTier::Full] {
            assert_eq!(AccessTier::parse(tier.as_str()), Some(tier));
        }
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&AccessTier::Standard).unwrap();
        assert_eq!(json, "\"STANDARD\"");
        let parsed: AccessTier = serde_json::from_str("\"FULL\"").unwrap();
        assert_eq!(parsed, AccessTier::Full);
    }
}
