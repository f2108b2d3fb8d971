//! Loading-aware aggregation behind the verification status view.
//!
//! The status view issues two independent reads (access tier, per-method
//! verification state). Until both have landed the view must present an
//! explicit loading indication — never a default percentage or label.

use crate::method::{MethodStatusMap, MethodStatusSets};
use crate::tier::AccessTier;

/// Fully loaded status view data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOverview {
    pub tier: AccessTier,
    pub methods: MethodStatusMap,
}

impl VerificationOverview {
    /// Progress percentage for the tier progress bar.
    pub fn progress_percent(&self) -> u8 {
        self.tier.progress_percent()
    }

    /// Human-readable tier label.
    pub fn tier_label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Status view state: loading until both underlying reads have completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewState {
    Loading,
    Ready(VerificationOverview),
}

impl OverviewState {
    /// Build the view state from whatever has arrived so far.
    ///
    /// Returns [`OverviewState::Ready`] only once both the tier and the
    /// membership lists are present. An unrecognized tier value falls back to
    /// the basic tier rather than staying in loading forever.
    pub fn from_parts(tier: Option<&str>, sets: Option<&MethodStatusSets>) -> Self {
        match (tier, sets) {
            (Some(tier), Some(sets)) => Self::Ready(VerificationOverview {
                tier: AccessTier::parse_or_default(tier),
                methods: MethodStatusMap::from_sets(sets),
            }),
            _ => Self::Loading,
        }
    }

    /// Whether the view is still waiting on data.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Progress percentage, or `None` while loading.
    pub fn progress_percent(&self) -> Option<u8> {
        match self {
            Self::Loading => None,
            Self::Ready(overview) => Some(overview.progress_percent()),
        }
    }

    /// Tier label, or `None` while loading.
    pub fn tier_label(&self) -> Option<&'static str> {
        match self {
            Self::Loading => None,
            Self::Ready(overview) => Some(overview.tier_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{MethodStatus, VerificationMethod};
    use assert_matches::assert_matches;

    #[test]
    fn loading_until_both_parts_present() {
        let sets = MethodStatusSets::default();
        assert!(OverviewState::from_parts(None, None).is_loading());
        assert!(OverviewState::from_parts(Some("FULL"), None).is_loading());
        assert!(OverviewState::from_parts(None, Some(&sets)).is_loading());
        assert!(!OverviewState::from_parts(Some("FULL"), Some(&sets)).is_loading());
    }

    #[test]
    fn derived_values_are_none_while_loading() {
        let state = OverviewState::from_parts(Some("FULL"), None);
        assert_eq!(state.progress_percent(), None);
        assert_eq!(state.tier_label(), None);
    }

    #[test]
    fn derived_values_present_once_ready() {
        let sets = MethodStatusSets::default();
        for (tier, percent) in [("BASIC", 33), ("STANDARD", 66), ("FULL", 100)] {
            let state = OverviewState::from_parts(Some(tier), Some(&sets));
            assert_eq!(state.progress_percent(), Some(percent));
            assert!(state.tier_label().is_some());
        }
    }

    #[test]
    fn unrecognized_tier_becomes_ready_at_basic() {
        let sets = MethodStatusSets::default();
        let state = OverviewState::from_parts(Some("PLATINUM"), Some(&sets));
        assert_matches!(state, OverviewState::Ready(_));
        assert_eq!(state.progress_percent(), Some(33));
    }

    #[test]
    fn ready_state_carries_the_method_map() {
        let sets = MethodStatusSets {
            verified_methods: vec!["GOVERNMENT_ID".to_string()],
            ..Default::default()
        };
        let state = OverviewState::from_parts(Some("STANDARD"), Some(&sets));
        let OverviewState::Ready(overview) = state else {
            panic!("expected ready state");
        };
        assert_eq!(
            overview.methods.get(VerificationMethod::GovernmentId),
            MethodStatus::Verified
        );
        assert_eq!(overview.methods.verified_count(), 1);
    }
}
