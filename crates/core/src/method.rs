//! Verification method catalog and per-method status resolution.
//!
//! The server reports verification state as three membership lists
//! (`verifiedMethods`, `pendingMethods`, `rejectedMethods`). Each of the four
//! supported methods resolves to a single [`MethodStatus`] with precedence
//! verified > pending > rejected > none. [`MethodStatusMap`] computes that
//! projection once so callers never re-scan the lists.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Method catalog
// ---------------------------------------------------------------------------

/// One of the four supported identity-proofing channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationMethod {
    PrepaidCard,
    GovernmentId,
    UtilityBill,
    PhoneNumber,
}

impl VerificationMethod {
    /// The fixed method catalog, in display order.
    pub const ALL: [VerificationMethod; 4] = [
        VerificationMethod::PrepaidCard,
        VerificationMethod::GovernmentId,
        VerificationMethod::UtilityBill,
        VerificationMethod::PhoneNumber,
    ];

    /// Wire name for the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrepaidCard => "PREPAID_CARD",
            Self::GovernmentId => "GOVERNMENT_ID",
            Self::UtilityBill => "UTILITY_BILL",
            Self::PhoneNumber => "PHONE_NUMBER",
        }
    }

    /// Parse a wire method name. Returns `None` for anything outside the
    /// catalog.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PREPAID_CARD" => Some(Self::PrepaidCard),
            "GOVERNMENT_ID" => Some(Self::GovernmentId),
            "UTILITY_BILL" => Some(Self::UtilityBill),
            "PHONE_NUMBER" => Some(Self::PhoneNumber),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-method status
// ---------------------------------------------------------------------------

/// Resolved verification status for a single method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodStatus {
    Verified,
    Pending,
    Rejected,
    None,
}

impl MethodStatus {
    /// Display value for the method status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
            Self::None => "none",
        }
    }
}

/// The three server-provided membership lists, as returned by
/// `GET /api/users/{id}/verifications` under the `status` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodStatusSets {
    #[serde(default)]
    pub verified_methods: Vec<String>,
    #[serde(default)]
    pub pending_methods: Vec<String>,
    #[serde(default)]
    pub rejected_methods: Vec<String>,
}

impl MethodStatusSets {
    /// Resolve the status of one method.
    ///
    /// Precedence is verified > pending > rejected > none. A method should
    /// never appear in more than one list, but when it does the resolution
    /// stays deterministic.
    pub fn resolve(&self, method: VerificationMethod) -> MethodStatus {
        let name = method.as_str();
        if self.verified_methods.iter().any(|m| m == name) {
            MethodStatus::Verified
        } else if self.pending_methods.iter().any(|m| m == name) {
            MethodStatus::Pending
        } else if self.rejected_methods.iter().any(|m| m == name) {
            MethodStatus::Rejected
        } else {
            MethodStatus::None
        }
    }
}

// ---------------------------------------------------------------------------
// Once-computed status map
// ---------------------------------------------------------------------------

/// Status for every method in the catalog, computed once from the membership
/// lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodStatusMap {
    statuses: [MethodStatus; 4],
}

impl MethodStatusMap {
    /// Project the membership lists onto the full catalog.
    pub fn from_sets(sets: &MethodStatusSets) -> Self {
        Self {
            statuses: VerificationMethod::ALL.map(|m| sets.resolve(m)),
        }
    }

    /// Status of one method. Total over the catalog.
    ///
    /// `ALL` lists the variants in declaration order, so the discriminant
    /// doubles as the index.
    pub fn get(&self, method: VerificationMethod) -> MethodStatus {
        self.statuses[method as usize]
    }

    /// Iterate `(method, status)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (VerificationMethod, MethodStatus)> + '_ {
        VerificationMethod::ALL
            .iter()
            .zip(self.statuses.iter())
            .map(|(m, s)| (*m, *s))
    }

    /// Number of methods currently verified.
    pub fn verified_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| **s == MethodStatus::Verified)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(verified: &[&str], pending: &[&str], rejected: &[&str]) -> MethodStatusSets {
        MethodStatusSets {
            verified_methods: verified.iter().map(|s| s.to_string()).collect(),
            pending_methods: pending.iter().map(|s| s.to_string()).collect(),
            rejected_methods: rejected.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn absent_method_resolves_to_none() {
        let sets = sets(&[], &[], &[]);
        for method in VerificationMethod::ALL {
            assert_eq!(sets.resolve(method), MethodStatus::None);
        }
    }

    #[test]
    fn each_list_resolves_to_its_status() {
        let sets = sets(&["PREPAID_CARD"], &["GOVERNMENT_ID"], &["UTILITY_BILL"]);
        assert_eq!(
            sets.resolve(VerificationMethod::PrepaidCard),
            MethodStatus::Verified
        );
        assert_eq!(
            sets.resolve(VerificationMethod::GovernmentId),
            MethodStatus::Pending
        );
        assert_eq!(
            sets.resolve(VerificationMethod::UtilityBill),
            MethodStatus::Rejected
        );
        assert_eq!(
            sets.resolve(VerificationMethod::PhoneNumber),
            MethodStatus::None
        );
    }

    #[test]
    fn verified_wins_over_pending_and_rejected() {
        let sets = sets(&["PHONE_NUMBER"], &["PHONE_NUMBER"], &["PHONE_NUMBER"]);
        assert_eq!(
            sets.resolve(VerificationMethod::PhoneNumber),
            MethodStatus::Verified
        );
    }

    #[test]
    fn pending_wins_over_rejected() {
        let sets = sets(&[], &["GOVERNMENT_ID"], &["GOVERNMENT_ID"]);
        assert_eq!(
            sets.resolve(VerificationMethod::GovernmentId),
            MethodStatus::Pending
        );
    }

    #[test]
    fn map_covers_the_whole_catalog() {
        let map = MethodStatusMap::from_sets(&sets(&["PREPAID_CARD"], &[], &[]));
        let collected: Vec<_> = map.iter().collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(
            map.get(VerificationMethod::PrepaidCard),
            MethodStatus::Verified
        );
        assert_eq!(map.get(VerificationMethod::PhoneNumber), MethodStatus::None);
    }

    #[test]
    fn verified_count_counts_only_verified() {
        let map = MethodStatusMap::from_sets(&sets(
            &["PREPAID_CARD", "UTILITY_BILL"],
            &["GOVERNMENT_ID"],
            &[],
        ));
        assert_eq!(map.verified_count(), 2);
    }

    #[test]
    fn unknown_names_in_lists_are_ignored() {
        let sets = sets(&["DNA_SAMPLE"], &[], &[]);
        for method in VerificationMethod::ALL {
            assert_eq!(sets.resolve(method), MethodStatus::None);
        }
    }

    #[test]
    fn membership_lists_deserialize_from_camel_case() {
        let json = r#"{
            "verifiedMethods": ["PREPAID_CARD"],
            "pendingMethods": [],
            "rejectedMethods": ["PHONE_NUMBER"]
        }"#;
        let sets: MethodStatusSets = serde_json::from_str(json).unwrap();
        assert_eq!(
            sets.resolve(VerificationMethod::PrepaidCard),
            MethodStatus::Verified
        );
        assert_eq!(
            sets.resolve(VerificationMethod::PhoneNumber),
            MethodStatus::Rejected
        );
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let sets: MethodStatusSets = serde_json::from_str("{}").unwrap();
        assert_eq!(
            sets.resolve(VerificationMethod::PrepaidCard),
            MethodStatus::None
        );
    }
}
