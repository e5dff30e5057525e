//! Support status of a household member at a point in the projection

use serde::{Deserialize, Serialize};

/// Where a person sits in the benefit lifecycle.
///
/// Transitions are date-triggered and only move forward:
/// `PreClaim -> Own -> OwnAndSpousal -> Survivor -> Deceased`. Single-person
/// households skip the spousal and survivor states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SupportStatus {
    /// Has not yet reached the claim date
    PreClaim,
    /// Drawing own retirement benefit only
    Own,
    /// Own benefit plus a spousal supplement
    OwnAndSpousal,
    /// Spouse has died; drawing the higher of own and survivor benefit
    Survivor,
    /// Past own end-of-life month
    Deceased,
}

impl SupportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportStatus::PreClaim => "Pre-claim",
            SupportStatus::Own => "Own",
            SupportStatus::OwnAndSpousal => "Own+Spousal",
            SupportStatus::Survivor => "Survivor",
            SupportStatus::Deceased => "Deceased",
        }
    }
}
