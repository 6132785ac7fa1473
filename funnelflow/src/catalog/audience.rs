//! Audience type catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The acquisition channel/relationship category a contact belongs to
/// for a given event.
///
/// Catalog entries are fixed: they are never created or destroyed at
/// runtime, only referenced by records, configs, and forecasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudienceType {
    /// Members of the organizing group itself.
    OrgMembers,
    /// Personal networks of the organizers.
    FriendsFamily,
    /// Partner organizations in the community.
    CommunityPartners,
    /// Local businesses approached for sponsorship.
    BusinessSponsor,
    /// High-value advocates promoted from any other segment.
    Champions,
}

/// Every audience type, in catalog order.
pub const OFFICIAL_AUDIENCES: &[AudienceType] = &[
    AudienceType::OrgMembers,
    AudienceType::FriendsFamily,
    AudienceType::CommunityPartners,
    AudienceType::BusinessSponsor,
    AudienceType::Champions,
];

impl AudienceType {
    /// Returns the snake_case id used in persisted records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrgMembers => "org_members",
            Self::FriendsFamily => "friends_family",
            Self::CommunityPartners => "community_partners",
            Self::BusinessSponsor => "business_sponsor",
            Self::Champions => "champions",
        }
    }

    /// Returns the human-readable label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OrgMembers => "Org Members",
            Self::FriendsFamily => "Friends & Family",
            Self::CommunityPartners => "Community Partners",
            Self::BusinessSponsor => "Business Sponsors",
            Self::Champions => "Champions",
        }
    }
}

impl fmt::Display for AudienceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
