//! Funnel stage catalog.

use crate::catalog::StageId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's progress state toward attendance.
///
/// This is the default vocabulary only. An event's pipeline configuration
/// may redefine its active stage set, and all ordering comes from the
/// configuration's explicit ordinals — nothing in the engine depends on
/// the declaration order of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    /// Known to the organizers but not yet contacted for this event.
    InFunnel,
    /// Reached by broadcast outreach (social post, newsletter).
    GeneralAwareness,
    /// Received a personal invitation.
    PersonalInvite,
    /// Replied with interest on an intake form.
    ExpressedInterest,
    /// Submitted an RSVP.
    Rsvped,
    /// Payment confirmed.
    Paid,
    /// Checked in at the event.
    Attended,
}

/// Every funnel stage in the default intake-to-attendance order.
pub const OFFICIAL_STAGES: &[FunnelStage] = &[
    FunnelStage::InFunnel,
    FunnelStage::GeneralAwareness,
    FunnelStage::PersonalInvite,
    FunnelStage::ExpressedInterest,
    FunnelStage::Rsvped,
    FunnelStage::Paid,
    FunnelStage::Attended,
];

impl FunnelStage {
    /// Returns the snake_case id used in persisted records and configs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InFunnel => "in_funnel",
            Self::GeneralAwareness => "general_awareness",
            Self::PersonalInvite => "personal_invite",
            Self::ExpressedInterest => "expressed_interest",
            Self::Rsvped => "rsvped",
            Self::Paid => "paid",
            Self::Attended => "attended",
        }
    }

    /// Returns the human-readable label shown on the pipeline board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InFunnel => "In Funnel",
            Self::GeneralAwareness => "General Awareness",
            Self::PersonalInvite => "Personal Invite",
            Self::ExpressedInterest => "Expressed Interest",
            Self::Rsvped => "RSVP'd",
            Self::Paid => "Paid",
            Self::Attended => "Attended",
        }
    }

    /// Returns the [`StageId`] for this catalog stage.
    #[must_use]
    pub fn stage_id(self) -> StageId {
        StageId::new(self.as_str())
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
