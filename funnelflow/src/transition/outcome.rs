//! Transition requests and outcomes.

use crate::attendee::{AttendeeId, AttendeeRecord};
use crate::catalog::{StageId, TriggerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trigger id used for manual drag-and-drop moves on the pipeline board.
pub const MANUAL_DRAG: &str = "manual_drag";

/// An ephemeral request to move a contact through the funnel.
///
/// Consumed once per [`apply_transition`](crate::transition::apply_transition)
/// call; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The record the request is for.
    pub attendee_id: AttendeeId,
    /// The external signal that produced the request.
    pub trigger: TriggerId,
    /// Explicit destination for manual moves. When set, trigger rules are
    /// bypassed entirely.
    #[serde(default)]
    pub target_stage: Option<StageId>,
}

impl TransitionRequest {
    /// Creates a trigger-driven request.
    #[must_use]
    pub fn new(attendee_id: AttendeeId, trigger: impl Into<TriggerId>) -> Self {
        Self {
            attendee_id,
            trigger: trigger.into(),
            target_stage: None,
        }
    }

    /// Creates a manual drag-and-drop request onto an explicit stage.
    #[must_use]
    pub fn manual(attendee_id: AttendeeId, target_stage: impl Into<StageId>) -> Self {
        Self {
            attendee_id,
            trigger: TriggerId::new(MANUAL_DRAG),
            target_stage: Some(target_stage.into()),
        }
    }
}

/// Why a transition was applied or declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionReason {
    /// An explicit manual move; automation rules were bypassed.
    ManualMove,
    /// A trigger rule matched and the contact moved forward.
    AutoAdvance,
    /// Payment confirmation landed the contact on the payment stage from
    /// a later position; the regression guard was bypassed.
    PaymentOverride,
    /// A manual move targeted the stage the contact is already at.
    AlreadyAtStage,
    /// The resolved stage is at or behind the contact's current position.
    NoRegression,
    /// No auto-advance rule mentions the trigger.
    UnrecognizedTrigger,
}

impl fmt::Display for TransitionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualMove => write!(f, "manual_move"),
            Self::AutoAdvance => write!(f, "auto_advance"),
            Self::PaymentOverride => write!(f, "payment_override"),
            Self::AlreadyAtStage => write!(f, "already_at_stage"),
            Self::NoRegression => write!(f, "no_regression"),
            Self::UnrecognizedTrigger => write!(f, "unrecognized_trigger"),
        }
    }
}

/// The result of evaluating a transition request.
///
/// `attendee` is the updated copy of the record; the caller is responsible
/// for persisting it atomically. Declined transitions carry the unchanged
/// record with `applied: false` — they are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    /// The (possibly updated) attendee record.
    pub attendee: AttendeeRecord,
    /// Whether the stage actually changed.
    pub applied: bool,
    /// The reason code, for observability.
    pub reason: TransitionReason,
}

impl TransitionOutcome {
    /// An outcome whose stage change was applied.
    #[must_use]
    pub fn applied(attendee: AttendeeRecord, reason: TransitionReason) -> Self {
        Self {
            attendee,
            applied: true,
            reason,
        }
    }

    /// An outcome that left the record unchanged.
    #[must_use]
    pub fn noop(attendee: AttendeeRecord, reason: TransitionReason) -> Self {
        Self {
            attendee,
            applied: false,
            reason,
        }
    }
}
