//! Error types for the engagement pipeline core.
//!
//! Expected outcomes (a trigger that doesn't apply, a regression guard
//! firing) are *not* errors — they come back as
//! [`TransitionOutcome`](crate::transition::TransitionOutcome) values with
//! `applied: false`. The types here cover true faults: inconsistent
//! configuration and requests that reference vocabulary the event never
//! defined.

use crate::attendee::AttendeeId;
use crate::catalog::StageId;
use thiserror::Error;

/// The main error type for pipeline core operations.
#[derive(Debug, Clone, Error)]
pub enum FunnelError {
    /// A malformed or internally inconsistent configuration.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A transition request referencing vocabulary unknown to the config.
    #[error("{0}")]
    InvalidTransition(#[from] InvalidTransitionError),

    /// Manual champion promotion attempted while the event's criteria
    /// forbid it.
    #[error("manual champion promotion is not allowed by this event's criteria")]
    ManualOverrideDisabled,
}

/// Error raised when a `PipelineConfig` or `ForecastInputs` value is
/// malformed or internally inconsistent.
///
/// Never auto-corrected: validation reports the problem and leaves the
/// value untouched.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// The error message.
    pub message: String,
    /// The stages involved, if any.
    pub stages: Vec<StageId>,
}

impl ConfigError {
    /// Creates a new config error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stages: Vec::new(),
        }
    }

    /// Sets the stages involved.
    #[must_use]
    pub fn with_stages(mut self, stages: Vec<StageId>) -> Self {
        self.stages = stages;
        self
    }
}

/// Error raised when a transition request names a stage the event's
/// configuration does not include.
#[derive(Debug, Clone, Error)]
#[error("transition for attendee '{attendee}' targets stage '{stage}' which is not active for this event")]
pub struct InvalidTransitionError {
    /// The attendee the request was for.
    pub attendee: AttendeeId,
    /// The unknown stage.
    pub stage: StageId,
}

impl InvalidTransitionError {
    /// Creates a new invalid transition error.
    #[must_use]
    pub fn new(attendee: AttendeeId, stage: StageId) -> Self {
        Self { attendee, stage }
    }
}
