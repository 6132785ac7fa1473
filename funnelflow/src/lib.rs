//! # Funnelflow
//!
//! The engagement pipeline core for an event-organizer CRM.
//!
//! Funnelflow owns the rules-and-computation heart of the attendee
//! pipeline:
//!
//! - **Segment catalog**: the vocabulary of audience types and funnel
//!   stages, plus the likelihood lookup table for intake answers
//! - **Pipeline configuration**: per-event active stages, auto-advance
//!   trigger rules, and champion criteria, with pure validation
//! - **Transition engine**: evaluates form submissions, payment webhooks,
//!   and manual drags against the configuration
//! - **Champion evaluator**: engagement/tag thresholds with monotonic
//!   manual promotion
//! - **Outreach forecaster**: per-segment conversion math for attendance,
//!   revenue, and goal-achievement projections
//!
//! Everything else — persistence, CSV parsing, OAuth campaigns, page
//! rendering — lives in the host application. The core consumes and emits
//! plain records, synchronously, with no I/O of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use funnelflow::prelude::*;
//!
//! let config = PipelineConfig::official();
//! config.validate()?;
//!
//! let attendee = AttendeeRecord::intake(AudienceType::FriendsFamily);
//! let request = TransitionRequest::new(attendee.id, "form_rsvp");
//!
//! let outcome = apply_transition(&attendee, &request, &config)?;
//! assert!(outcome.applied);
//! # Ok::<(), funnelflow::FunnelError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod attendee;
pub mod catalog;
pub mod champion;
pub mod config;
pub mod errors;
pub mod forecast;
pub mod transition;

pub use errors::FunnelError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attendee::{AttendeeId, AttendeeRecord};
    pub use crate::catalog::{
        engagement_scale, likelihood_score, AudienceType, FunnelStage, StageId,
        TagId, TriggerId, OFFICIAL_AUDIENCES, OFFICIAL_STAGES,
    };
    pub use crate::champion::{evaluate_champion, promote_manually};
    pub use crate::config::{
        validate_config, ActiveStage, ChampionCriteria, ConfigWarning, PipelineConfig,
    };
    pub use crate::errors::{ConfigError, FunnelError, InvalidTransitionError};
    pub use crate::forecast::{
        forecast, Forecast, ForecastInputs, FundraisingGoals, SegmentPlan,
    };
    pub use crate::transition::{
        apply_transition, TransitionOutcome, TransitionReason, TransitionRequest,
    };
}
