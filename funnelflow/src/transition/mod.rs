//! Stage transitions.
//!
//! This module provides:
//! - Transition requests and structured outcomes
//! - The transition engine that evaluates requests against an event's
//!   pipeline configuration

mod engine;
mod outcome;

pub use engine::apply_transition;
pub use outcome::{
    TransitionOutcome, TransitionReason, TransitionRequest, MANUAL_DRAG,
};

mod scenario_tests;
