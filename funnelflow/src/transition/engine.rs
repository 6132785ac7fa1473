//! The transition engine.
//!
//! Evaluates one [`TransitionRequest`] against one event's
//! [`PipelineConfig`] and produces the contact's new stage, a structured
//! no-op, or an error. Pure over its arguments: racing callers are
//! serialized by the host at the persistence boundary, and the engine's
//! idempotence (re-applying a trigger to an already-advanced record is a
//! no-op) is what makes retries safe there.

use crate::attendee::AttendeeRecord;
use crate::catalog::FunnelStage;
use crate::config::{ActiveStage, PipelineConfig};
use crate::errors::{ConfigError, FunnelError, InvalidTransitionError};
use crate::transition::{TransitionOutcome, TransitionReason, TransitionRequest};

/// Applies a transition request to an attendee record.
///
/// Manual moves (`request.target_stage` set) always apply regardless of
/// trigger rules. Trigger-driven requests advance the contact onto the
/// stage whose rule mentions the trigger, guarded against regression;
/// the payment stage is exempt from that guard since payment can precede
/// an explicit RSVP.
///
/// # Errors
///
/// - [`FunnelError::Config`] when the request is for a different record or
///   the record's current stage is not active for this event.
/// - [`FunnelError::InvalidTransition`] when a manual move targets a stage
///   the config does not include.
pub fn apply_transition(
    attendee: &AttendeeRecord,
    request: &TransitionRequest,
    config: &PipelineConfig,
) -> Result<TransitionOutcome, FunnelError> {
    if request.attendee_id != attendee.id {
        return Err(ConfigError::new(format!(
            "transition request for attendee '{}' was applied to record '{}'",
            request.attendee_id, attendee.id
        ))
        .into());
    }

    let current = config.active_stage(&attendee.current_stage).ok_or_else(|| {
        ConfigError::new(format!(
            "attendee '{}' is at stage '{}' which is not active for this event",
            attendee.id, attendee.current_stage
        ))
        .with_stages(vec![attendee.current_stage.clone()])
    })?;

    // Manual drag-and-drop bypasses automation entirely.
    if let Some(target) = &request.target_stage {
        let Some(candidate) = config.active_stage(target) else {
            return Err(InvalidTransitionError::new(attendee.id, target.clone()).into());
        };
        if candidate.id == attendee.current_stage {
            return Ok(TransitionOutcome::noop(
                attendee.clone(),
                TransitionReason::AlreadyAtStage,
            ));
        }
        tracing::debug!(
            attendee = %attendee.id,
            from = %attendee.current_stage,
            to = %candidate.id,
            "manual move applied"
        );
        return Ok(TransitionOutcome::applied(
            move_to(attendee, candidate),
            TransitionReason::ManualMove,
        ));
    }

    let Some(candidate) = config.stage_for_trigger(&request.trigger) else {
        tracing::debug!(
            attendee = %attendee.id,
            trigger = %request.trigger,
            "no auto-advance rule for trigger"
        );
        return Ok(TransitionOutcome::noop(
            attendee.clone(),
            TransitionReason::UnrecognizedTrigger,
        ));
    };

    if current.ordinal >= candidate.ordinal {
        // Payment confirmation lands on the payment stage even from a
        // later position; an exact re-fire stays a no-op.
        if candidate.payment && candidate.id != attendee.current_stage {
            tracing::debug!(
                attendee = %attendee.id,
                from = %attendee.current_stage,
                to = %candidate.id,
                "payment override applied"
            );
            return Ok(TransitionOutcome::applied(
                move_to(attendee, candidate),
                TransitionReason::PaymentOverride,
            ));
        }
        tracing::debug!(
            attendee = %attendee.id,
            stage = %attendee.current_stage,
            trigger = %request.trigger,
            "regression guard declined trigger"
        );
        return Ok(TransitionOutcome::noop(
            attendee.clone(),
            TransitionReason::NoRegression,
        ));
    }

    tracing::debug!(
        attendee = %attendee.id,
        from = %attendee.current_stage,
        to = %candidate.id,
        trigger = %request.trigger,
        "auto-advance applied"
    );
    Ok(TransitionOutcome::applied(
        move_to(attendee, candidate),
        TransitionReason::AutoAdvance,
    ))
}

fn move_to(attendee: &AttendeeRecord, stage: &ActiveStage) -> AttendeeRecord {
    let mut updated = attendee.clone();
    updated.current_stage = stage.id.clone();
    if stage.id == FunnelStage::Attended.stage_id() {
        updated.attended = true;
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AudienceType;
    use crate::catalog::StageId;
    use pretty_assertions::assert_eq;

    fn attendee_at(stage: &str) -> AttendeeRecord {
        AttendeeRecord::new(AudienceType::FriendsFamily, StageId::new(stage))
    }

    #[test]
    fn test_auto_advance_forward() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("in_funnel");
        let request = TransitionRequest::new(attendee.id, "form_rsvp");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::AutoAdvance);
        assert_eq!(outcome.attendee.current_stage, StageId::new("rsvped"));
    }

    #[test]
    fn test_regression_guard_declines_stale_trigger() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("paid");
        let request = TransitionRequest::new(attendee.id, "form_rsvp");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(!outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::NoRegression);
        assert_eq!(outcome.attendee, attendee);
    }

    #[test]
    fn test_unrecognized_trigger_is_noop() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("in_funnel");
        let request = TransitionRequest::new(attendee.id, "carrier_pigeon");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(!outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::UnrecognizedTrigger);
    }

    #[test]
    fn test_manual_move_bypasses_rules() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("attended");
        let request = TransitionRequest::manual(attendee.id, "in_funnel");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::ManualMove);
        assert_eq!(outcome.attendee.current_stage, StageId::new("in_funnel"));
    }

    #[test]
    fn test_manual_move_to_current_stage_is_noop() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("rsvped");
        let request = TransitionRequest::manual(attendee.id, "rsvped");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(!outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::AlreadyAtStage);
    }

    #[test]
    fn test_manual_move_to_unknown_stage_is_invalid() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("rsvped");
        let request = TransitionRequest::manual(attendee.id, "vip_dinner");

        let err = apply_transition(&attendee, &request, &config).unwrap_err();
        assert!(matches!(err, FunnelError::InvalidTransition(_)));
    }

    #[test]
    fn test_payment_overrides_regression_guard() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("attended");
        let request = TransitionRequest::new(attendee.id, "stripe_webhook");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::PaymentOverride);
        assert_eq!(outcome.attendee.current_stage, StageId::new("paid"));
    }

    #[test]
    fn test_payment_refire_at_payment_stage_is_noop() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("paid");
        let request = TransitionRequest::new(attendee.id, "stripe_webhook");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(!outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::NoRegression);
        assert_eq!(outcome.attendee, attendee);
    }

    #[test]
    fn test_payment_skips_intermediate_stages() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("in_funnel");
        let request = TransitionRequest::new(attendee.id, "stripe_webhook");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::AutoAdvance);
        assert_eq!(outcome.attendee.current_stage, StageId::new("paid"));
    }

    #[test]
    fn test_landing_on_attended_sets_flag() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("paid");
        let request = TransitionRequest::manual(attendee.id, "attended");

        let outcome = apply_transition(&attendee, &request, &config).unwrap();
        assert!(outcome.attendee.attended);
    }

    #[test]
    fn test_mismatched_attendee_id_is_config_error() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("in_funnel");
        let other = attendee_at("in_funnel");
        let request = TransitionRequest::new(other.id, "form_rsvp");

        let err = apply_transition(&attendee, &request, &config).unwrap_err();
        assert!(matches!(err, FunnelError::Config(_)));
    }

    #[test]
    fn test_inactive_current_stage_is_config_error() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("vip_dinner");
        let request = TransitionRequest::new(attendee.id, "form_rsvp");

        let err = apply_transition(&attendee, &request, &config).unwrap_err();
        assert!(matches!(err, FunnelError::Config(_)));
    }

    #[test]
    fn test_idempotent_reapplication() {
        let config = PipelineConfig::official();
        let attendee = attendee_at("in_funnel");
        let request = TransitionRequest::new(attendee.id, "form_rsvp");

        let once = apply_transition(&attendee, &request, &config).unwrap();
        let twice = apply_transition(&once.attendee, &request, &config).unwrap();

        assert!(!twice.applied);
        assert_eq!(twice.attendee.current_stage, once.attendee.current_stage);
    }
}
