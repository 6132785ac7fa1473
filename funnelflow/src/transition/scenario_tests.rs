//! End-to-end scenarios walking a contact through a configured pipeline.

#[cfg(test)]
mod tests {
    use crate::attendee::AttendeeRecord;
    use crate::catalog::{AudienceType, StageId, TagId};
    use crate::champion::{evaluate_champion, promote_manually};
    use crate::config::{ChampionCriteria, PipelineConfig};
    use crate::transition::{apply_transition, TransitionReason, TransitionRequest};
    use pretty_assertions::assert_eq;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("funnelflow=debug")
            .try_init();
    }

    fn short_pipeline() -> PipelineConfig {
        PipelineConfig::new()
            .with_stage("in_funnel")
            .with_stage("rsvped")
            .with_payment_stage("paid")
            .with_stage("attended")
            .with_rule("rsvped", ["form_rsvp"])
            .with_rule("paid", ["stripe_webhook"])
    }

    #[test]
    fn test_intake_to_paid_walkthrough() {
        init_tracing();
        let config = short_pipeline();
        config.validate().unwrap();

        let attendee = AttendeeRecord::new(AudienceType::OrgMembers, StageId::new("in_funnel"));

        // RSVP form advances out of the funnel.
        let rsvp = TransitionRequest::new(attendee.id, "form_rsvp");
        let outcome = apply_transition(&attendee, &rsvp, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.attendee.current_stage, StageId::new("rsvped"));

        // The same form submission again bounces off the guard.
        let again = apply_transition(&outcome.attendee, &rsvp, &config).unwrap();
        assert!(!again.applied);
        assert_eq!(again.reason, TransitionReason::NoRegression);

        // Payment webhook completes the conversion.
        let paid = TransitionRequest::new(attendee.id, "stripe_webhook");
        let outcome = apply_transition(&again.attendee, &paid, &config).unwrap();
        assert!(outcome.applied);
        assert_eq!(outcome.reason, TransitionReason::AutoAdvance);
        assert_eq!(outcome.attendee.current_stage, StageId::new("paid"));
    }

    #[test]
    fn test_drag_race_then_webhook_retry() {
        init_tracing();
        let config = short_pipeline();

        let attendee = AttendeeRecord::new(AudienceType::FriendsFamily, StageId::new("rsvped"));

        // An organizer drags the card to attended before the webhook lands.
        let drag = TransitionRequest::manual(attendee.id, "attended");
        let dragged = apply_transition(&attendee, &drag, &config).unwrap();
        assert!(dragged.attendee.attended);

        // The late webhook pulls the card back to paid: the payment stage
        // is exempt from the regression guard.
        let webhook = TransitionRequest::new(attendee.id, "stripe_webhook");
        let paid = apply_transition(&dragged.attendee, &webhook, &config).unwrap();
        assert!(paid.applied);
        assert_eq!(paid.reason, TransitionReason::PaymentOverride);
        assert_eq!(paid.attendee.current_stage, StageId::new("paid"));
        // Attendance already recorded stays recorded.
        assert!(paid.attendee.attended);

        // A webhook retry is a clean no-op.
        let retried = apply_transition(&paid.attendee, &webhook, &config).unwrap();
        assert!(!retried.applied);
        assert_eq!(retried.attendee, paid.attendee);
    }

    #[test]
    fn test_champion_promotion_survives_engagement_drop() {
        let criteria = ChampionCriteria::new(7).with_tags_any(["advocate"]);

        let mut attendee = AttendeeRecord::new(AudienceType::CommunityPartners, StageId::new("in_funnel"))
            .with_engagement(3);
        assert!(!evaluate_champion(&attendee, &criteria));

        promote_manually(&mut attendee, &criteria).unwrap();
        assert!(evaluate_champion(&attendee, &criteria));

        // Later edits never demote a manual promotion.
        attendee.engagement_value = Some(0);
        attendee.tags.remove(&TagId::new("advocate"));
        assert!(evaluate_champion(&attendee, &criteria));
    }
}
