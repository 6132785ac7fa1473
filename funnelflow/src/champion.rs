//! Champion evaluation.
//!
//! A champion is a high-value advocate, either by meeting the event's
//! engagement and tag thresholds or by explicit manual promotion.
//! Champion status is monotonic: once promoted manually, a contact is
//! never automatically demoted.

use crate::attendee::AttendeeRecord;
use crate::config::ChampionCriteria;
use crate::errors::FunnelError;

/// Returns true if the contact currently qualifies as a champion.
///
/// Automatic qualification requires an engagement value at or above
/// `criteria.min_engagement` *and* at least one tag from
/// `criteria.tags_any`; an unknown engagement value never qualifies.
/// A prior manual promotion always qualifies, regardless of later
/// engagement or tag changes.
#[must_use]
pub fn evaluate_champion(attendee: &AttendeeRecord, criteria: &ChampionCriteria) -> bool {
    if attendee.champion_override {
        return true;
    }
    let engaged = attendee
        .engagement_value
        .is_some_and(|value| value >= criteria.min_engagement);
    engaged
        && attendee
            .tags
            .intersection(&criteria.tags_any)
            .next()
            .is_some()
}

/// Manually promotes a contact to champion.
///
/// Sets the record's override flag so that [`evaluate_champion`] returns
/// true on every subsequent call. Idempotent; the flag is never cleared
/// by the core.
///
/// # Errors
///
/// Returns [`FunnelError::ManualOverrideDisabled`] when the event's
/// criteria forbid manual promotion.
pub fn promote_manually(
    attendee: &mut AttendeeRecord,
    criteria: &ChampionCriteria,
) -> Result<(), FunnelError> {
    if !criteria.manual_override_allowed {
        return Err(FunnelError::ManualOverrideDisabled);
    }
    if !attendee.champion_override {
        tracing::debug!(attendee = %attendee.id, "contact manually promoted to champion");
        attendee.champion_override = true;
    }
    Ok(())
}
