//! Outreach and budget forecasting.
//!
//! The forecaster turns per-segment target counts and conversion
//! assumptions plus a ticket price and fundraising goal into expected
//! attendance, revenue, and goal-achievement numbers. It is independent
//! of the transition engine: it consumes only goal/segment inputs and
//! never touches attendee records.

use crate::catalog::AudienceType;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fundraising goal an event is planned against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FundraisingGoals {
    /// Total amount the event should raise.
    pub total_fundraise: f64,
    /// Fixed costs to cover before any net is raised.
    pub costs: f64,
}

/// Outreach plan for one audience segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPlan {
    /// Expected fraction of contacted people who end up attending, in
    /// `[0, 1]`.
    pub conversion_rate: f64,
    /// How many contacts the organizers plan to reach.
    pub target_count: u32,
}

impl SegmentPlan {
    /// Creates a segment plan.
    #[must_use]
    pub const fn new(conversion_rate: f64, target_count: u32) -> Self {
        Self {
            conversion_rate,
            target_count,
        }
    }
}

/// Inputs to one forecast run.
///
/// A pure value object: recomputed on demand and replaced wholesale on
/// save, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInputs {
    /// The fundraising goal.
    pub goals: FundraisingGoals,
    /// Outreach plans per audience segment.
    pub segments: BTreeMap<AudienceType, SegmentPlan>,
    /// Ticket price. Zero is allowed (free events) and guards the
    /// tickets-needed division.
    pub ticket_cost: f64,
}

impl ForecastInputs {
    /// Creates inputs with no segments.
    #[must_use]
    pub fn new(goals: FundraisingGoals, ticket_cost: f64) -> Self {
        Self {
            goals,
            segments: BTreeMap::new(),
            ticket_cost,
        }
    }

    /// Adds a segment plan.
    #[must_use]
    pub fn with_segment(mut self, audience: AudienceType, plan: SegmentPlan) -> Self {
        self.segments.insert(audience, plan);
        self
    }

    /// Validates the inputs at the save boundary.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for non-finite numbers, a negative
    /// ticket cost, or a conversion rate outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.goals.total_fundraise.is_finite() || !self.goals.costs.is_finite() {
            return Err(ConfigError::new("fundraising goals must be finite numbers"));
        }
        if !self.ticket_cost.is_finite() || self.ticket_cost < 0.0 {
            return Err(ConfigError::new(format!(
                "ticket cost {} must be a finite non-negative number",
                self.ticket_cost
            )));
        }
        for (audience, plan) in &self.segments {
            if !plan.conversion_rate.is_finite()
                || !(0.0..=1.0).contains(&plan.conversion_rate)
            {
                return Err(ConfigError::new(format!(
                    "conversion rate {} for segment '{audience}' is outside [0, 1]",
                    plan.conversion_rate
                )));
            }
        }
        Ok(())
    }
}

/// The projections computed from one set of [`ForecastInputs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Sum of all segment target counts.
    pub total_outreach_target: u64,
    /// Expected attendees per segment. Fractional by design; callers
    /// round for display only.
    pub expected_attendees: BTreeMap<AudienceType, f64>,
    /// Expected ticket revenue across all segments.
    pub expected_revenue: f64,
    /// Fundraising goal minus costs. May be negative; not clamped.
    pub net_target: f64,
    /// Tickets to sell to cover the net target. Zero for free events.
    pub tickets_needed: u64,
    /// Expected revenue as a percentage of the fundraising goal. `None`
    /// when the goal is zero — never `NaN` or infinite.
    pub goal_achievement_pct: Option<f64>,
}

/// Computes outreach and budget projections.
///
/// Pure and total: identical inputs always produce identical outputs, no
/// wall-clock or external state, and the zero divisions (free tickets,
/// zero fundraising goal) are guarded with sentinels rather than panics.
#[must_use]
pub fn forecast(inputs: &ForecastInputs) -> Forecast {
    let net_target = inputs.goals.total_fundraise - inputs.goals.costs;

    let tickets_needed = if inputs.ticket_cost > 0.0 {
        (net_target.max(0.0) / inputs.ticket_cost).ceil() as u64
    } else {
        0
    };

    let mut expected_attendees = BTreeMap::new();
    let mut expected_revenue = 0.0;
    let mut total_outreach_target: u64 = 0;
    for (audience, plan) in &inputs.segments {
        let attendees = f64::from(plan.target_count) * plan.conversion_rate;
        expected_revenue += attendees * inputs.ticket_cost;
        total_outreach_target += u64::from(plan.target_count);
        expected_attendees.insert(*audience, attendees);
    }

    let goal_achievement_pct = if inputs.goals.total_fundraise == 0.0 {
        None
    } else {
        Some(expected_revenue / inputs.goals.total_fundraise * 100.0)
    };

    Forecast {
        total_outreach_target,
        expected_attendees,
        expected_revenue,
        net_target,
        tickets_needed,
        goal_achievement_pct,
    }
}
