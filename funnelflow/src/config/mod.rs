//! Per-event pipeline configuration.
//!
//! A [`PipelineConfig`] is created when an event is configured, mutated
//! only through an explicit save, and owned exclusively by its event. The
//! transition engine and champion evaluator receive it as an argument on
//! every call — configuration is never ambient state.

use crate::catalog::{FunnelStage, StageId, TagId, TriggerId, OFFICIAL_STAGES};
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One stage in an event's active pipeline.
///
/// The `ordinal` field carries the stage's position explicitly so that
/// ordering survives reordering of the serialized array; the engine never
/// infers order from array position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStage {
    /// The stage id.
    pub id: StageId,
    /// Position in the funnel; strictly increasing across the pipeline.
    pub ordinal: u32,
    /// Marks the stage entered on payment confirmation. Transitions onto
    /// a payment stage are exempt from the regression guard, since payment
    /// can precede an explicit RSVP in some intake flows.
    #[serde(default)]
    pub payment: bool,
}

impl ActiveStage {
    /// Creates an active stage.
    #[must_use]
    pub fn new(id: impl Into<StageId>, ordinal: u32) -> Self {
        Self {
            id: id.into(),
            ordinal,
            payment: false,
        }
    }

    /// Marks this as the payment stage.
    #[must_use]
    pub fn payment(mut self) -> Self {
        self.payment = true;
        self
    }
}

/// The criteria that define "Champion" status for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionCriteria {
    /// Minimum engagement on the 0-10 scale.
    pub min_engagement: u8,
    /// A contact qualifies when it carries at least one of these tags.
    pub tags_any: BTreeSet<TagId>,
    /// Whether organizers may promote a contact manually, bypassing the
    /// numeric and tag thresholds.
    pub manual_override_allowed: bool,
}

impl ChampionCriteria {
    /// Creates criteria with the given engagement threshold, no tag
    /// requirement, and manual override allowed.
    #[must_use]
    pub fn new(min_engagement: u8) -> Self {
        Self {
            min_engagement,
            tags_any: BTreeSet::new(),
            manual_override_allowed: true,
        }
    }

    /// Adds qualifying tags.
    #[must_use]
    pub fn with_tags_any(mut self, tags: impl IntoIterator<Item = impl Into<TagId>>) -> Self {
        self.tags_any.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Sets whether manual promotion is allowed.
    #[must_use]
    pub fn with_manual_override(mut self, allowed: bool) -> Self {
        self.manual_override_allowed = allowed;
        self
    }
}

impl Default for ChampionCriteria {
    fn default() -> Self {
        Self::new(7)
    }
}

/// A non-fatal finding from config validation.
///
/// Warnings are returned to the caller and logged, never auto-corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ConfigWarning {
    /// `tags_any` is empty and manual override is disabled, so no contact
    /// could ever reach champion status.
    UnreachableChampion,
    /// The payment stage has no auto-advance rule, so payment webhooks
    /// will land as unrecognized triggers.
    PaymentStageWithoutRule {
        /// The payment stage.
        stage: StageId,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnreachableChampion => write!(
                f,
                "champion criteria have no qualifying tags and manual override is disabled; no contact can become a champion"
            ),
            Self::PaymentStageWithoutRule { stage } => write!(
                f,
                "payment stage '{stage}' has no auto-advance rule; payment webhooks will not advance contacts"
            ),
        }
    }
}

/// Per-event pipeline configuration: the active stage set, the trigger
/// rules that auto-advance contacts, and the champion criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// The stages active for this event, ordered by ordinal.
    pub active_stages: Vec<ActiveStage>,
    /// For each stage, the triggers that auto-advance a contact onto it.
    #[serde(default)]
    pub auto_advance_rules: BTreeMap<StageId, BTreeSet<TriggerId>>,
    /// The event's champion criteria.
    #[serde(default)]
    pub champion_criteria: ChampionCriteria,
}

impl PipelineConfig {
    /// Creates an empty configuration. Stages and rules are added through
    /// the `with_*` builders; an empty config fails validation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_stages: Vec::new(),
            auto_advance_rules: BTreeMap::new(),
            champion_criteria: ChampionCriteria::default(),
        }
    }

    /// Creates the default configuration: every official catalog stage
    /// active in catalog order, `paid` marked as the payment stage, and
    /// the standard RSVP-form and payment-webhook rules.
    #[must_use]
    pub fn official() -> Self {
        let mut config = Self::new();
        for stage in OFFICIAL_STAGES {
            config = if *stage == FunnelStage::Paid {
                config.with_payment_stage(stage.stage_id())
            } else {
                config.with_stage(stage.stage_id())
            };
        }
        config
            .with_rule(FunnelStage::Rsvped.stage_id(), ["form_rsvp"])
            .with_rule(FunnelStage::Paid.stage_id(), ["stripe_webhook"])
    }

    /// Appends a stage, assigning the next ordinal.
    #[must_use]
    pub fn with_stage(mut self, id: impl Into<StageId>) -> Self {
        let ordinal = self.next_ordinal();
        self.active_stages.push(ActiveStage::new(id, ordinal));
        self
    }

    /// Appends the payment stage, assigning the next ordinal.
    #[must_use]
    pub fn with_payment_stage(mut self, id: impl Into<StageId>) -> Self {
        let ordinal = self.next_ordinal();
        self.active_stages.push(ActiveStage::new(id, ordinal).payment());
        self
    }

    /// Adds an auto-advance rule: any of `triggers` advances a contact
    /// onto `stage`.
    #[must_use]
    pub fn with_rule(
        mut self,
        stage: impl Into<StageId>,
        triggers: impl IntoIterator<Item = impl Into<TriggerId>>,
    ) -> Self {
        self.auto_advance_rules
            .entry(stage.into())
            .or_default()
            .extend(triggers.into_iter().map(Into::into));
        self
    }

    /// Sets the champion criteria.
    #[must_use]
    pub fn with_champion_criteria(mut self, criteria: ChampionCriteria) -> Self {
        self.champion_criteria = criteria;
        self
    }

    /// Looks up an active stage by id.
    #[must_use]
    pub fn active_stage(&self, id: &StageId) -> Option<&ActiveStage> {
        self.active_stages.iter().find(|stage| &stage.id == id)
    }

    /// Returns the payment stage, if one is configured.
    #[must_use]
    pub fn payment_stage(&self) -> Option<&ActiveStage> {
        self.active_stages.iter().find(|stage| stage.payment)
    }

    /// Resolves the stage a trigger auto-advances onto, if any rule
    /// mentions it. Validation guarantees at most one rule does.
    #[must_use]
    pub fn stage_for_trigger(&self, trigger: &TriggerId) -> Option<&ActiveStage> {
        self.auto_advance_rules
            .iter()
            .find(|(_, triggers)| triggers.contains(trigger))
            .and_then(|(stage, _)| self.active_stage(stage))
    }

    fn next_ordinal(&self) -> u32 {
        self.active_stages
            .last()
            .map_or(0, |stage| stage.ordinal + 1)
    }

    /// Validates the configuration.
    ///
    /// Returns the list of non-fatal warnings on success. Hard errors
    /// (duplicate stages, rules referencing unknown stages, ambiguous
    /// triggers, out-of-range criteria) are reported and nothing is
    /// auto-corrected.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first inconsistency found.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, ConfigError> {
        if self.active_stages.is_empty() {
            return Err(ConfigError::new("pipeline has no active stages"));
        }

        let mut seen = BTreeSet::new();
        let mut last_ordinal: Option<u32> = None;
        for stage in &self.active_stages {
            if !seen.insert(&stage.id) {
                return Err(ConfigError::new(format!(
                    "stage '{}' appears more than once in active stages",
                    stage.id
                ))
                .with_stages(vec![stage.id.clone()]));
            }
            if last_ordinal.is_some_and(|prev| stage.ordinal <= prev) {
                return Err(ConfigError::new(format!(
                    "stage '{}' has ordinal {} which does not increase over the previous stage",
                    stage.id, stage.ordinal
                ))
                .with_stages(vec![stage.id.clone()]));
            }
            last_ordinal = Some(stage.ordinal);
        }

        let payment_stages: Vec<&ActiveStage> = self
            .active_stages
            .iter()
            .filter(|stage| stage.payment)
            .collect();
        if payment_stages.len() > 1 {
            return Err(ConfigError::new("more than one stage is marked as the payment stage")
                .with_stages(payment_stages.iter().map(|s| s.id.clone()).collect()));
        }

        let mut trigger_owners: BTreeMap<&TriggerId, &StageId> = BTreeMap::new();
        for (stage, triggers) in &self.auto_advance_rules {
            if self.active_stage(stage).is_none() {
                return Err(ConfigError::new(format!(
                    "auto-advance rule references stage '{stage}' which is not active"
                ))
                .with_stages(vec![stage.clone()]));
            }
            if triggers.is_empty() {
                return Err(ConfigError::new(format!(
                    "auto-advance rule for stage '{stage}' has no triggers"
                ))
                .with_stages(vec![stage.clone()]));
            }
            for trigger in triggers {
                if let Some(other) = trigger_owners.insert(trigger, stage) {
                    return Err(ConfigError::new(format!(
                        "trigger '{trigger}' advances onto both '{other}' and '{stage}'"
                    ))
                    .with_stages(vec![other.clone(), stage.clone()]));
                }
            }
        }

        if self.champion_criteria.min_engagement > 10 {
            return Err(ConfigError::new(format!(
                "champion min_engagement {} is outside the 0-10 scale",
                self.champion_criteria.min_engagement
            )));
        }

        let mut warnings = Vec::new();
        if self.champion_criteria.tags_any.is_empty()
            && !self.champion_criteria.manual_override_allowed
        {
            warnings.push(ConfigWarning::UnreachableChampion);
        }
        if let Some(stage) = self.payment_stage() {
            if !self.auto_advance_rules.contains_key(&stage.id) {
                warnings.push(ConfigWarning::PaymentStageWithoutRule {
                    stage: stage.id.clone(),
                });
            }
        }

        for warning in &warnings {
            tracing::warn!(%warning, "pipeline config validation warning");
        }
        Ok(warnings)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a configuration, returning it on success.
///
/// Free-function form of [`PipelineConfig::validate`] for hosts that
/// validate at the save boundary and want the value passed through.
///
/// # Errors
///
/// Returns a [`ConfigError`] describing the first inconsistency found.
pub fn validate_config(
    config: PipelineConfig,
) -> Result<(PipelineConfig, Vec<ConfigWarning>), ConfigError> {
    let warnings = config.validate()?;
    Ok((config, warnings))
}
