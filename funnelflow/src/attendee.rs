//! Attendee records.

use crate::catalog::{AudienceType, FunnelStage, StageId, TagId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Identifies an attendee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeId(Uuid);

impl AttendeeId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing uuid, e.g. one read back from the record store.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A contact tracked for one event.
///
/// Created on intake (CSV import, form submission, manual add, or
/// elevation from the broader contact pool); mutated by the transition
/// engine and by manual edits. The core never deletes records — that is a
/// collaborator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRecord {
    /// The record id.
    pub id: AttendeeId,
    /// The segment the contact was acquired through.
    pub audience_type: AudienceType,
    /// The contact's current funnel stage. Must always be a member of the
    /// owning event's active stages; the transition engine rejects
    /// anything that would break this.
    pub current_stage: StageId,
    /// Engagement on the 0-10 scale, if known. Intake likelihood answers
    /// arrive on the 1-4 scale and are expanded through
    /// [`engagement_scale`](crate::catalog::engagement_scale) first.
    pub engagement_value: Option<u8>,
    /// Free-form tags attached by organizers or imports.
    #[serde(default)]
    pub tags: BTreeSet<TagId>,
    /// Whether the contact checked in at the event.
    #[serde(default)]
    pub attended: bool,
    /// Set by a manual champion promotion; never cleared by the core.
    #[serde(default)]
    pub champion_override: bool,
}

impl AttendeeRecord {
    /// Creates a new record at the given stage with a fresh id.
    #[must_use]
    pub fn new(audience_type: AudienceType, current_stage: StageId) -> Self {
        Self {
            id: AttendeeId::random(),
            audience_type,
            current_stage,
            engagement_value: None,
            tags: BTreeSet::new(),
            attended: false,
            champion_override: false,
        }
    }

    /// Creates a new record at the default intake stage.
    #[must_use]
    pub fn intake(audience_type: AudienceType) -> Self {
        Self::new(audience_type, FunnelStage::InFunnel.stage_id())
    }

    /// Sets the record id.
    #[must_use]
    pub fn with_id(mut self, id: AttendeeId) -> Self {
        self.id = id;
        self
    }

    /// Sets the engagement value (0-10 scale).
    #[must_use]
    pub fn with_engagement(mut self, value: u8) -> Self {
        self.engagement_value = Some(value);
        self
    }

    /// Adds a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<TagId>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Adds several tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<TagId>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Returns true if the record carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &TagId) -> bool {
        self.tags.contains(tag)
    }
}
