//! Identifier newtypes shared across the pipeline core.
//!
//! Stages, triggers, and tags are all identified by short snake_case
//! strings chosen by the host application. The newtypes keep the three
//! vocabularies from being mixed up at call sites while staying
//! schema-compatible with whatever the host persists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a funnel stage within an event's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(String);

impl StageId {
    /// Creates a stage id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifies an external signal that may advance a contact
/// (e.g. `form_rsvp`, `stripe_webhook`, `manual_drag`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerId(String);

impl TriggerId {
    /// Creates a trigger id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TriggerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TriggerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifies a free-form tag attached to a contact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Creates a tag id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TagId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_id_display() {
        let id = StageId::new("rsvped");
        assert_eq!(id.to_string(), "rsvped");
        assert_eq!(id.as_str(), "rsvped");
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let id = TriggerId::new("stripe_webhook");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""stripe_webhook""#);

        let back: TriggerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_order_in_sets() {
        let mut tags = std::collections::BTreeSet::new();
        tags.insert(TagId::new("volunteer"));
        tags.insert(TagId::new("donor"));

        let ordered: Vec<&str> = tags.iter().map(TagId::as_str).collect();
        assert_eq!(ordered, vec!["donor", "volunteer"]);
    }
}
