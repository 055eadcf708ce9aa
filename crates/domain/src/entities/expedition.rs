//! Expedition entity - catalog tasks staffed from the roster
//!
//! An expedition carries baseline skill/staff requirements that must
//! always hold, plus optional events whose own requirements the engine
//! satisfies best-effort. Rewards are opaque to the engine and are kept
//! only so callers can render them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{EventCounter, Requirement, SkillRequirement, StaffRequirement};

/// An optional sub-scenario of an expedition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpeditionEvent {
    /// Numeric id from the source data
    pub id: u32,
    pub name: String,
    /// Free-form type label used for category filtering upstream
    pub event_type: String,
    /// Optional free-form subtype label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub description: String,
    pub unlock_description: String,
    pub requirements: Vec<Requirement>,
}

impl ExpeditionEvent {
    pub fn new(id: u32, name: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            event_type: event_type.into(),
            subtype: None,
            description: String::new(),
            unlock_description: String::new(),
            requirements: Vec::new(),
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        let subtype = subtype.into();
        // Source rows leave the column empty rather than omitting it
        self.subtype = if subtype.is_empty() {
            None
        } else {
            Some(subtype)
        };
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_unlock_description(mut self, text: impl Into<String>) -> Self {
        self.unlock_description = text.into();
        self
    }

    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Build the event's requirements from a raw counter record.
    ///
    /// Fails fast on malformed counters so a bad catalog row cannot
    /// silently under- or over-report feasibility later.
    pub fn with_counter(mut self, counter: &EventCounter) -> Result<Self, DomainError> {
        self.requirements = counter.normalize()?;
        Ok(self)
    }
}

/// An opaque reward record attached to an expedition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub name: String,
    pub reward_type: String,
    pub subtype: String,
}

/// A catalog expedition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expedition {
    pub name: String,
    /// Map/region label the expedition belongs to
    pub map: String,
    pub skill_requirements: Vec<SkillRequirement>,
    pub staff_requirements: Vec<StaffRequirement>,
    pub events: Vec<ExpeditionEvent>,
    pub rewards: Vec<Reward>,
}

impl Expedition {
    pub fn new(name: impl Into<String>, map: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            map: map.into(),
            skill_requirements: Vec::new(),
            staff_requirements: Vec::new(),
            events: Vec::new(),
            rewards: Vec::new(),
        }
    }

    pub fn with_skill_requirement(mut self, requirement: SkillRequirement) -> Self {
        self.skill_requirements.push(requirement);
        self
    }

    pub fn with_staff_requirement(mut self, requirement: StaffRequirement) -> Self {
        self.staff_requirements.push(requirement);
        self
    }

    pub fn with_event(mut self, event: ExpeditionEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_reward(mut self, reward: Reward) -> Self {
        self.rewards.push(reward);
        self
    }
}
