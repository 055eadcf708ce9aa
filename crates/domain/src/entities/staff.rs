//! Staff member entity - hired roster resources
//!
//! A staff member owns its skill map; the roster collection owns the
//! member. Level and skill edits are validated here so the slot budget
//! can never be exceeded through the entity's own API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_rules::{
    self, available_skill_slots, remaining_skill_slots, used_skill_slots, MAX_SKILL_LEVEL,
    MAX_STAFF_LEVEL, MIN_STAFF_LEVEL,
};
use crate::value_objects::{Attribute, AttributeBlock, Skill, StaffType};
use crate::StaffId;

/// A hired staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub staff_type: StaffType,
    /// Staff level (1-20); determines the skill-slot budget
    level: u8,
    /// Trained skills and their levels (1-3)
    skills: HashMap<Skill, u8>,
    /// Attribute scores, present only for adventurer subtypes
    attributes: Option<AttributeBlock>,
}

impl StaffMember {
    pub fn new(name: impl Into<String>, staff_type: StaffType) -> Self {
        Self {
            id: StaffId::new(),
            name: name.into(),
            staff_type,
            level: MIN_STAFF_LEVEL,
            skills: HashMap::new(),
            attributes: None,
        }
    }

    pub fn with_level(mut self, level: u8) -> Result<Self, DomainError> {
        self.set_level(level)?;
        Ok(self)
    }

    pub fn with_skill(mut self, skill: Skill, level: u8) -> Result<Self, DomainError> {
        self.train_skill(skill, level)?;
        Ok(self)
    }

    pub fn with_attributes(mut self, attributes: AttributeBlock) -> Result<Self, DomainError> {
        self.set_attributes(attributes)?;
        Ok(self)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn skills(&self) -> &HashMap<Skill, u8> {
        &self.skills
    }

    pub fn attributes(&self) -> Option<&AttributeBlock> {
        self.attributes.as_ref()
    }

    /// Trained level for a skill, 0 when untrained
    pub fn skill_level(&self, skill: Skill) -> u8 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Attribute score, 0 when the member carries no attributes
    pub fn attribute_score(&self, attribute: Attribute) -> i32 {
        self.attributes
            .map(|block| block.score(attribute))
            .unwrap_or(0)
    }

    pub fn used_slots(&self) -> u8 {
        used_skill_slots(&self.skills)
    }

    pub fn available_slots(&self) -> u8 {
        available_skill_slots(self.level)
    }

    pub fn remaining_slots(&self) -> i8 {
        remaining_skill_slots(self.level, &self.skills)
    }

    /// Change the member's level.
    ///
    /// Lowering a level below the current skill load is rejected: skills
    /// must be forgotten first, so the slot invariant holds at all times.
    pub fn set_level(&mut self, level: u8) -> Result<(), DomainError> {
        if !(MIN_STAFF_LEVEL..=MAX_STAFF_LEVEL).contains(&level) {
            return Err(DomainError::validation(format!(
                "Staff level {level} out of range {MIN_STAFF_LEVEL}-{MAX_STAFF_LEVEL}"
            )));
        }
        if available_skill_slots(level) < self.used_slots() {
            return Err(DomainError::constraint(format!(
                "{} uses {} slots; level {level} only provides {}",
                self.name,
                self.used_slots(),
                available_skill_slots(level)
            )));
        }
        self.level = level;
        Ok(())
    }

    /// Train a skill to the given level, replacing any previous level.
    ///
    /// Rejected when the skill is not learnable by this member's
    /// category, the level is out of range, or the resulting skill load
    /// would exceed the member's slot budget.
    pub fn train_skill(&mut self, skill: Skill, level: u8) -> Result<(), DomainError> {
        if !game_rules::can_learn(self.staff_type, skill) {
            return Err(DomainError::constraint(format!(
                "{} cannot learn {skill}",
                self.staff_type
            )));
        }
        if !(1..=MAX_SKILL_LEVEL).contains(&level) {
            return Err(DomainError::validation(format!(
                "Skill level {level} for {skill} out of range 1-{MAX_SKILL_LEVEL}"
            )));
        }
        let other_slots = self.used_slots() - self.skill_level(skill);
        if other_slots + level > self.available_slots() {
            return Err(DomainError::constraint(format!(
                "Training {skill} to level {level} needs {} slots but {} has {} available",
                other_slots + level,
                self.name,
                self.available_slots()
            )));
        }
        self.skills.insert(skill, level);
        Ok(())
    }

    /// Forget a trained skill, freeing its slots
    pub fn forget_skill(&mut self, skill: Skill) -> Option<u8> {
        self.skills.remove(&skill)
    }

    /// Attach attribute scores.
    ///
    /// Only adventurer subtypes carry attributes.
    pub fn set_attributes(&mut self, attributes: AttributeBlock) -> Result<(), DomainError> {
        if self.staff_type.parent().is_none() {
            return Err(DomainError::constraint(format!(
                "{} staff do not carry attribute scores",
                self.staff_type
            )));
        }
        self.attributes = Some(attributes);
        Ok(())
    }
}
