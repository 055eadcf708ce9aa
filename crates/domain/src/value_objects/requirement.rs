//! Expedition requirement value objects.
//!
//! Baseline requirements (skills and staff counts) hang off the
//! expedition itself; event requirements are normalized from the raw
//! counter record each event row carries. All validation happens here,
//! at construction time, so the engine can assume well-formed input.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_rules::MAX_SKILL_LEVEL;
use crate::value_objects::{Attribute, Skill, TypeToken};

/// A baseline (skill, minimum level) requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirement {
    pub skill: Skill,
    pub level: u8,
}

impl SkillRequirement {
    pub fn new(skill: Skill, level: u8) -> Result<Self, DomainError> {
        if !(1..=MAX_SKILL_LEVEL).contains(&level) {
            return Err(DomainError::validation(format!(
                "Skill level {level} for {skill} out of range 1-{MAX_SKILL_LEVEL}"
            )));
        }
        Ok(Self { skill, level })
    }
}

/// A baseline (type token, head count) requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRequirement {
    pub token: TypeToken,
    pub count: usize,
}

impl StaffRequirement {
    pub fn new(token: impl Into<TypeToken>, count: usize) -> Result<Self, DomainError> {
        let token = token.into();
        if count == 0 {
            return Err(DomainError::validation(format!(
                "Staff requirement for {token} must ask for at least one member"
            )));
        }
        Ok(Self { token, count })
    }
}

/// A single event requirement
///
/// Skill and Stat carry a threshold against the team; Rank is a
/// threshold on the team's summed staff levels; Item is presence-only
/// and checked against the caller-supplied availability set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Requirement {
    Skill { skill: Skill, level: u8 },
    Stat { attribute: Attribute, total: i32 },
    Rank { total: u32 },
    Item { name: String },
}

/// The raw per-event requirement record as it appears in the source data.
///
/// Any subset of the fields may be present; absent fields contribute no
/// requirement. Skill and stat carry their threshold in a paired field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCounter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl EventCounter {
    /// Normalize the raw record into requirements.
    ///
    /// A skill or stat missing its paired level, or an unrecognized
    /// skill/stat name, fails here rather than deep inside the solver.
    pub fn normalize(&self) -> Result<Vec<Requirement>, DomainError> {
        let mut requirements = Vec::new();

        match (&self.skill, self.skill_level) {
            (Some(name), Some(level)) => {
                let skill: Skill = name.parse()?;
                if !(1..=MAX_SKILL_LEVEL).contains(&level) {
                    return Err(DomainError::validation(format!(
                        "Skill level {level} for {skill} out of range 1-{MAX_SKILL_LEVEL}"
                    )));
                }
                requirements.push(Requirement::Skill { skill, level });
            }
            (Some(name), None) => {
                return Err(DomainError::validation(format!(
                    "Skill \"{name}\" given without a level"
                )));
            }
            (None, Some(level)) => {
                return Err(DomainError::validation(format!(
                    "Skill level {level} given without a skill"
                )));
            }
            (None, None) => {}
        }

        match (&self.stat, self.stat_level) {
            (Some(name), Some(total)) => {
                let attribute: Attribute = name.parse()?;
                requirements.push(Requirement::Stat { attribute, total });
            }
            (Some(name), None) => {
                return Err(DomainError::validation(format!(
                    "Stat \"{name}\" given without a level"
                )));
            }
            (None, Some(total)) => {
                return Err(DomainError::validation(format!(
                    "Stat level {total} given without a stat"
                )));
            }
            (None, None) => {}
        }

        if let Some(total) = self.rank {
            requirements.push(Requirement::Rank { total });
        }

        if let Some(name) = &self.item {
            requirements.push(Requirement::Item { name: name.clone() });
        }

        Ok(requirements)
    }
}
