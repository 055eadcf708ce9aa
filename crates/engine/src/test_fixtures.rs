//! Reusable builders for engine tests.
//!
//! Fixtures construct valid domain values or panic with a clear message,
//! so test bodies stay focused on the scenario under test.

use std::collections::HashSet;

use crewbldr_domain::{
    Expedition, ExpeditionEvent, Requirement, Skill, SkillRequirement, StaffMember,
    StaffRequirement, StaffType, TypeToken,
};

/// A fresh level-1 member with no skills
pub fn staff(name: &str, staff_type: StaffType) -> StaffMember {
    StaffMember::new(name, staff_type)
}

/// A member at `level` with the given trained skills
pub fn staff_with_skills(
    name: &str,
    staff_type: StaffType,
    level: u8,
    skills: &[(Skill, u8)],
) -> StaffMember {
    let mut member = StaffMember::new(name, staff_type)
        .with_level(level)
        .expect("fixture level must be valid");
    for (skill, skill_level) in skills {
        member
            .train_skill(*skill, *skill_level)
            .expect("fixture skill must be trainable");
    }
    member
}

pub fn skill_requirement(skill: Skill, level: u8) -> SkillRequirement {
    SkillRequirement::new(skill, level).expect("fixture skill requirement must be valid")
}

pub fn staff_requirement(token: impl Into<TypeToken>, count: usize) -> StaffRequirement {
    StaffRequirement::new(token, count).expect("fixture staff requirement must be valid")
}

pub fn expedition(name: &str, map: &str) -> Expedition {
    Expedition::new(name, map)
}

/// An event with explicit requirements and an optional subtype
pub fn event_with_requirements(
    id: u32,
    event_type: &str,
    subtype: Option<&str>,
    requirements: Vec<Requirement>,
) -> ExpeditionEvent {
    let mut event = ExpeditionEvent::new(id, format!("Event {id}"), event_type);
    if let Some(subtype) = subtype {
        event = event.with_subtype(subtype);
    }
    requirements
        .into_iter()
        .fold(event, |event, requirement| event.with_requirement(requirement))
}

/// The caller-owned set of available item names
pub fn items(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}
