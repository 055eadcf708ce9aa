//! Game rule tables and slot arithmetic.
//!
//! Single source of truth for the staff system constants, the level-based
//! skill-slot progression, and which skills each staff category may train.

use std::collections::HashMap;

use crate::value_objects::{Skill, StaffType};

/// Maximum skill slots per staff member
pub const MAX_SKILL_SLOTS: u8 = 5;

/// Maximum level any skill can reach
pub const MAX_SKILL_LEVEL: u8 = 3;

/// Minimum staff level
pub const MIN_STAFF_LEVEL: u8 = 1;

/// Maximum staff level
pub const MAX_STAFF_LEVEL: u8 = 20;

/// Skills every staff category can train
const UNIVERSAL_SKILLS: [Skill; 3] = [Skill::Aerodynamics, Skill::HappyThoughts, Skill::PilotWings];

/// Skills every Expert-class category can train
const EXPERT_SKILLS: [Skill; 5] = [
    Skill::Analysis,
    Skill::RapidRestoration,
    Skill::SurveySkills,
    Skill::SurvivalSkills,
    Skill::TourGuidelines,
];

/// Skills available only to one category (and its subtypes)
fn exclusive_skills(staff_type: StaffType) -> &'static [Skill] {
    match staff_type {
        StaffType::FantasyExpert => &[Skill::PotionMaster],
        StaffType::MarineLifeExpert => &[Skill::FishWhispering],
        StaffType::WildlifeExpert => &[
            Skill::AnimalAnalysis,
            Skill::MacroZoology,
            Skill::MicroZoology,
        ],
        StaffType::DigitalExpert => &[Skill::ButtonMaster],
        StaffType::SupernaturalExpert => &[Skill::SpiritWhispering],
        StaffType::Assistant => &[
            Skill::AccomplishedAdmission,
            Skill::CustomerService,
            Skill::Marketing,
        ],
        StaffType::Janitor => &[
            Skill::FireResistance,
            Skill::GhostCapture,
            Skill::Mechanics,
            Skill::Workshop,
        ],
        StaffType::SecurityGuard => &[Skill::CameraRoom, Skill::StrollingSurveillance],
        _ => &[],
    }
}

/// All skills a staff category may train.
///
/// Universal skills for everyone, the expert pool for Expert-class
/// categories, and the category's exclusives. Subtypes inherit their
/// parent's exclusives.
pub fn allowed_skills(staff_type: StaffType) -> Vec<Skill> {
    let mut skills: Vec<Skill> = UNIVERSAL_SKILLS.to_vec();
    if staff_type.is_expert() {
        skills.extend(EXPERT_SKILLS);
    }
    skills.extend(exclusive_skills(staff_type));
    if let Some(parent) = staff_type.parent() {
        skills.extend(exclusive_skills(parent));
    }
    skills
}

/// Whether a staff category may train a specific skill
pub fn can_learn(staff_type: StaffType, skill: Skill) -> bool {
    allowed_skills(staff_type).contains(&skill)
}

/// Number of skill slots available at a given staff level.
///
/// Level 1: 1 slot, level 5: 2, level 10: 3, level 15: 4, level 20: 5.
pub fn available_skill_slots(level: u8) -> u8 {
    if level < 5 {
        1
    } else if level < 10 {
        2
    } else if level < 15 {
        3
    } else if level < 20 {
        4
    } else {
        5
    }
}

/// Slots consumed by a skill map - a skill at level L consumes L slots
pub fn used_skill_slots(skills: &HashMap<Skill, u8>) -> u8 {
    skills.values().sum()
}

/// Available minus used.
///
/// May be negative if an invariant was violated upstream; never clamped,
/// so callers can surface the overflow instead of hiding it.
pub fn remaining_skill_slots(level: u8, skills: &HashMap<Skill, u8>) -> i8 {
    available_skill_slots(level) as i8 - used_skill_slots(skills) as i8
}

/// Clamp an externally supplied level into the valid 1-20 range
pub fn constrain_level(level: i32) -> u8 {
    level.clamp(MIN_STAFF_LEVEL as i32, MAX_STAFF_LEVEL as i32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_progression() {
        assert_eq!(available_skill_slots(1), 1);
        assert_eq!(available_skill_slots(4), 1);
        assert_eq!(available_skill_slots(5), 2);
        assert_eq!(available_skill_slots(9), 2);
        assert_eq!(available_skill_slots(10), 3);
        assert_eq!(available_skill_slots(14), 3);
        assert_eq!(available_skill_slots(15), 4);
        assert_eq!(available_skill_slots(19), 4);
        assert_eq!(available_skill_slots(20), 5);
    }

    #[test]
    fn used_slots_sum_levels_not_skill_count() {
        let mut skills = HashMap::new();
        skills.insert(Skill::FishWhispering, 2);
        skills.insert(Skill::SurvivalSkills, 2);
        skills.insert(Skill::SurveySkills, 1);
        assert_eq!(used_skill_slots(&skills), 5);
        // A level-20 member with that loadout is completely locked
        assert_eq!(remaining_skill_slots(20, &skills), 0);
    }

    #[test]
    fn remaining_slots_boundaries() {
        let empty = HashMap::new();
        assert_eq!(remaining_skill_slots(1, &empty), 1);
        assert_eq!(remaining_skill_slots(20, &empty), 5);
    }

    #[test]
    fn remaining_slots_may_go_negative() {
        let mut skills = HashMap::new();
        skills.insert(Skill::PilotWings, 3);
        assert_eq!(remaining_skill_slots(1, &skills), -2);
    }

    #[test]
    fn constrain_level_clamps() {
        assert_eq!(constrain_level(-3), 1);
        assert_eq!(constrain_level(0), 1);
        assert_eq!(constrain_level(7), 7);
        assert_eq!(constrain_level(25), 20);
    }

    #[test]
    fn universal_skills_are_learnable_by_everyone() {
        for staff_type in StaffType::ALL {
            for skill in UNIVERSAL_SKILLS {
                assert!(can_learn(staff_type, skill), "{staff_type} lacks {skill}");
            }
        }
    }

    #[test]
    fn expert_pool_is_expert_only() {
        assert!(can_learn(StaffType::PrehistoryExpert, Skill::Analysis));
        assert!(can_learn(StaffType::Wizard, Skill::Analysis));
        assert!(!can_learn(StaffType::Janitor, Skill::Analysis));
        assert!(!can_learn(StaffType::Assistant, Skill::SurveySkills));
    }

    #[test]
    fn exclusives_stay_exclusive() {
        assert!(can_learn(StaffType::MarineLifeExpert, Skill::FishWhispering));
        assert!(!can_learn(StaffType::BotanyExpert, Skill::FishWhispering));
        assert!(can_learn(StaffType::Janitor, Skill::GhostCapture));
        assert!(!can_learn(StaffType::SecurityGuard, Skill::GhostCapture));
    }

    #[test]
    fn adventurers_inherit_fantasy_exclusives() {
        for subtype in [
            StaffType::Barbarian,
            StaffType::Bard,
            StaffType::Rogue,
            StaffType::Wizard,
        ] {
            assert!(can_learn(subtype, Skill::PotionMaster));
            assert!(!can_learn(subtype, Skill::FishWhispering));
        }
    }
}
