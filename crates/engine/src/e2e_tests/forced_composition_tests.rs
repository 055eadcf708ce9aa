//! The fully-locked-team scenario: an expedition whose skill thresholds
//! consume every slot of a required specialist, leaving zero training
//! flexibility. The classifier must recognize the exact loadout as
//! possible and flag any missing piece of it.

use crewbldr_domain::{Skill, StaffMember, StaffType};

use crate::classifier::{classify, FeasibilityStatus};
use crate::test_fixtures::{expedition, items, skill_requirement, staff_requirement};

fn locked_marine_expert() -> StaffMember {
    // 2 + 2 + 1 = 5 slots, the level-20 maximum: completely locked
    let mut member = StaffMember::new("Morgan", StaffType::MarineLifeExpert)
        .with_level(20)
        .expect("level");
    member.train_skill(Skill::FishWhispering, 2).expect("train");
    member.train_skill(Skill::SurvivalSkills, 2).expect("train");
    member.train_skill(Skill::SurveySkills, 1).expect("train");
    member
}

fn escort_guard() -> StaffMember {
    let mut member = StaffMember::new("Drift", StaffType::SecurityGuard)
        .with_level(5)
        .expect("level");
    member.train_skill(Skill::PilotWings, 2).expect("train");
    member
}

fn abyssal_shelf() -> crewbldr_domain::Expedition {
    expedition("Abyssal Shelf", "Coastline")
        .with_skill_requirement(skill_requirement(Skill::PilotWings, 2))
        .with_skill_requirement(skill_requirement(Skill::FishWhispering, 2))
        .with_skill_requirement(skill_requirement(Skill::SurvivalSkills, 2))
        .with_skill_requirement(skill_requirement(Skill::SurveySkills, 1))
        .with_staff_requirement(staff_requirement(StaffType::MarineLifeExpert, 1))
        .with_staff_requirement(staff_requirement(StaffType::SecurityGuard, 1))
}

#[test]
fn exact_loadout_is_possible() {
    let marine = locked_marine_expert();
    assert_eq!(marine.remaining_slots(), 0);

    let roster = vec![marine, escort_guard()];
    let expedition = abyssal_shelf();
    let report = classify(&roster, &expedition, &items(&[]));
    assert_eq!(report.status, FeasibilityStatus::Possible);
    assert_eq!(report.team.len(), 2);
    let names: Vec<&str> = report.team.iter().map(|m| m.name.as_str()).collect();
    assert!(names.contains(&"Morgan"));
    assert!(names.contains(&"Drift"));
}

#[test]
fn dropping_any_locked_skill_breaks_feasibility() {
    for dropped in [Skill::FishWhispering, Skill::SurvivalSkills, Skill::SurveySkills] {
        let mut marine = locked_marine_expert();
        marine.forget_skill(dropped);

        let roster = vec![marine, escort_guard()];
        let expedition = abyssal_shelf();
        let report = classify(&roster, &expedition, &items(&[]));
        assert_ne!(report.status, FeasibilityStatus::Possible);

        let required_level = match dropped {
            Skill::SurveySkills => 1,
            _ => 2,
        };
        let description = format!("{dropped} (level {required_level})");
        assert!(
            report.missing_skills.contains(&description),
            "expected {description} in {:?}",
            report.missing_skills
        );
    }
}

#[test]
fn a_wildcard_expert_slot_accepts_the_specialist() {
    let roster = vec![locked_marine_expert(), escort_guard()];
    let wildcarded = expedition("Abyssal Shelf", "Coastline")
        .with_skill_requirement(skill_requirement(Skill::FishWhispering, 2))
        .with_staff_requirement(staff_requirement(crewbldr_domain::TypeToken::AnyExpert, 1))
        .with_staff_requirement(staff_requirement(StaffType::SecurityGuard, 1));

    let report = classify(&roster, &wildcarded, &items(&[]));
    assert_eq!(report.status, FeasibilityStatus::Possible);
}
