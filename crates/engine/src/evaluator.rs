//! Requirement fulfillment evaluation for a concrete team.
//!
//! Skill thresholds are met by the best single member (max, not sum);
//! stat thresholds by the team's summed attribute scores; rank
//! thresholds by the team's summed staff levels; item requirements by
//! the caller-supplied availability set, independent of team
//! composition.

use std::collections::HashSet;

use serde::Serialize;

use crewbldr_domain::{Attribute, ExpeditionEvent, Requirement, Skill, StaffMember};

use crate::accumulator::AccumulatedRequirements;

/// Whether a single requirement is satisfied by `team`
pub fn requirement_met(
    requirement: &Requirement,
    team: &[&StaffMember],
    available_items: &HashSet<String>,
) -> bool {
    match requirement {
        Requirement::Skill { skill, level } => max_skill_level(team, *skill) >= *level,
        Requirement::Stat { attribute, total } => attribute_total(team, *attribute) >= *total,
        Requirement::Rank { total } => level_total(team) >= *total,
        Requirement::Item { name } => available_items.contains(name),
    }
}

/// Whether every one of an event's requirements is satisfied by the
/// same team
pub fn event_satisfied(
    event: &ExpeditionEvent,
    team: &[&StaffMember],
    available_items: &HashSet<String>,
) -> bool {
    event
        .requirements
        .iter()
        .all(|requirement| requirement_met(requirement, team, available_items))
}

/// Highest trained level of `skill` across the team, 0 when untrained
pub fn max_skill_level(team: &[&StaffMember], skill: Skill) -> u8 {
    team.iter()
        .map(|member| member.skill_level(skill))
        .max()
        .unwrap_or(0)
}

fn attribute_total(team: &[&StaffMember], attribute: Attribute) -> i32 {
    team.iter()
        .map(|member| member.attribute_score(attribute))
        .sum()
}

fn level_total(team: &[&StaffMember]) -> u32 {
    team.iter().map(|member| member.level() as u32).sum()
}

/// A skill the roster cannot cover, with the best level it can field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: Skill,
    pub required: u8,
    pub available: u8,
}

/// A stat total the roster cannot reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatGap {
    pub attribute: Attribute,
    pub required: i32,
    pub available: i32,
}

/// A rank total the roster cannot reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankGap {
    pub required: u32,
    pub available: u32,
}

/// Gap report for an accumulated requirement set checked against the
/// whole roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentCheck {
    pub can_fulfill: bool,
    pub missing_skills: Vec<SkillGap>,
    pub missing_stats: Vec<StatGap>,
    pub missing_ranks: Vec<RankGap>,
    pub missing_items: Vec<String>,
}

/// Check accumulated requirements against the entire roster at once.
///
/// This is the diagnostic companion to the per-team evaluator: the whole
/// roster plays the role of the team, so a reported gap is a gap no team
/// could close.
pub fn check_accumulated(
    roster: &[StaffMember],
    requirements: &AccumulatedRequirements,
    available_items: &HashSet<String>,
) -> FulfillmentCheck {
    let everyone: Vec<&StaffMember> = roster.iter().collect();
    let mut check = FulfillmentCheck {
        can_fulfill: true,
        ..Default::default()
    };

    for threshold in &requirements.skills {
        let available = max_skill_level(&everyone, threshold.skill);
        if available < threshold.level {
            check.missing_skills.push(SkillGap {
                skill: threshold.skill,
                required: threshold.level,
                available,
            });
            check.can_fulfill = false;
        }
    }

    for threshold in &requirements.stats {
        let available = attribute_total(&everyone, threshold.attribute);
        if available < threshold.total {
            check.missing_stats.push(StatGap {
                attribute: threshold.attribute,
                required: threshold.total,
                available,
            });
            check.can_fulfill = false;
        }
    }

    for threshold in &requirements.ranks {
        let available = level_total(&everyone);
        if available < threshold.total {
            check.missing_ranks.push(RankGap {
                required: threshold.total,
                available,
            });
            check.can_fulfill = false;
        }
    }

    for item in &requirements.items {
        if !available_items.contains(item) {
            check.missing_items.push(item.clone());
            check.can_fulfill = false;
        }
    }

    check
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{event_with_requirements, items, staff, staff_with_skills};
    use crewbldr_domain::{AttributeBlock, StaffType};

    #[test]
    fn skill_requirements_use_the_best_member_not_the_sum() {
        let a = staff_with_skills(
            "Morgan",
            StaffType::MarineLifeExpert,
            10,
            &[(Skill::Analysis, 2)],
        );
        let b = staff_with_skills(
            "Jess",
            StaffType::BotanyExpert,
            10,
            &[(Skill::Analysis, 1)],
        );
        let team: Vec<&StaffMember> = vec![&a, &b];

        let met = Requirement::Skill {
            skill: Skill::Analysis,
            level: 2,
        };
        let unmet = Requirement::Skill {
            skill: Skill::Analysis,
            level: 3,
        };
        assert!(requirement_met(&met, &team, &items(&[])));
        // Levels 2 + 1 do not add up to 3
        assert!(!requirement_met(&unmet, &team, &items(&[])));
    }

    #[test]
    fn stat_requirements_sum_across_the_team() {
        let mut a = staff("Ragna", StaffType::Barbarian);
        a.set_attributes(AttributeBlock::new(4, 1, 1, 1)).expect("attrs");
        let mut b = staff("Lyre", StaffType::Bard);
        b.set_attributes(AttributeBlock::new(3, 2, 2, 2)).expect("attrs");
        let c = staff("Flo", StaffType::Janitor); // no attributes, contributes 0
        let team: Vec<&StaffMember> = vec![&a, &b, &c];

        let requirement = Requirement::Stat {
            attribute: Attribute::Strength,
            total: 7,
        };
        assert!(requirement_met(&requirement, &team, &items(&[])));

        let too_high = Requirement::Stat {
            attribute: Attribute::Strength,
            total: 8,
        };
        assert!(!requirement_met(&too_high, &team, &items(&[])));
    }

    #[test]
    fn rank_requirements_sum_member_levels() {
        let a = staff_with_skills("Morgan", StaffType::MarineLifeExpert, 12, &[]);
        let b = staff_with_skills("Flo", StaffType::Janitor, 5, &[]);
        let team: Vec<&StaffMember> = vec![&a, &b];

        assert!(requirement_met(
            &Requirement::Rank { total: 17 },
            &team,
            &items(&[])
        ));
        assert!(!requirement_met(
            &Requirement::Rank { total: 18 },
            &team,
            &items(&[])
        ));
    }

    #[test]
    fn item_requirements_ignore_team_composition() {
        let requirement = Requirement::Item {
            name: "Rope".into(),
        };
        assert!(requirement_met(&requirement, &[], &items(&["Rope"])));
        assert!(!requirement_met(&requirement, &[], &items(&["Lantern"])));
        // An unrelated item toggling availability changes nothing
        assert!(requirement_met(
            &requirement,
            &[],
            &items(&["Rope", "Lantern"])
        ));
    }

    #[test]
    fn event_needs_every_requirement_met_by_the_same_team() {
        let member = staff_with_skills(
            "Morgan",
            StaffType::MarineLifeExpert,
            10,
            &[(Skill::Analysis, 2)],
        );
        let team: Vec<&StaffMember> = vec![&member];
        let event = event_with_requirements(
            1,
            "Positive",
            None,
            vec![
                Requirement::Skill {
                    skill: Skill::Analysis,
                    level: 2,
                },
                Requirement::Item {
                    name: "Rope".into(),
                },
            ],
        );

        assert!(event_satisfied(&event, &team, &items(&["Rope"])));
        assert!(!event_satisfied(&event, &team, &items(&[])));
    }

    #[test]
    fn whole_roster_check_reports_gaps_with_numbers() {
        let roster = vec![staff_with_skills(
            "Morgan",
            StaffType::MarineLifeExpert,
            5,
            &[(Skill::Analysis, 1)],
        )];
        let requirements = AccumulatedRequirements {
            skills: vec![crate::accumulator::SkillThreshold {
                skill: Skill::Analysis,
                level: 3,
            }],
            stats: vec![],
            ranks: vec![crate::accumulator::RankThreshold { total: 4 }],
            items: vec!["Rope".into()],
        };

        let check = check_accumulated(&roster, &requirements, &items(&[]));
        assert!(!check.can_fulfill);
        assert_eq!(
            check.missing_skills,
            vec![SkillGap {
                skill: Skill::Analysis,
                required: 3,
                available: 1
            }]
        );
        // Roster level total 5 covers the rank threshold
        assert!(check.missing_ranks.is_empty());
        assert_eq!(check.missing_items, vec!["Rope".to_string()]);
    }
}
