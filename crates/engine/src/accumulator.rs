//! Requirement accumulation - one consolidated view over an expedition's
//! baseline requirements and a filtered subset of its events.
//!
//! Used by presentation code to render requirement badges; has no
//! dependency on the roster. Output is deterministic for identical
//! inputs and independent of event order.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crewbldr_domain::{Attribute, Expedition, ExpeditionEvent, Requirement, Skill};

/// Which events to fold into the accumulated view.
///
/// An empty set means "no filter". An event with no subtype is never
/// excluded by a subtype filter.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    types: HashSet<String>,
    subtypes: HashSet<String>,
}

impl EventFilter {
    /// Include all events
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subtypes<I, S>(mut self, subtypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subtypes = subtypes.into_iter().map(Into::into).collect();
        self
    }

    fn includes(&self, event: &ExpeditionEvent) -> bool {
        if !self.types.is_empty() && !self.types.contains(&event.event_type) {
            return false;
        }
        if !self.subtypes.is_empty() {
            if let Some(subtype) = &event.subtype {
                if !self.subtypes.contains(subtype) {
                    return false;
                }
            }
        }
        true
    }
}

/// A (skill, maximum required level) entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillThreshold {
    pub skill: Skill,
    pub level: u8,
}

/// An (attribute, maximum required total) entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatThreshold {
    pub attribute: Attribute,
    pub total: i32,
}

/// A maximum required team-rank entry, rendered as "Rank {total}"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankThreshold {
    pub total: u32,
}

/// The consolidated, deduplicated requirement view.
///
/// At most one entry per name within each category, each carrying the
/// maximum threshold seen; lists are sorted by name (ranks numerically,
/// which matches their derived names). Recomputed on demand, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulatedRequirements {
    pub skills: Vec<SkillThreshold>,
    pub stats: Vec<StatThreshold>,
    pub ranks: Vec<RankThreshold>,
    pub items: Vec<String>,
}

/// Merge an expedition's baseline skill requirements with the
/// requirements of every event passing the filter.
///
/// Baseline skill requirements are always present regardless of the
/// filter. Thresholds merge by maximum, never by sum or latest-seen.
pub fn accumulate(expedition: &Expedition, filter: &EventFilter) -> AccumulatedRequirements {
    // Keyed by display name so output order matches the rendered badges
    let mut skill_levels: BTreeMap<&'static str, SkillThreshold> = BTreeMap::new();
    let mut stat_levels: BTreeMap<&'static str, StatThreshold> = BTreeMap::new();
    let mut rank_levels: BTreeSet<u32> = BTreeSet::new();
    let mut items: BTreeSet<&str> = BTreeSet::new();

    for requirement in &expedition.skill_requirements {
        merge_skill(&mut skill_levels, requirement.skill, requirement.level);
    }

    for event in expedition.events.iter().filter(|e| filter.includes(e)) {
        for requirement in &event.requirements {
            match requirement {
                Requirement::Skill { skill, level } => {
                    merge_skill(&mut skill_levels, *skill, *level);
                }
                Requirement::Stat { attribute, total } => {
                    let entry = stat_levels
                        .entry(attribute.display_name())
                        .or_insert(StatThreshold {
                            attribute: *attribute,
                            total: *total,
                        });
                    entry.total = entry.total.max(*total);
                }
                Requirement::Rank { total } => {
                    rank_levels.insert(*total);
                }
                Requirement::Item { name } => {
                    items.insert(name.as_str());
                }
            }
        }
    }

    AccumulatedRequirements {
        skills: skill_levels.into_values().collect(),
        stats: stat_levels.into_values().collect(),
        ranks: rank_levels
            .into_iter()
            .map(|total| RankThreshold { total })
            .collect(),
        items: items.into_iter().map(String::from).collect(),
    }
}

fn merge_skill(levels: &mut BTreeMap<&'static str, SkillThreshold>, skill: Skill, level: u8) {
    let entry = levels
        .entry(skill.display_name())
        .or_insert(SkillThreshold { skill, level });
    entry.level = entry.level.max(level);
}
