//! Feasibility classification - the engine's task-level verdict.
//!
//! Runs the solver and folds its outcome into one of three statuses,
//! with human-readable gap descriptions computed against the whole
//! roster for diagnostics.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crewbldr_domain::{Expedition, StaffMember};

use crate::evaluator::max_skill_level;
use crate::resolver::eligible_pool;
use crate::solver;

/// Task-level feasibility verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityStatus {
    /// Baseline met and every event (or no event) satisfiable
    Possible,
    /// Baseline partially met, or some but not all events satisfiable
    Partial,
    /// Staff and skills both missing, or no event satisfiable at all
    Impossible,
}

impl fmt::Display for FeasibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Possible => f.write_str("possible"),
            Self::Partial => f.write_str("partial"),
            Self::Impossible => f.write_str("impossible"),
        }
    }
}

/// The classification result for one expedition.
///
/// The chosen team is advisory output recomputed on every run; it is
/// not a stored relationship and never mutates the roster.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityReport<'a> {
    pub expedition: &'a Expedition,
    pub status: FeasibilityStatus,
    /// "{count} {type} (have {available})" per unsatisfiable staff requirement
    pub missing_staff: Vec<String>,
    /// "{skill} (level {level})" per skill no roster member reaches
    pub missing_skills: Vec<String>,
    /// The best team found, empty when none exists
    pub team: Vec<&'a StaffMember>,
}

/// Classify a single expedition against the roster.
///
/// Expected shortfalls ("no feasible team", "pool too small", "no events
/// satisfiable") are ordinary outcomes encoded in the report, never
/// errors.
pub fn classify<'a>(
    roster: &'a [StaffMember],
    expedition: &'a Expedition,
    available_items: &HashSet<String>,
) -> FeasibilityReport<'a> {
    match solver::solve(roster, expedition, available_items) {
        Some(selection) => {
            let total_events = expedition.events.len();
            let satisfied = selection.events_satisfied;
            let status = if total_events == 0 || satisfied == total_events {
                FeasibilityStatus::Possible
            } else if satisfied == 0 {
                FeasibilityStatus::Impossible
            } else {
                FeasibilityStatus::Partial
            };
            debug!(
                expedition = %expedition.name,
                %status,
                satisfied,
                total_events,
                "classified with team"
            );
            FeasibilityReport {
                expedition,
                status,
                missing_staff: Vec::new(),
                missing_skills: Vec::new(),
                team: selection.members,
            }
        }
        None => {
            // Diagnostics re-check each baseline requirement against the
            // whole roster, not against any failed candidate.
            let missing_staff: Vec<String> = expedition
                .staff_requirements
                .iter()
                .filter_map(|requirement| {
                    let available = eligible_pool(requirement.token, roster).len();
                    (available < requirement.count).then(|| {
                        format!(
                            "{} {} (have {available})",
                            requirement.count, requirement.token
                        )
                    })
                })
                .collect();

            let everyone: Vec<&StaffMember> = roster.iter().collect();
            let missing_skills: Vec<String> = expedition
                .skill_requirements
                .iter()
                .filter_map(|requirement| {
                    (max_skill_level(&everyone, requirement.skill) < requirement.level).then(|| {
                        format!("{} (level {})", requirement.skill, requirement.level)
                    })
                })
                .collect();

            // Both failure modes at once make the expedition impossible;
            // a single failure mode still counts as partial.
            let status = if !missing_staff.is_empty() && !missing_skills.is_empty() {
                FeasibilityStatus::Impossible
            } else {
                FeasibilityStatus::Partial
            };
            debug!(
                expedition = %expedition.name,
                %status,
                missing_staff = missing_staff.len(),
                missing_skills = missing_skills.len(),
                "classified without team"
            );
            FeasibilityReport {
                expedition,
                status,
                missing_staff,
                missing_skills,
                team: Vec::new(),
            }
        }
    }
}

/// Classify every expedition in the catalog, order-preserving.
///
/// Each expedition is evaluated independently against the same
/// read-only roster and item set.
pub fn classify_all<'a>(
    roster: &'a [StaffMember],
    expeditions: &'a [Expedition],
    available_items: &HashSet<String>,
) -> Vec<FeasibilityReport<'a>> {
    let reports: Vec<FeasibilityReport<'a>> = expeditions
        .iter()
        .map(|expedition| classify(roster, expedition, available_items))
        .collect();
    let possible = reports
        .iter()
        .filter(|r| r.status == FeasibilityStatus::Possible)
        .count();
    info!(
        expeditions = reports.len(),
        possible,
        roster_size = roster.len(),
        "classified expedition catalog"
    );
    reports
}
