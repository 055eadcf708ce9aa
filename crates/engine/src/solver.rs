//! Assignment solver - exhaustive search for the best valid team.
//!
//! For each staff requirement the solver resolves the eligible pool and
//! enumerates every size-count combination; the Cartesian product across
//! requirements yields candidate teams. A candidate must pass every
//! baseline skill requirement; surviving candidates are scored by how
//! many of the expedition's events they satisfy in full, and the
//! first-seen maximum wins.
//!
//! This is an exact, exponential-time search: its cost is the product of
//! binomial coefficients C(pool, count) over all staff requirements. The
//! only short-cuts are the undersized-pool abort, the baseline filter,
//! and stopping once a candidate satisfies every event (no later
//! candidate can beat it, and ties keep the first seen).

use std::collections::HashSet;

use tracing::debug;

use crewbldr_domain::{Expedition, StaffMember};

use crate::enumerate::{Combinations, Odometer};
use crate::evaluator;
use crate::resolver::eligible_pool;

/// The chosen team for an expedition, with its event coverage
#[derive(Debug, Clone)]
pub struct TeamSelection<'a> {
    /// Chosen members, ordered by staff requirement then pool order
    pub members: Vec<&'a StaffMember>,
    /// How many of the expedition's events the team satisfies in full
    pub events_satisfied: usize,
}

/// Find the best team for `expedition`, or `None` when no combinatorially
/// valid team passes the baseline requirements.
///
/// Enumeration order is deterministic (roster order per pool,
/// lexicographic combinations, odometer order across requirements), so
/// the first-seen-wins tie-break yields the same team for identical
/// inputs.
pub fn solve<'a>(
    roster: &'a [StaffMember],
    expedition: &Expedition,
    available_items: &HashSet<String>,
) -> Option<TeamSelection<'a>> {
    // Materialize each requirement's combinations up front, as the
    // odometer below revisits them many times.
    let mut assignments_per_requirement: Vec<Vec<Vec<&StaffMember>>> = Vec::new();

    for requirement in &expedition.staff_requirements {
        let pool = eligible_pool(requirement.token, roster);
        if pool.len() < requirement.count {
            debug!(
                expedition = %expedition.name,
                token = %requirement.token,
                needed = requirement.count,
                available = pool.len(),
                "staff pool undersized, no team exists"
            );
            return None;
        }
        let combos: Vec<Vec<&StaffMember>> = Combinations::new(pool.len(), requirement.count)
            .map(|indices| indices.into_iter().map(|i| pool[i]).collect())
            .collect();
        assignments_per_requirement.push(combos);
    }

    let radices: Vec<usize> = assignments_per_requirement
        .iter()
        .map(|combos| combos.len())
        .collect();
    debug!(
        expedition = %expedition.name,
        candidates = radices.iter().product::<usize>(),
        "enumerating candidate teams"
    );

    let total_events = expedition.events.len();
    let mut best: Option<TeamSelection<'a>> = None;

    for selection in Odometer::new(radices) {
        let candidate: Vec<&StaffMember> = selection
            .iter()
            .enumerate()
            .flat_map(|(req, &combo)| assignments_per_requirement[req][combo].iter().copied())
            .collect();

        if reuses_a_member(&candidate) {
            continue;
        }

        let baseline_met = expedition.skill_requirements.iter().all(|requirement| {
            evaluator::max_skill_level(&candidate, requirement.skill) >= requirement.level
        });
        if !baseline_met {
            continue;
        }

        let score = expedition
            .events
            .iter()
            .filter(|event| evaluator::event_satisfied(event, &candidate, available_items))
            .count();

        let improves = best
            .as_ref()
            .map(|current| score > current.events_satisfied)
            .unwrap_or(true);
        if improves {
            best = Some(TeamSelection {
                members: candidate,
                events_satisfied: score,
            });
            if score == total_events {
                // Perfect coverage; later candidates can only tie
                break;
            }
        }
    }

    if let Some(selection) = &best {
        debug!(
            expedition = %expedition.name,
            team_size = selection.members.len(),
            events_satisfied = selection.events_satisfied,
            total_events,
            "selected team"
        );
    } else {
        debug!(
            expedition = %expedition.name,
            "no candidate passed the baseline skill requirements"
        );
    }

    best
}

/// A member may only fill one requirement slot per team
fn reuses_a_member(candidate: &[&StaffMember]) -> bool {
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate.iter().any(|member| !seen.insert(member.id))
}
