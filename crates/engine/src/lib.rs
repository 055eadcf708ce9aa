//! CrewBldr engine - staff assignment and expedition feasibility.
//!
//! The pipeline is resolve -> enumerate -> score -> classify, run to
//! completion synchronously in a single invocation. The roster and
//! catalog are read-only inputs; repeated runs are independent, so
//! callers may parallelize across expeditions but a single solve is not
//! internally parallel.
//!
//! Entry points:
//! - [`classify`] / [`classify_all`] - task-level feasibility verdicts
//!   with the chosen team and gap diagnostics
//! - [`accumulate`] - the consolidated requirement view used by
//!   presentation code (no roster involved)

pub mod accumulator;
pub mod classifier;
pub mod enumerate;
pub mod evaluator;
pub mod resolver;
pub mod solver;

pub mod test_fixtures;

#[cfg(test)]
mod e2e_tests;

pub use accumulator::{
    accumulate, AccumulatedRequirements, EventFilter, RankThreshold, SkillThreshold, StatThreshold,
};
pub use classifier::{classify, classify_all, FeasibilityReport, FeasibilityStatus};
pub use evaluator::{
    check_accumulated, event_satisfied, requirement_met, FulfillmentCheck, RankGap, SkillGap,
    StatGap,
};
pub use resolver::eligible_pool;
pub use solver::{solve, TeamSelection};
