//! CrewBldr domain - core staff and expedition types.
//!
//! Pure data, game-rule tables, and construction-time validation. The
//! feasibility engine lives in `crewbldr-engine` and consumes these
//! types read-only.

pub mod entities;
pub mod error;
pub mod game_rules;
pub mod ids;
pub mod value_objects;

// Re-export entities
pub use entities::{Expedition, ExpeditionEvent, Reward, StaffMember};

pub use error::DomainError;

// Re-export ID types
pub use ids::StaffId;

// Re-export value objects
pub use value_objects::{
    Attribute, AttributeBlock, EventCounter, Requirement, Skill, SkillRequirement,
    StaffRequirement, StaffType, TypeToken,
};
