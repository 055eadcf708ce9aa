pub mod attribute;
pub mod requirement;
pub mod skill;
pub mod staff_type;

pub use attribute::{Attribute, AttributeBlock};
pub use requirement::{EventCounter, Requirement, SkillRequirement, StaffRequirement};
pub use skill::Skill;
pub use staff_type::{StaffType, TypeToken};
