pub mod expedition;
pub mod staff;

pub use expedition::{Expedition, ExpeditionEvent, Reward};
pub use staff::StaffMember;
