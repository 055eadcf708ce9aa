//! The closed skill vocabulary staff can train in.
//!
//! Skill names match the external data set verbatim; parsing an unknown
//! name is a [`DomainError::Parse`] so malformed catalog rows surface at
//! the boundary instead of inside the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A trainable staff skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    // Universal skills (learnable by every staff type)
    Aerodynamics,
    #[serde(rename = "Happy Thoughts")]
    HappyThoughts,
    #[serde(rename = "Pilot Wings")]
    PilotWings,

    // Expert skills (learnable by every Expert category)
    Analysis,
    #[serde(rename = "Rapid Restoration")]
    RapidRestoration,
    #[serde(rename = "Survey Skills")]
    SurveySkills,
    #[serde(rename = "Survival Skills")]
    SurvivalSkills,
    #[serde(rename = "Tour Guidelines")]
    TourGuidelines,

    // Type-exclusive expert skills
    #[serde(rename = "Animal Analysis")]
    AnimalAnalysis,
    #[serde(rename = "Macro-Zoology")]
    MacroZoology,
    #[serde(rename = "Micro-Zoology")]
    MicroZoology,
    #[serde(rename = "Button Master")]
    ButtonMaster,
    #[serde(rename = "Fish Whispering")]
    FishWhispering,
    #[serde(rename = "Potion Master")]
    PotionMaster,
    #[serde(rename = "Spirit Whispering")]
    SpiritWhispering,

    // Assistant skills
    #[serde(rename = "Accomplished Admission")]
    AccomplishedAdmission,
    #[serde(rename = "Customer Service")]
    CustomerService,
    Marketing,

    // Janitor skills
    #[serde(rename = "Fire-Resistance")]
    FireResistance,
    #[serde(rename = "Ghost Capture")]
    GhostCapture,
    Mechanics,
    Workshop,

    // Security Guard skills
    #[serde(rename = "Camera Room")]
    CameraRoom,
    #[serde(rename = "Strolling Surveillance")]
    StrollingSurveillance,
}

impl Skill {
    /// Every skill, in declaration order.
    pub const ALL: [Skill; 24] = [
        Skill::Aerodynamics,
        Skill::HappyThoughts,
        Skill::PilotWings,
        Skill::Analysis,
        Skill::RapidRestoration,
        Skill::SurveySkills,
        Skill::SurvivalSkills,
        Skill::TourGuidelines,
        Skill::AnimalAnalysis,
        Skill::MacroZoology,
        Skill::MicroZoology,
        Skill::ButtonMaster,
        Skill::FishWhispering,
        Skill::PotionMaster,
        Skill::SpiritWhispering,
        Skill::AccomplishedAdmission,
        Skill::CustomerService,
        Skill::Marketing,
        Skill::FireResistance,
        Skill::GhostCapture,
        Skill::Mechanics,
        Skill::Workshop,
        Skill::CameraRoom,
        Skill::StrollingSurveillance,
    ];

    /// Human-readable name, as used in the external data set.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aerodynamics => "Aerodynamics",
            Self::HappyThoughts => "Happy Thoughts",
            Self::PilotWings => "Pilot Wings",
            Self::Analysis => "Analysis",
            Self::RapidRestoration => "Rapid Restoration",
            Self::SurveySkills => "Survey Skills",
            Self::SurvivalSkills => "Survival Skills",
            Self::TourGuidelines => "Tour Guidelines",
            Self::AnimalAnalysis => "Animal Analysis",
            Self::MacroZoology => "Macro-Zoology",
            Self::MicroZoology => "Micro-Zoology",
            Self::ButtonMaster => "Button Master",
            Self::FishWhispering => "Fish Whispering",
            Self::PotionMaster => "Potion Master",
            Self::SpiritWhispering => "Spirit Whispering",
            Self::AccomplishedAdmission => "Accomplished Admission",
            Self::CustomerService => "Customer Service",
            Self::Marketing => "Marketing",
            Self::FireResistance => "Fire-Resistance",
            Self::GhostCapture => "Ghost Capture",
            Self::Mechanics => "Mechanics",
            Self::Workshop => "Workshop",
            Self::CameraRoom => "Camera Room",
            Self::StrollingSurveillance => "Strolling Surveillance",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|skill| skill.display_name() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown skill \"{s}\"")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_round_trip() {
        for skill in Skill::ALL {
            let parsed: Skill = skill.to_string().parse().expect("round trip");
            assert_eq!(parsed, skill);
        }
    }

    #[test]
    fn unknown_skill_is_a_parse_error() {
        let err = "Digging".parse::<Skill>().expect_err("must fail");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("Digging"));
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Skill::FishWhispering).expect("serialize");
        assert_eq!(json, "\"Fish Whispering\"");
        let back: Skill = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Skill::FishWhispering);
    }
}
