//! Staff categories and the abstract type tokens expeditions request.
//!
//! Staff are hired into one concrete category. Four adventurer categories
//! are subtypes: they are hired distinctly but satisfy their parent
//! category's expedition requirements. Requirements may also name one of
//! two wildcards instead of a concrete category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A concrete hired staff category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffType {
    #[serde(rename = "Prehistory Expert")]
    PrehistoryExpert,
    #[serde(rename = "Botany Expert")]
    BotanyExpert,
    #[serde(rename = "Fantasy Expert")]
    FantasyExpert,
    #[serde(rename = "Marine Life Expert")]
    MarineLifeExpert,
    #[serde(rename = "Wildlife Expert")]
    WildlifeExpert,
    #[serde(rename = "Digital Expert")]
    DigitalExpert,
    #[serde(rename = "Supernatural Expert")]
    SupernaturalExpert,
    #[serde(rename = "Science Expert")]
    ScienceExpert,
    #[serde(rename = "Space Expert")]
    SpaceExpert,
    Assistant,
    Janitor,
    #[serde(rename = "Security Guard")]
    SecurityGuard,

    // Adventurer subtypes - hired distinctly, match as Fantasy Expert
    Barbarian,
    Bard,
    Rogue,
    Wizard,
}

impl StaffType {
    /// Every concrete category, in declaration order.
    pub const ALL: [StaffType; 16] = [
        StaffType::PrehistoryExpert,
        StaffType::BotanyExpert,
        StaffType::FantasyExpert,
        StaffType::MarineLifeExpert,
        StaffType::WildlifeExpert,
        StaffType::DigitalExpert,
        StaffType::SupernaturalExpert,
        StaffType::ScienceExpert,
        StaffType::SpaceExpert,
        StaffType::Assistant,
        StaffType::Janitor,
        StaffType::SecurityGuard,
        StaffType::Barbarian,
        StaffType::Bard,
        StaffType::Rogue,
        StaffType::Wizard,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PrehistoryExpert => "Prehistory Expert",
            Self::BotanyExpert => "Botany Expert",
            Self::FantasyExpert => "Fantasy Expert",
            Self::MarineLifeExpert => "Marine Life Expert",
            Self::WildlifeExpert => "Wildlife Expert",
            Self::DigitalExpert => "Digital Expert",
            Self::SupernaturalExpert => "Supernatural Expert",
            Self::ScienceExpert => "Science Expert",
            Self::SpaceExpert => "Space Expert",
            Self::Assistant => "Assistant",
            Self::Janitor => "Janitor",
            Self::SecurityGuard => "Security Guard",
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Rogue => "Rogue",
            Self::Wizard => "Wizard",
        }
    }

    /// The parent category a subtype matches as, if any.
    ///
    /// Subtype grouping is one level only - a parent never has a parent.
    pub fn parent(&self) -> Option<StaffType> {
        match self {
            Self::Barbarian | Self::Bard | Self::Rogue | Self::Wizard => {
                Some(Self::FantasyExpert)
            }
            _ => None,
        }
    }

    /// Whether this category satisfies a requirement naming `category`.
    ///
    /// True for the exact category and for subtypes whose parent is
    /// `category`.
    pub fn matches_category(&self, category: StaffType) -> bool {
        *self == category || self.parent() == Some(category)
    }

    /// Whether this category belongs to the Expert class.
    ///
    /// Adventurer subtypes inherit the flag from their parent.
    pub fn is_expert(&self) -> bool {
        match self {
            Self::PrehistoryExpert
            | Self::BotanyExpert
            | Self::FantasyExpert
            | Self::MarineLifeExpert
            | Self::WildlifeExpert
            | Self::DigitalExpert
            | Self::SupernaturalExpert
            | Self::ScienceExpert
            | Self::SpaceExpert => true,
            Self::Assistant | Self::Janitor | Self::SecurityGuard => false,
            other => other.parent().is_some_and(|p| p.is_expert()),
        }
    }
}

impl fmt::Display for StaffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StaffType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.display_name() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown staff type \"{s}\"")))
    }
}

/// The abstract type token a staff requirement names.
///
/// Either a concrete category, or one of two wildcards resolved against
/// the roster at solve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeToken {
    /// "ANY Staff" - the whole roster is eligible
    #[serde(rename = "ANY Staff")]
    AnyStaff,
    /// "ANY Expert" - every Expert-class member is eligible
    #[serde(rename = "ANY Expert")]
    AnyExpert,
    /// A concrete category (subtypes of it are eligible too)
    #[serde(untagged)]
    Type(StaffType),
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyStaff => f.write_str("ANY Staff"),
            Self::AnyExpert => f.write_str("ANY Expert"),
            Self::Type(t) => t.fmt(f),
        }
    }
}

impl FromStr for TypeToken {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANY Staff" => Ok(Self::AnyStaff),
            "ANY Expert" => Ok(Self::AnyExpert),
            _ => s
                .parse::<StaffType>()
                .map(Self::Type)
                .map_err(|_| DomainError::parse(format!("Unknown staff type token \"{s}\""))),
        }
    }
}

impl From<StaffType> for TypeToken {
    fn from(value: StaffType) -> Self {
        Self::Type(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adventurers_match_their_parent_category() {
        for subtype in [
            StaffType::Barbarian,
            StaffType::Bard,
            StaffType::Rogue,
            StaffType::Wizard,
        ] {
            assert_eq!(subtype.parent(), Some(StaffType::FantasyExpert));
            assert!(subtype.matches_category(StaffType::FantasyExpert));
            assert!(!subtype.matches_category(StaffType::WildlifeExpert));
        }
    }

    #[test]
    fn parents_have_no_parent() {
        assert_eq!(StaffType::FantasyExpert.parent(), None);
        assert_eq!(StaffType::Janitor.parent(), None);
    }

    #[test]
    fn expert_flag_covers_subtypes() {
        assert!(StaffType::MarineLifeExpert.is_expert());
        assert!(StaffType::Wizard.is_expert());
        assert!(!StaffType::Janitor.is_expert());
        assert!(!StaffType::Assistant.is_expert());
        assert!(!StaffType::SecurityGuard.is_expert());
    }

    #[test]
    fn type_token_round_trips() {
        for raw in ["ANY Staff", "ANY Expert", "Marine Life Expert", "Wizard"] {
            let token: TypeToken = raw.parse().expect("parse");
            assert_eq!(token.to_string(), raw);
        }
    }

    #[test]
    fn unknown_token_is_a_parse_error() {
        let err = "ANY Janitor".parse::<TypeToken>().expect_err("must fail");
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
