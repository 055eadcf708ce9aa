//! Adventurer attribute scores.
//!
//! Only adventurer subtypes carry attribute scores. Event requirements
//! reference attributes by name in either the long form or a fixed
//! abbreviation set, matched case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A named attribute score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Luck,
}

impl Attribute {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Intelligence => "Intelligence",
            Self::Luck => "Luck",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Intelligence => "INT",
            Self::Luck => "LUCK",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "dexterity" | "dex" => Ok(Self::Dexterity),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "luck" => Ok(Self::Luck),
            _ => Err(DomainError::parse(format!("Unknown attribute \"{s}\""))),
        }
    }
}

/// The four attribute scores carried by adventurer-subtype staff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBlock {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub luck: i32,
}

impl AttributeBlock {
    pub fn new(strength: i32, dexterity: i32, intelligence: i32, luck: i32) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            luck,
        }
    }

    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Luck => self.luck,
        }
    }
}
