//! Animal and product classifications
//!
//! Both enumerations are closed and identified by their label, which is also
//! what gets persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Farm animal (or product line) an expense or sale belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalType {
    Cow,
    #[serde(rename = "Pigs")]
    Pig,
    Chicken,
    Sheep,
    Goat,
    Turkey,
    Duck,
    Horse,
    Rabbit,
    Wool,
    Dairy,
}

impl AnimalType {
    /// Every variant, in declaration order
    pub const ALL: [AnimalType; 11] = [
        Self::Cow,
        Self::Pig,
        Self::Chicken,
        Self::Sheep,
        Self::Goat,
        Self::Turkey,
        Self::Duck,
        Self::Horse,
        Self::Rabbit,
        Self::Wool,
        Self::Dairy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cow => "Cow",
            Self::Pig => "Pigs",
            Self::Chicken => "Chicken",
            Self::Sheep => "Sheep",
            Self::Goat => "Goat",
            Self::Turkey => "Turkey",
            Self::Duck => "Duck",
            Self::Horse => "Horse",
            Self::Rabbit => "Rabbit",
            Self::Wool => "Wool",
            Self::Dairy => "Dairy",
        }
    }

    /// Parse from user input, case-insensitively, by label or variant name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pig" => Some(Self::Pig),
            other => Self::ALL
                .iter()
                .copied()
                .find(|a| a.label().to_lowercase() == other),
        }
    }
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Eggs,
    Meat,
    Wool,
    Dairy,
    /// Free-form category; the sale carries its own name for it
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        Self::Eggs,
        Self::Meat,
        Self::Wool,
        Self::Dairy,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Eggs => "Eggs",
            Self::Meat => "Meat",
            Self::Wool => "Wool",
            Self::Dairy => "Dairy",
            Self::Other => "Other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other)
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_lowercase() == s)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_labels_are_persisted() {
        assert_eq!(serde_json::to_string(&AnimalType::Pig).unwrap(), "\"Pigs\"");
        assert_eq!(serde_json::to_string(&AnimalType::Cow).unwrap(), "\"Cow\"");
        let parsed: AnimalType = serde_json::from_str("\"Pigs\"").unwrap();
        assert_eq!(parsed, AnimalType::Pig);
    }

    #[test]
    fn test_every_label_round_trips_through_serde() {
        for animal in AnimalType::ALL {
            let json = serde_json::to_string(&animal).unwrap();
            assert_eq!(json, format!("\"{}\"", animal.label()));
        }
        for category in ProductCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_animal_parse() {
        assert_eq!(AnimalType::parse("pig"), Some(AnimalType::Pig));
        assert_eq!(AnimalType::parse("PIGS"), Some(AnimalType::Pig));
        assert_eq!(AnimalType::parse(" chicken "), Some(AnimalType::Chicken));
        assert_eq!(AnimalType::parse("llama"), None);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(ProductCategory::parse("eggs"), Some(ProductCategory::Eggs));
        assert_eq!(ProductCategory::parse("Other"), Some(ProductCategory::Other));
        assert_eq!(ProductCategory::parse("honey"), None);
        assert!(ProductCategory::Other.is_other());
        assert!(!ProductCategory::Wool.is_other());
    }
}
