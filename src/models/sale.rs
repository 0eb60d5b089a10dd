//! Sale model
//!
//! One sale event. A sale in the `Other` category carries its own category
//! name; for every other category that name is absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::animal::{AnimalType, ProductCategory};
use super::ids::SaleId;
use super::record::{Record, RecordKind, RecordRef};

/// A sale event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,

    /// When the sale was recorded; kept across edits
    pub date: DateTime<Utc>,

    pub category: ProductCategory,

    pub animal_type: AnimalType,

    /// Quantity sold
    pub amount: f64,

    /// Monetary total
    pub cost: f64,

    /// Who bought it, if recorded
    pub buyer: Option<String>,

    /// Custom category name, only for `ProductCategory::Other`
    pub other_category_name: Option<String>,
}

impl Sale {
    /// Create a new sale dated now
    pub fn new(category: ProductCategory, animal_type: AnimalType, amount: f64, cost: f64) -> Self {
        Self::dated(Utc::now(), category, animal_type, amount, cost)
    }

    /// Create a new sale with an explicit date
    pub fn dated(
        date: DateTime<Utc>,
        category: ProductCategory,
        animal_type: AnimalType,
        amount: f64,
        cost: f64,
    ) -> Self {
        Self {
            id: SaleId::new(),
            date,
            category,
            animal_type,
            amount,
            cost,
            buyer: None,
            other_category_name: None,
        }
    }

    pub fn with_buyer(mut self, buyer: impl Into<String>) -> Self {
        self.buyer = Some(buyer.into());
        self.normalize();
        self
    }

    pub fn with_other_category_name(mut self, name: impl Into<String>) -> Self {
        self.other_category_name = Some(name.into());
        self.normalize();
        self
    }

    /// Apply the save-time rules: a blank buyer becomes absent, and the
    /// custom category name only survives on `Other` sales
    pub fn normalize(&mut self) {
        if self.buyer.as_deref().is_some_and(|b| b.trim().is_empty()) {
            self.buyer = None;
        }
        if !self.category.is_other() {
            self.other_category_name = None;
        }
    }

    /// Category as shown to the user
    pub fn display_category(&self) -> &str {
        match (&self.category, self.other_category_name.as_deref()) {
            (ProductCategory::Other, Some(name)) if !name.is_empty() => name,
            (category, _) => category.label(),
        }
    }

    /// Check the category/custom-name pairing
    pub fn validate(&self) -> Result<(), SaleValidationError> {
        let has_name = self
            .other_category_name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty());

        match (self.category.is_other(), has_name) {
            (true, false) => Err(SaleValidationError::MissingOtherCategoryName),
            (false, _) if self.other_category_name.is_some() => {
                Err(SaleValidationError::UnexpectedOtherCategoryName(self.category))
            }
            _ => Ok(()),
        }
    }
}

impl Record for Sale {
    type Id = SaleId;

    const KIND: RecordKind = RecordKind::Sale;

    fn id(&self) -> SaleId {
        self.id
    }

    fn reference(&self) -> RecordRef {
        RecordRef::Sale(self.id)
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn describe(&self) -> String {
        match &self.buyer {
            Some(buyer) => format!("{} ({}) to {}", self.display_category(), self.animal_type, buyer),
            None => format!("{} ({})", self.display_category(), self.animal_type),
        }
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.display_category(),
            self.animal_type,
            self.cost
        )
    }
}

/// Validation errors for sales
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleValidationError {
    MissingOtherCategoryName,
    UnexpectedOtherCategoryName(ProductCategory),
}

impl fmt::Display for SaleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOtherCategoryName => {
                write!(f, "Sales in the Other category need a category name")
            }
            Self::UnexpectedOtherCategoryName(category) => {
                write!(f, "A custom category name is only allowed for Other, not {}", category)
            }
        }
    }
}

impl std::error::Error for SaleValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_buyer_normalized_to_none() {
        let sale = Sale::new(ProductCategory::Eggs, AnimalType::Chicken, 30.0, 15.0).with_buyer("  ");
        assert_eq!(sale.buyer, None);

        let sale = sale.with_buyer("Market");
        assert_eq!(sale.buyer.as_deref(), Some("Market"));
    }

    #[test]
    fn test_other_name_dropped_for_regular_category() {
        let sale = Sale::new(ProductCategory::Meat, AnimalType::Pig, 20.0, 200.0)
            .with_other_category_name("Sausages");
        assert_eq!(sale.other_category_name, None);
        assert_eq!(sale.display_category(), "Meat");
        assert!(sale.validate().is_ok());
    }

    #[test]
    fn test_other_category_name_displayed() {
        let sale = Sale::new(ProductCategory::Other, AnimalType::Goat, 2.0, 18.0)
            .with_other_category_name("Cheese");
        assert_eq!(sale.display_category(), "Cheese");
        assert!(sale.validate().is_ok());
    }

    #[test]
    fn test_other_without_name_is_invalid() {
        let sale = Sale::new(ProductCategory::Other, AnimalType::Goat, 2.0, 18.0);
        assert_eq!(sale.validate(), Err(SaleValidationError::MissingOtherCategoryName));
        assert_eq!(sale.display_category(), "Other");
    }

    #[test]
    fn test_name_on_regular_category_is_invalid() {
        let mut sale = Sale::new(ProductCategory::Wool, AnimalType::Sheep, 5.0, 50.0);
        sale.other_category_name = Some("Yarn".into());
        assert_eq!(
            sale.validate(),
            Err(SaleValidationError::UnexpectedOtherCategoryName(ProductCategory::Wool))
        );
    }

    #[test]
    fn test_absent_buyer_stays_absent_through_serde() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let sale = Sale::dated(date, ProductCategory::Dairy, AnimalType::Cow, 10.0, 25.0);

        let json = serde_json::to_string(&sale).unwrap();
        assert!(json.contains("\"buyer\":null"));

        let back: Sale = serde_json::from_str(&json).unwrap();
        assert_eq!(back.buyer, None);
        assert_eq!(back, sale);
    }

    #[test]
    fn test_empty_buyer_distinct_from_absent_in_storage() {
        let date = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let mut sale = Sale::dated(date, ProductCategory::Dairy, AnimalType::Cow, 10.0, 25.0);
        sale.buyer = Some(String::new());

        let back: Sale = serde_json::from_str(&serde_json::to_string(&sale).unwrap()).unwrap();
        assert_eq!(back.buyer.as_deref(), Some(""));
    }
}
