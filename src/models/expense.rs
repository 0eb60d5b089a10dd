//! Expense model
//!
//! One spending event: what was bought, how much of it, what it cost and
//! which animal it was for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::animal::AnimalType;
use super::ids::ExpenseId;
use super::record::{Record, RecordKind, RecordRef};

/// A spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// When the expense was recorded; kept across edits
    pub date: DateTime<Utc>,

    /// Free-text description
    pub name: String,

    /// Quantity, in kilograms
    pub amount: f64,

    /// Monetary total
    pub cost: f64,

    pub animal_type: AnimalType,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(name: impl Into<String>, amount: f64, cost: f64, animal_type: AnimalType) -> Self {
        Self::dated(Utc::now(), name, amount, cost, animal_type)
    }

    /// Create a new expense with an explicit date
    pub fn dated(
        date: DateTime<Utc>,
        name: impl Into<String>,
        amount: f64,
        cost: f64,
        animal_type: AnimalType,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            name: name.into(),
            amount,
            cost,
            animal_type,
        }
    }

    /// Replace every editable field, keeping id and date
    pub fn edited(&self, name: impl Into<String>, amount: f64, cost: f64, animal_type: AnimalType) -> Self {
        Self {
            id: self.id,
            date: self.date,
            name: name.into(),
            amount,
            cost,
            animal_type,
        }
    }
}

impl Record for Expense {
    type Id = ExpenseId;

    const KIND: RecordKind = RecordKind::Expense;

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn reference(&self) -> RecordRef {
        RecordRef::Expense(self.id)
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }

    fn cost(&self) -> f64 {
        self.cost
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.name, self.animal_type)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.animal_type,
            self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_expense() {
        let expense = Expense::new("Feed", 25.0, 40.0, AnimalType::Cow);
        assert_eq!(expense.name, "Feed");
        assert_eq!(expense.animal_type, AnimalType::Cow);
        assert_eq!(expense.cost(), 40.0);
    }

    #[test]
    fn test_edit_keeps_id_and_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let original = Expense::dated(date, "Feed", 25.0, 40.0, AnimalType::Cow);
        let edited = original.edited("Hay", 10.0, 12.5, AnimalType::Sheep);

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.date, date);
        assert_eq!(edited.name, "Hay");
        assert_eq!(edited.animal_type, AnimalType::Sheep);
    }

    #[test]
    fn test_serialization_round_trip() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let expense = Expense::dated(date, "Vet visit", 0.0, 120.0, AnimalType::Horse);

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"animal_type\":\"Horse\""));
        assert!(json.contains("2024-01-15T09:30:00Z"));

        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_display() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let expense = Expense::dated(date, "Feed", 25.0, 40.0, AnimalType::Pig);
        assert_eq!(expense.to_string(), "2024-01-15 Feed Pigs 40.00");
    }
}
