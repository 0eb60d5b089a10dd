//! Expense service
//!
//! The validated write path for expenses: form input is checked and turned
//! into a record here, then handed to the record store.

use tracing::info;

use crate::error::{FarmError, FarmResult};
use crate::models::{AnimalType, Expense, ExpenseId};
use crate::storage::Storage;

use super::validation::{cost_field, field_text, quantity_field, required_text};

/// Raw input from the expense form
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub name: String,
    /// Quantity as typed, e.g. `12` or `12 kg`
    pub amount: String,
    /// Total cost as typed, e.g. `40` or `$40`
    pub cost: String,
    pub animal_type: AnimalType,
}

impl ExpenseInput {
    /// Prefill the form from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            amount: field_text(expense.amount),
            cost: field_text(expense.cost),
            animal_type: expense.animal_type,
        }
    }

    fn parse(&self) -> FarmResult<(String, f64, f64)> {
        let name = required_text("Name", &self.name)?;
        let amount = quantity_field("Quantity", &self.amount)?;
        let cost = cost_field("Total cost", &self.cost)?;
        Ok((name, amount, cost))
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate input and record a new expense dated now
    pub fn create(&self, input: ExpenseInput) -> FarmResult<Expense> {
        let (name, amount, cost) = input.parse()?;
        let expense = Expense::new(name, amount, cost, input.animal_type);

        self.storage.add_expense(expense.clone());
        info!(id = %expense.id, cost = expense.cost, "expense recorded");
        Ok(expense)
    }

    /// Replace an expense's editable fields, keeping its id and date
    pub fn edit(&self, id: ExpenseId, input: ExpenseInput) -> FarmResult<Expense> {
        let existing = self
            .storage
            .get_expense(id)
            .ok_or_else(|| FarmError::expense_not_found(id.to_string()))?;

        let (name, amount, cost) = input.parse()?;
        let updated = existing.edited(name, amount, cost, input.animal_type);

        if !self.storage.update_expense(updated.clone()) {
            return Err(FarmError::expense_not_found(id.to_string()));
        }
        info!(id = %id, "expense updated");
        Ok(updated)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> FarmResult<Expense> {
        let existing = self
            .storage
            .get_expense(id)
            .ok_or_else(|| FarmError::expense_not_found(id.to_string()))?;

        self.storage.delete_expense(&existing);
        info!(id = %id, "expense deleted");
        Ok(existing)
    }

    /// Resolve a user-typed id
    pub fn find(&self, identifier: &str) -> FarmResult<Expense> {
        self.storage
            .find_expense(identifier)
            .ok_or_else(|| FarmError::expense_not_found(identifier))
    }

    /// Newest first, optionally limited
    pub fn recent(&self, limit: Option<usize>) -> Vec<Expense> {
        let mut expenses = self.storage.list_expenses();
        expenses.reverse();
        if let Some(limit) = limit {
            expenses.truncate(limit);
        }
        expenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use std::sync::Arc;

    fn test_storage() -> Storage {
        Storage::with_backend(Arc::new(MemoryKvStore::new()))
    }

    fn input(name: &str, amount: &str, cost: &str) -> ExpenseInput {
        ExpenseInput {
            name: name.into(),
            amount: amount.into(),
            cost: cost.into(),
            animal_type: AnimalType::Cow,
        }
    }

    #[test]
    fn test_create_parses_decorated_input() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create(input(" Feed ", "25 kg", "$ 40.5")).unwrap();
        assert_eq!(expense.name, "Feed");
        assert_eq!(expense.amount, 25.0);
        assert_eq!(expense.cost, 40.5);
        assert_eq!(storage.list_expenses(), vec![expense]);
    }

    #[test]
    fn test_create_rejects_bad_input() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.create(input("", "1", "1")).unwrap_err().is_validation());
        assert!(service.create(input("Feed", "abc", "1")).unwrap_err().is_validation());
        assert!(service.create(input("Feed", "1", "-5")).unwrap_err().is_validation());
        assert!(service.create(input("Feed", "1", "NaN")).unwrap_err().is_validation());
        assert_eq!(storage.expense_count(), 0);
    }

    #[test]
    fn test_edit_preserves_id_and_date() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);
        let original = service.create(input("Feed", "25", "40")).unwrap();

        let mut form = ExpenseInput::from_expense(&original);
        form.cost = "45".into();
        form.animal_type = AnimalType::Pig;
        let edited = service.edit(original.id, form).unwrap();

        assert_eq!(edited.id, original.id);
        assert_eq!(edited.date, original.date);
        assert_eq!(edited.cost, 45.0);
        assert_eq!(edited.amount, 25.0);
        assert_eq!(storage.get_expense(original.id), Some(edited));
    }

    #[test]
    fn test_edit_missing_is_not_found() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.edit(ExpenseId::new(), input("Feed", "1", "1")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);
        let expense = service.create(input("Feed", "25", "40")).unwrap();

        assert_eq!(service.delete(expense.id).unwrap(), expense);
        assert!(service.delete(expense.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_recent_is_newest_first() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);
        let a = service.create(input("A", "1", "1")).unwrap();
        let b = service.create(input("B", "1", "1")).unwrap();
        let c = service.create(input("C", "1", "1")).unwrap();

        assert_eq!(service.recent(None), vec![c.clone(), b.clone(), a]);
        assert_eq!(service.recent(Some(2)), vec![c, b]);
    }

    #[test]
    fn test_find_unknown() {
        let storage = test_storage();
        let service = ExpenseService::new(&storage);
        assert!(service.find("exp-deadbeef").unwrap_err().is_not_found());
    }
}
