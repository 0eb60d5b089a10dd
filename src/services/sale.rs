//! Sale service

use tracing::info;

use crate::error::{FarmError, FarmResult};
use crate::models::{AnimalType, ProductCategory, Sale, SaleId};
use crate::storage::Storage;

use super::validation::{cost_field, field_text, optional_text, quantity_field};

/// Raw input from the sale form
#[derive(Debug, Clone)]
pub struct SaleInput {
    pub category: ProductCategory,
    /// Only read when `category` is `Other`
    pub other_category_name: Option<String>,
    pub animal_type: AnimalType,
    pub amount: String,
    pub cost: String,
    pub buyer: Option<String>,
}

impl SaleInput {
    /// Prefill the form from an existing sale
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            category: sale.category,
            other_category_name: sale.other_category_name.clone(),
            animal_type: sale.animal_type,
            amount: field_text(sale.amount),
            cost: field_text(sale.cost),
            buyer: sale.buyer.clone(),
        }
    }

    fn apply(&self, mut sale: Sale) -> FarmResult<Sale> {
        sale.category = self.category;
        sale.animal_type = self.animal_type;
        sale.amount = quantity_field("Quantity", &self.amount)?;
        sale.cost = cost_field("Total cost", &self.cost)?;
        sale.buyer = optional_text(self.buyer.as_deref());
        sale.other_category_name = if self.category.is_other() {
            optional_text(self.other_category_name.as_deref())
        } else {
            None
        };

        sale.validate()
            .map_err(|e| FarmError::Validation(e.to_string()))?;
        Ok(sale)
    }
}

/// Service for sale management
pub struct SaleService<'a> {
    storage: &'a Storage,
}

impl<'a> SaleService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate input and record a new sale dated now
    pub fn create(&self, input: SaleInput) -> FarmResult<Sale> {
        let sale = input.apply(Sale::new(input.category, input.animal_type, 0.0, 0.0))?;

        self.storage.add_sale(sale.clone());
        info!(id = %sale.id, cost = sale.cost, "sale recorded");
        Ok(sale)
    }

    /// Replace a sale's editable fields, keeping its id and date
    pub fn edit(&self, id: SaleId, input: SaleInput) -> FarmResult<Sale> {
        let existing = self
            .storage
            .get_sale(id)
            .ok_or_else(|| FarmError::sale_not_found(id.to_string()))?;

        let updated = input.apply(existing)?;
        if !self.storage.update_sale(updated.clone()) {
            return Err(FarmError::sale_not_found(id.to_string()));
        }
        info!(id = %id, "sale updated");
        Ok(updated)
    }

    /// Delete a sale, returning what was removed
    pub fn delete(&self, id: SaleId) -> FarmResult<Sale> {
        let existing = self
            .storage
            .get_sale(id)
            .ok_or_else(|| FarmError::sale_not_found(id.to_string()))?;

        self.storage.delete_sale(&existing);
        info!(id = %id, "sale deleted");
        Ok(existing)
    }

    /// Resolve a user-typed id
    pub fn find(&self, identifier: &str) -> FarmResult<Sale> {
        self.storage
            .find_sale(identifier)
            .ok_or_else(|| FarmError::sale_not_found(identifier))
    }

    /// Newest first, optionally limited
    pub fn recent(&self, limit: Option<usize>) -> Vec<Sale> {
        let mut sales = self.storage.list_sales();
        sales.reverse();
        if let Some(limit) = limit {
            sales.truncate(limit);
        }
        sales
    }
}
