//! Sale display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{local_date, truncate};
use crate::config::Settings;
use crate::models::Sale;

#[derive(Tabled)]
struct SaleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Animal")]
    animal: String,
    #[tabled(rename = "Quantity")]
    amount: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Buyer")]
    buyer: String,
}

/// Format sales as a table, in the order given
pub fn format_sale_list(sales: &[Sale], settings: &Settings) -> String {
    if sales.is_empty() {
        return "No sales recorded.\n".to_string();
    }

    let rows = sales.iter().map(|s| SaleRow {
        id: s.id.to_string(),
        date: local_date(&s.date, &settings.date_format),
        category: truncate(s.display_category(), 20),
        animal: s.animal_type.to_string(),
        amount: format!("{}", s.amount),
        cost: settings.format_cost(s.cost),
        buyer: s.buyer.as_deref().map(|b| truncate(b, 20)).unwrap_or_default(),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    let total: f64 = sales.iter().map(|s| s.cost).sum();

    format!(
        "{}\n{} sale(s), total {}\n",
        table,
        sales.len(),
        settings.format_cost(total)
    )
}

/// Format one sale for display
pub fn format_sale_details(sale: &Sale, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Sale:     {}\n", sale.id));
    output.push_str(&format!(
        "Date:     {}\n",
        local_date(&sale.date, &settings.date_format)
    ));
    output.push_str(&format!("Category: {}\n", sale.display_category()));
    output.push_str(&format!("Animal:   {}\n", sale.animal_type));
    output.push_str(&format!("Quantity: {}\n", sale.amount));
    output.push_str(&format!("Cost:     {}\n", settings.format_cost(sale.cost)));
    if let Some(buyer) = &sale.buyer {
        output.push_str(&format!("Buyer:    {}\n", buyer));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnimalType, ProductCategory};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_sale_list(&[], &Settings::default()), "No sales recorded.\n");
    }

    #[test]
    fn test_list_uses_custom_category_name() {
        let sales = vec![
            Sale::new(ProductCategory::Other, AnimalType::Horse, 1.0, 80.0)
                .with_other_category_name("Manure"),
            Sale::new(ProductCategory::Eggs, AnimalType::Chicken, 30.0, 12.0).with_buyer("Market"),
        ];
        let output = format_sale_list(&sales, &Settings::default());

        assert!(output.contains("Manure"));
        assert!(output.contains("Eggs"));
        assert!(output.contains("Market"));
        assert!(output.contains("2 sale(s), total $92.00"));
    }

    #[test]
    fn test_details_omit_missing_buyer() {
        let sale = Sale::new(ProductCategory::Wool, AnimalType::Sheep, 4.0, 30.0);
        let output = format_sale_details(&sale, &Settings::default());

        assert!(output.contains("Category: Wool"));
        assert!(!output.contains("Buyer"));
    }
}
