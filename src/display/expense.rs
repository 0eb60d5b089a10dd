//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{local_date, truncate};
use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Animal")]
    animal: String,
    #[tabled(rename = "Quantity")]
    amount: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: local_date(&e.date, &settings.date_format),
        name: truncate(&e.name, 24),
        animal: e.animal_type.to_string(),
        amount: format!("{}", e.amount),
        cost: settings.format_cost(e.cost),
    });

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    let total: f64 = expenses.iter().map(|e| e.cost).sum();

    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        settings.format_cost(total)
    )
}

/// Format one expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", expense.id));
    output.push_str(&format!(
        "Date:     {}\n",
        local_date(&expense.date, &settings.date_format)
    ));
    output.push_str(&format!("Name:     {}\n", expense.name));
    output.push_str(&format!("Animal:   {}\n", expense.animal_type));
    output.push_str(&format!("Quantity: {}\n", expense.amount));
    output.push_str(&format!("Cost:     {}\n", settings.format_cost(expense.cost)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnimalType;

    #[test]
    fn test_empty_list() {
        let output = format_expense_list(&[], &Settings::default());
        assert_eq!(output, "No expenses recorded.\n");
    }

    #[test]
    fn test_list_shows_records_and_total() {
        let expenses = vec![
            Expense::new("Feed", 25.0, 40.0, AnimalType::Pig),
            Expense::new("Vet visit", 1.0, 65.5, AnimalType::Cow),
        ];
        let output = format_expense_list(&expenses, &Settings::default());

        assert!(output.contains("Feed"));
        assert!(output.contains("Pigs"));
        assert!(output.contains("$65.50"));
        assert!(output.contains(&expenses[0].id.to_string()));
        assert!(output.contains("2 expense(s), total $105.50"));
    }

    #[test]
    fn test_details() {
        let expense = Expense::new("Feed", 25.0, 40.0, AnimalType::Goat);
        let output = format_expense_details(&expense, &Settings::default());

        assert!(output.contains("Name:     Feed"));
        assert!(output.contains("Animal:   Goat"));
        assert!(output.contains("Cost:     $40.00"));
    }
}
