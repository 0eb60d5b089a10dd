//! Expense CLI commands

use clap::Subcommand;

use super::parse_animal;
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::FarmResult;
use crate::models::AnimalType;
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What was bought
        #[arg(short, long)]
        name: String,
        /// Quantity, e.g. 25 or "25 kg"
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Total cost, e.g. 40 or "$40"
        #[arg(short, long, allow_hyphen_values = true)]
        cost: String,
        /// Animal the expense is for
        #[arg(long, value_parser = parse_animal)]
        animal: AnimalType,
    },
    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// Edit an expense
    Edit {
        /// Expense ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        cost: Option<String>,
        #[arg(long, value_parser = parse_animal)]
        animal: Option<AnimalType>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FarmResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            cost,
            animal,
        } => {
            let expense = service.create(ExpenseInput {
                name,
                amount,
                cost,
                animal_type: animal,
            })?;
            println!(
                "Recorded expense: {} {} for {} [{}]",
                expense.name,
                settings.format_cost(expense.cost),
                expense.animal_type,
                expense.id
            );
        }

        ExpenseCommands::List { limit } => {
            print!("{}", format_expense_list(&service.recent(limit), settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::Edit {
            id,
            name,
            amount,
            cost,
            animal,
        } => {
            let expense = service.find(&id)?;

            let mut input = ExpenseInput::from_expense(&expense);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(cost) = cost {
                input.cost = cost;
            }
            if let Some(animal) = animal {
                input.animal_type = animal;
            }

            let updated = service.edit(expense.id, input)?;
            println!("Updated expense: {}", updated.id);
            print!("{}", format_expense_details(&updated, settings));
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = service.find(&id)?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(&expense, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(expense.id)?;
            println!("Deleted expense: {} ({})", deleted.id, deleted.name);
        }
    }

    Ok(())
}
