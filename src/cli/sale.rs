//! Sale CLI commands

use clap::Subcommand;

use super::{parse_animal, parse_category};
use crate::config::Settings;
use crate::display::{format_sale_details, format_sale_list};
use crate::error::FarmResult;
use crate::models::{AnimalType, ProductCategory};
use crate::services::{SaleInput, SaleService};
use crate::storage::Storage;

/// Sale subcommands
#[derive(Subcommand, Debug)]
pub enum SaleCommands {
    /// Record a new sale
    Add {
        /// Product category
        #[arg(long, value_parser = parse_category)]
        category: ProductCategory,
        /// Category name, required with --category other
        #[arg(long)]
        other_name: Option<String>,
        /// Animal the product came from
        #[arg(long, value_parser = parse_animal)]
        animal: AnimalType,
        /// Quantity, e.g. 30 or "30 pcs"
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Total price, e.g. 12 or "$12"
        #[arg(short, long, allow_hyphen_values = true)]
        cost: String,
        /// Who bought it
        #[arg(short, long)]
        buyer: Option<String>,
    },
    /// List sales, newest first
    List {
        /// Number of sales to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show sale details
    Show {
        /// Sale ID
        id: String,
    },
    /// Edit a sale
    Edit {
        /// Sale ID
        id: String,
        #[arg(long, value_parser = parse_category)]
        category: Option<ProductCategory>,
        #[arg(long)]
        other_name: Option<String>,
        #[arg(long, value_parser = parse_animal)]
        animal: Option<AnimalType>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        cost: Option<String>,
        /// New buyer; pass an empty string to clear it
        #[arg(short, long)]
        buyer: Option<String>,
    },
    /// Delete a sale
    Delete {
        /// Sale ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a sale command
pub fn handle_sale_command(storage: &Storage, settings: &Settings, cmd: SaleCommands) -> FarmResult<()> {
    let service = SaleService::new(storage);

    match cmd {
        SaleCommands::Add {
            category,
            other_name,
            animal,
            amount,
            cost,
            buyer,
        } => {
            let sale = service.create(SaleInput {
                category,
                other_category_name: other_name,
                animal_type: animal,
                amount,
                cost,
                buyer,
            })?;
            println!(
                "Recorded sale: {} {} from {} [{}]",
                sale.display_category(),
                settings.format_cost(sale.cost),
                sale.animal_type,
                sale.id
            );
        }

        SaleCommands::List { limit } => {
            print!("{}", format_sale_list(&service.recent(limit), settings));
        }

        SaleCommands::Show { id } => {
            let sale = service.find(&id)?;
            print!("{}", format_sale_details(&sale, settings));
        }

        SaleCommands::Edit {
            id,
            category,
            other_name,
            animal,
            amount,
            cost,
            buyer,
        } => {
            let sale = service.find(&id)?;

            let mut input = SaleInput::from_sale(&sale);
            if let Some(category) = category {
                input.category = category;
            }
            if other_name.is_some() {
                input.other_category_name = other_name;
            }
            if let Some(animal) = animal {
                input.animal_type = animal;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(cost) = cost {
                input.cost = cost;
            }
            if buyer.is_some() {
                input.buyer = buyer;
            }

            let updated = service.edit(sale.id, input)?;
            println!("Updated sale: {}", updated.id);
            print!("{}", format_sale_details(&updated, settings));
        }

        SaleCommands::Delete { id, force } => {
            let sale = service.find(&id)?;

            if !force {
                println!("About to delete sale:");
                print!("{}", format_sale_details(&sale, settings));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(sale.id)?;
            println!("Deleted sale: {} ({})", deleted.id, deleted.display_category());
        }
    }

    Ok(())
}
