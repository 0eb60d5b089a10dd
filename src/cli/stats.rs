//! Dashboard command

use clap::Args;

use super::parse_period;
use crate::config::Settings;
use crate::display::{format_dashboard, format_summary};
use crate::error::FarmResult;
use crate::models::Period;
use crate::services::StatisticsService;
use crate::storage::Storage;

/// Arguments for `stats`
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Number of groups in each top list
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Show only one period's totals (day or month)
    #[arg(short, long, value_parser = parse_period)]
    pub period: Option<Period>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Print the day and month summaries and the top groups, or a single
/// period's summary with `--period`
pub fn handle_stats_command(storage: &Storage, settings: &Settings, args: StatsArgs) -> FarmResult<()> {
    let service = StatisticsService::new(storage).with_top_n(args.top.unwrap_or(settings.top_n));

    if let Some(period) = args.period {
        let summary = service.summary_now(period);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print!("{}", format_summary(&summary, settings));
        }
        return Ok(());
    }

    let dashboard = service.dashboard_now();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", format_dashboard(&dashboard, settings));
    }

    Ok(())
}
