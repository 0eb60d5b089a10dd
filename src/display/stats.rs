//! Dashboard display
//!
//! Day and month cards followed by the top expense and sale groups, each
//! group with a bar scaled to the largest total in its list.

use std::fmt::Display;

use crate::config::Settings;
use crate::services::{Dashboard, PeriodSummary};

const BAR_WIDTH: usize = 20;

/// A bar of `width` cells filled in proportion to `value / max`
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max).min(1.0) * width as f64).round() as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one period's income, expense and balance
pub fn format_summary(summary: &PeriodSummary, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", summary.period));
    output.push_str(&format!("  Income:  {:>12}\n", settings.format_cost(summary.income)));
    output.push_str(&format!("  Expense: {:>12}\n", settings.format_cost(summary.expense)));
    output.push_str(&format!("  Balance: {:>12}\n", settings.format_cost(summary.balance)));
    output
}

fn format_groups<K: Display>(title: &str, groups: &[(K, f64)], settings: &Settings) -> String {
    let mut output = format!("{}\n", title);
    if groups.is_empty() {
        output.push_str("  (none)\n");
        return output;
    }

    let max = groups.iter().map(|(_, total)| *total).fold(0.0, f64::max);
    for (key, total) in groups {
        output.push_str(&format!(
            "  {:10} {} {:>12}\n",
            key.to_string(),
            format_bar(*total, max, BAR_WIDTH),
            settings.format_cost(*total)
        ));
    }
    output
}

/// Format the dashboard
pub fn format_dashboard(dashboard: &Dashboard, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format_summary(&dashboard.day, settings));
    output.push('\n');
    output.push_str(&format_summary(&dashboard.month, settings));
    output.push('\n');
    output.push_str(&format_groups("Top expenses by animal", &dashboard.top_expenses, settings));
    output.push('\n');
    output.push_str(&format_groups("Top sales by product", &dashboard.top_sales, settings));

    output
}
