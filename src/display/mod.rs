//! Display formatting for terminal output
//!
//! Record lists render as tables, newest first; the dashboard renders as
//! plain aligned text.

pub mod expense;
pub mod sale;
pub mod stats;

pub use expense::{format_expense_details, format_expense_list};
pub use sale::{format_sale_details, format_sale_list};
pub use stats::{format_bar, format_dashboard, format_summary};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a stored UTC timestamp in local time
///
/// An unusable format string from settings falls back to ISO dates.
pub(crate) fn local_date(date: &DateTime<Utc>, format: &str) -> String {
    let mut items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        items = StrftimeItems::new(FALLBACK_DATE_FORMAT).collect();
    }
    date.with_timezone(&Local)
        .format_with_items(items.into_iter())
        .to_string()
}

/// Truncate a string to a maximum display width, ending in an ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
