//! Statistics
//!
//! Period totals and top-N groupings computed on demand from the record
//! store. Nothing here is cached; every call reads the current collections.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use crate::models::{AnimalType, Period, ProductCategory, Record};
use crate::storage::Storage;

/// Number of groups shown on the dashboard
pub const DEFAULT_TOP_N: usize = 3;

/// Income and expense for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    /// Sales total
    pub income: f64,
    /// Expense total
    pub expense: f64,
    /// `income - expense`
    pub balance: f64,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub day: PeriodSummary,
    pub month: PeriodSummary,
    pub top_expenses: Vec<(AnimalType, f64)>,
    pub top_sales: Vec<(ProductCategory, f64)>,
}

/// Service for dashboard statistics
pub struct StatisticsService<'a> {
    storage: &'a Storage,
    top_n: usize,
}

impl<'a> StatisticsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Use a different group count for `dashboard`
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Total expense cost in the period containing `now`
    pub fn total_expenses<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> f64 {
        period_total(&self.storage.list_expenses(), period, now)
    }

    /// Total sales in the period containing `now`
    pub fn total_sales<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> f64 {
        period_total(&self.storage.list_sales(), period, now)
    }

    /// Animals with the highest expense totals, at most `n`
    pub fn top_expenses_by_animal(&self, n: usize) -> Vec<(AnimalType, f64)> {
        top_groups(&self.storage.list_expenses(), |e| e.animal_type, n)
    }

    /// Product categories with the highest sales totals, at most `n`
    pub fn top_sales_by_product(&self, n: usize) -> Vec<(ProductCategory, f64)> {
        top_groups(&self.storage.list_sales(), |s| s.category, n)
    }

    pub fn summary<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> PeriodSummary {
        let income = self.total_sales(period, now);
        let expense = self.total_expenses(period, now);
        PeriodSummary {
            period,
            income,
            expense,
            balance: income - expense,
        }
    }

    pub fn dashboard<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Dashboard {
        Dashboard {
            day: self.summary(Period::Day, now),
            month: self.summary(Period::Month, now),
            top_expenses: self.top_expenses_by_animal(self.top_n),
            top_sales: self.top_sales_by_product(self.top_n),
        }
    }

    /// Expense total for the current local period
    pub fn total_expenses_now(&self, period: Period) -> f64 {
        self.total_expenses(period, &Local::now())
    }

    /// Sales total for the current local period
    pub fn total_sales_now(&self, period: Period) -> f64 {
        self.total_sales(period, &Local::now())
    }

    pub fn summary_now(&self, period: Period) -> PeriodSummary {
        self.summary(period, &Local::now())
    }

    pub fn dashboard_now(&self) -> Dashboard {
        self.dashboard(&Local::now())
    }
}

fn period_total<R: Record, Tz: TimeZone>(records: &[R], period: Period, now: &DateTime<Tz>) -> f64 {
    records
        .iter()
        .filter(|r| period.contains(&r.date(), now))
        .map(|r| r.cost())
        .sum()
}

/// Sum cost per key, largest first
///
/// Groups are collected in first-encounter order and the sort is stable, so
/// equal totals keep that order.
fn top_groups<R: Record, K: Copy + PartialEq>(
    records: &[R],
    key: impl Fn(&R) -> K,
    n: usize,
) -> Vec<(K, f64)> {
    let mut groups: Vec<(K, f64)> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, total)) => *total += record.cost(),
            None => groups.push((k, record.cost())),
        }
    }

    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    groups.truncate(n);
    groups
}
