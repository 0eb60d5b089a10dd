//! Storage layer for farm-ledger
//!
//! `Storage` is the record store: it owns the expense and sale collections,
//! snapshot-persists the affected collection after every mutation, restores
//! both at startup, tells subscribers about each change, and appends to the
//! audit log.
//!
//! Mutators never fail. A snapshot that cannot be read starts the collection
//! empty; a write that fails is logged and the in-memory state stays
//! authoritative for the rest of the process.

pub mod events;
pub mod file_io;
pub mod kv;
pub mod repository;

pub use events::{Observer, StoreEvent, SubscriptionId};
pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use repository::RecordRepository;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, Operation};
use crate::config::{FarmPaths, Settings};
use crate::error::FarmResult;
use crate::models::{Expense, ExpenseId, Record, RecordRef, Sale, SaleId};

use events::Observers;

/// The record store
pub struct Storage {
    expenses: RecordRepository<Expense>,
    sales: RecordRepository<Sale>,
    observers: Observers,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open the file-backed store under `paths`, restoring both collections
    pub fn open(paths: &FarmPaths, settings: &Settings) -> FarmResult<Self> {
        paths.ensure_directories()?;

        let backend = Arc::new(FileKvStore::new(paths.data_dir()));
        let mut storage = Self::with_backend(backend);
        if settings.audit_enabled {
            storage = storage.with_audit(AuditLogger::new(paths.audit_log()));
        }

        info!(
            data_dir = %paths.data_dir().display(),
            expenses = storage.expenses.count(),
            sales = storage.sales.count(),
            "record store opened"
        );
        Ok(storage)
    }

    /// Build a store over any backend, restoring both collections from it
    pub fn with_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        let storage = Self {
            expenses: RecordRepository::new(Arc::clone(&backend)),
            sales: RecordRepository::new(backend),
            observers: Observers::new(),
            audit: None,
        };
        storage.reload();
        storage
    }

    /// Log every mutation to `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Discard in-memory state and restore both collections from the backend
    pub fn reload(&self) {
        self.expenses.load();
        self.sales.load();
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    // Expenses

    /// Append an expense
    ///
    /// Returns false, leaving the collection untouched, if a record with the
    /// same id is already stored.
    pub fn add_expense(&self, expense: Expense) -> bool {
        self.add(&self.expenses, expense)
    }

    /// Replace the expense with the same id, keeping its position
    ///
    /// Returns false, without persisting or notifying, when no expense has
    /// that id.
    pub fn update_expense(&self, expense: Expense) -> bool {
        self.update(&self.expenses, expense)
    }

    /// Remove every expense whose id matches `expense.id`
    pub fn delete_expense(&self, expense: &Expense) -> usize {
        self.delete(&self.expenses, expense.id)
    }

    pub fn delete_expense_by_id(&self, id: ExpenseId) -> usize {
        self.delete(&self.expenses, id)
    }

    /// All expenses, in insertion order
    pub fn list_expenses(&self) -> Vec<Expense> {
        self.expenses.get_all()
    }

    pub fn get_expense(&self, id: ExpenseId) -> Option<Expense> {
        self.expenses.get(id)
    }

    /// Look up an expense by full UUID or unambiguous short id
    pub fn find_expense(&self, identifier: &str) -> Option<Expense> {
        find_unique(&self.expenses, |e| e.id.matches(identifier))
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.count()
    }

    // Sales

    /// Append a sale, normalizing its buyer and custom category name first
    pub fn add_sale(&self, mut sale: Sale) -> bool {
        sale.normalize();
        self.add(&self.sales, sale)
    }

    /// Replace the sale with the same id, keeping its position
    pub fn update_sale(&self, mut sale: Sale) -> bool {
        sale.normalize();
        self.update(&self.sales, sale)
    }

    pub fn delete_sale(&self, sale: &Sale) -> usize {
        self.delete(&self.sales, sale.id)
    }

    pub fn delete_sale_by_id(&self, id: SaleId) -> usize {
        self.delete(&self.sales, id)
    }

    pub fn list_sales(&self) -> Vec<Sale> {
        self.sales.get_all()
    }

    pub fn get_sale(&self, id: SaleId) -> Option<Sale> {
        self.sales.get(id)
    }

    pub fn find_sale(&self, identifier: &str) -> Option<Sale> {
        find_unique(&self.sales, |s| s.id.matches(identifier))
    }

    pub fn sale_count(&self) -> usize {
        self.sales.count()
    }

    // Subscriptions

    /// Register a callback fired after every successful mutation
    pub fn subscribe(&self, observer: impl Fn(&StoreEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // Shared mutation paths

    fn add<R: Record>(&self, repo: &RecordRepository<R>, record: R) -> bool {
        if repo.get(record.id()).is_some() {
            warn!(kind = %R::KIND, id = %record.id(), "record already stored, ignoring add");
            return false;
        }

        repo.push(record.clone());
        self.persist(repo);
        self.changed(Operation::Create, record.reference(), || AuditEntry::created(&record));
        true
    }

    fn update<R: Record>(&self, repo: &RecordRepository<R>, record: R) -> bool {
        let Some(before) = repo.replace(record.clone()) else {
            debug!(kind = %R::KIND, id = %record.id(), "update for unknown id ignored");
            return false;
        };

        self.persist(repo);
        self.changed(Operation::Update, record.reference(), || {
            AuditEntry::updated(&before, &record)
        });
        true
    }

    fn delete<R: Record>(&self, repo: &RecordRepository<R>, id: R::Id) -> usize {
        let removed = repo.remove(id);
        if removed.is_empty() {
            debug!(kind = %R::KIND, id = %id, "delete for unknown id ignored");
            return 0;
        }

        self.persist(repo);
        for record in &removed {
            self.changed(Operation::Delete, record.reference(), || AuditEntry::deleted(record));
        }
        removed.len()
    }

    fn persist<R: Record>(&self, repo: &RecordRepository<R>) {
        match repo.save() {
            Ok(()) => debug!(key = repo.key(), count = repo.count(), "snapshot saved"),
            Err(e) => warn!(key = repo.key(), error = %e, "snapshot write failed, keeping in-memory state"),
        }
    }

    fn changed(&self, operation: Operation, record: RecordRef, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry()) {
                warn!(error = %e, "audit log write failed");
            }
        }
        self.observers.notify(&StoreEvent::new(operation, record));
    }
}

fn find_unique<R: Record>(repo: &RecordRepository<R>, matches: impl Fn(&R) -> bool) -> Option<R> {
    let mut found = repo.get_all().into_iter().filter(|r| matches(r));
    let first = found.next()?;
    match found.next() {
        None => Some(first),
        Some(_) => None,
    }
}
