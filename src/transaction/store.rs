//! Defines the transaction store trait and the in-memory store that backs the server.

use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicI64, Ordering},
};

use time::Date;

use crate::{
    Error,
    transaction::{Transaction, TransactionData, TransactionId, TransactionType},
};

/// Handles the creation, retrieval, update and removal of transactions.
///
/// Implementers must be safe to share between request handlers, so all
/// methods take `&self` and any mutation happens behind interior mutability.
pub trait TransactionStore: Send + Sync {
    /// Retrieve transactions in the order they were created.
    ///
    /// If `type_` is `Some`, only transactions of that type are returned.
    fn list(&self, type_: Option<TransactionType>) -> Vec<Transaction>;

    /// Retrieve a transaction by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Assign a new ID to `data` and add it to the end of the store.
    fn insert(&self, data: TransactionData) -> Transaction;

    /// Overwrite the fields of the transaction `id` with `data`, keeping its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored transaction,
    /// in which case the store is left unchanged.
    fn replace(&self, id: TransactionId, data: TransactionData) -> Result<Transaction, Error>;

    /// Remove the transaction `id` from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if nothing was removed.
    fn remove(&self, id: TransactionId) -> Result<(), Error>;
}

/// Stores transactions in process memory.
///
/// IDs start at 1 and are never reused, even after the transaction that held
/// them is removed.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: Mutex<Vec<Transaction>>,
    last_id: AtomicI64,
}

impl InMemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo transactions, dated relative to `today`.
    pub fn with_seed_data(today: Date) -> Self {
        let yesterday = today.previous_day().unwrap_or(today);
        let store = Self::new();

        for data in [
            TransactionData::new(TransactionType::Income, 1500.00, "Salary", yesterday),
            TransactionData::new(TransactionType::Expense, 75.50, "Groceries", yesterday),
            TransactionData::new(TransactionType::Expense, 12.00, "Coffee", today),
        ] {
            store.insert(data);
        }

        tracing::debug!("Seeded store with {} transactions", store.lock().len());

        store
    }

    fn next_id(&self) -> TransactionId {
        self.last_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Transaction>> {
        // A panic while holding the lock cannot leave a half-written record
        // behind, so the data is still usable.
        self.transactions.lock().unwrap_or_else(|error| {
            tracing::warn!("Recovering transactions from a poisoned lock");
            error.into_inner()
        })
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn list(&self, type_: Option<TransactionType>) -> Vec<Transaction> {
        let transactions = self.lock();

        match type_ {
            Some(type_) => transactions
                .iter()
                .filter(|transaction| transaction.type_ == type_)
                .cloned()
                .collect(),
            None => transactions.clone(),
        }
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.lock()
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn insert(&self, data: TransactionData) -> Transaction {
        let mut transactions = self.lock();
        // Mint the ID under the lock so that store order matches ID order.
        let transaction = Transaction::new(self.next_id(), data);
        transactions.push(transaction.clone());

        transaction
    }

    fn replace(&self, id: TransactionId, data: TransactionData) -> Result<Transaction, Error> {
        let mut transactions = self.lock();
        let transaction = transactions
            .iter_mut()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::NotFound)?;

        transaction.apply(data);

        Ok(transaction.clone())
    }

    fn remove(&self, id: TransactionId) -> Result<(), Error> {
        let mut transactions = self.lock();
        let count_before = transactions.len();
        transactions.retain(|transaction| transaction.id != id);

        if transactions.len() == count_before {
            Err(Error::NotFound)
        } else {
            Ok(())
        }
    }
}
