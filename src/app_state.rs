//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    Error,
    timezone::get_local_date,
    transaction::{InMemoryTransactionStore, TransactionStore},
};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The store for managing [transactions](crate::transaction::Transaction).
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl AppState {
    /// Create a new [AppState] backed by `transaction_store`.
    pub fn new(transaction_store: impl TransactionStore + 'static) -> Self {
        Self {
            transaction_store: Arc::new(transaction_store),
        }
    }

    /// Create a new [AppState] with an in-memory store holding the demo transactions.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland",
    /// and decides what "today" is for the seed records.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if `local_timezone` is not a known timezone.
    pub fn with_seed_data(local_timezone: &str) -> Result<Self, Error> {
        let today = get_local_date(local_timezone)?;

        Ok(Self::new(InMemoryTransactionStore::with_seed_data(today)))
    }
}

/// The state needed by the transaction route handlers.
#[derive(Clone)]
pub struct TransactionState {
    /// The store for managing transactions.
    pub transaction_store: Arc<dyn TransactionStore>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}
