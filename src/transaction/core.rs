//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

// ============================================================================
// MODELS
// ============================================================================

/// Identifier for a transaction, minted by the store.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. groceries.
    Expense,
}

impl TransactionType {
    /// Match a user supplied filter string to a transaction type, ignoring case.
    ///
    /// Returns `None` if `filter` does not name either type.
    pub fn from_filter(filter: &str) -> Option<Self> {
        if filter.eq_ignore_ascii_case("income") {
            Some(Self::Income)
        } else if filter.eq_ignore_ascii_case("expense") {
            Some(Self::Expense)
        } else {
            None
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "INCOME"),
            TransactionType::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction was income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a transaction from its `id` and the client supplied `data`.
    pub fn new(id: TransactionId, data: TransactionData) -> Self {
        Self {
            id,
            type_: data.type_,
            amount: data.amount,
            description: data.description,
            date: data.date,
        }
    }

    /// Overwrite every field except the ID with `data`.
    pub fn apply(&mut self, data: TransactionData) {
        self.type_ = data.type_;
        self.amount = data.amount;
        self.description = data.description;
        self.date = data.date;
    }
}

/// The request body for creating or updating a transaction.
///
/// Clients may send an `id` field, but it is ignored since IDs are only ever
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    /// Whether the transaction was income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Text detailing the transaction.
    pub description: String,
    /// The date when the transaction ocurred.
    pub date: Date,
}

impl TransactionData {
    /// Shortcut for building request bodies and seed records.
    pub fn new(type_: TransactionType, amount: f64, description: &str, date: Date) -> Self {
        Self {
            type_,
            amount,
            description: description.to_owned(),
            date,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
