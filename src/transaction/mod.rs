//! Transaction management for the ledger API.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionData` request body
//! - The `TransactionStore` trait and its in-memory implementation
//! - Route handlers for listing, getting, creating, updating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;
mod store;

pub use self::core::{Transaction, TransactionData, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::get_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use store::{InMemoryTransactionStore, TransactionStore};
