//! Account domain - aggregates, events, and the transfer protocol
//!
//! This crate models bank accounts and money transfers between them. The
//! account aggregate enforces the balance invariants, the transaction entity
//! records completed transfers for audit, and the transfer service realizes
//! the two-party consistency protocol with all business failures expressed
//! as values in the closed [`TransferError`] set.

pub mod account;
pub mod error;
pub mod events;
pub mod ports;
pub mod transaction;
pub mod transfer;

pub use account::{Account, AccountStatus};
pub use error::{AccountError, TransferError};
pub use events::AccountEvent;
pub use ports::{AccountRepository, EventPublisher, TransactionRepository};
pub use transaction::{Transaction, TransactionType};
pub use transfer::{TransferReceipt, TransferService};
