//! Account domain ports
//!
//! Port traits for the collaborators the transfer core consumes but does not
//! implement: account lookup and persistence, transaction persistence, and
//! event publication. Adapters (database, message bus, in-memory test
//! doubles) implement these outside the domain.
//!
//! Infrastructure failures are the adapter's concern; the transfer protocol
//! only distinguishes present from absent, so `find_by_number` yields an
//! `Option` rather than an infrastructure error type.
//!
//! The caller owning the adapters is responsible for persisting both mutated
//! accounts and the transaction of a transfer as one unit, and for
//! publishing drained events only after that persistence has committed.

use async_trait::async_trait;

use core_kernel::AccountNumber;

use crate::account::Account;
use crate::events::AccountEvent;
use crate::transaction::Transaction;

/// Lookup and persistence of account aggregates
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by its number, if one exists
    async fn find_by_number(&self, account_number: &AccountNumber) -> Option<Account>;

    /// Persists the account's current state
    async fn save(&self, account: &Account);
}

/// Persistence of completed transfer records
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persists the transaction
    async fn save(&self, transaction: &Transaction);
}

/// Publication of drained domain events
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publishes a batch of events drained from an aggregate
    async fn publish(&self, events: Vec<AccountEvent>);
}
