//! Domain events for the account aggregate
//!
//! Events are immutable facts buffered on the aggregate that raised them and
//! drained once by the caller that publishes them. Payloads are snapshots
//! taken at the moment of the triggering mutation; later changes to the
//! account do not alter an already-buffered event.

use chrono::{DateTime, Utc};
use core_kernel::{AccountId, AccountNumber, Money, TransactionId};
use serde::{Deserialize, Serialize};

/// Domain events emitted by the account aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountEvent {
    /// A new account has been opened
    AccountCreated {
        account_id: AccountId,
        account_number: AccountNumber,
        owner_name: String,
        initial_balance: Money,
        occurred_on: DateTime<Utc>,
    },

    /// A transfer between two accounts has completed
    TransferCompleted {
        transaction_id: TransactionId,
        source_account_number: AccountNumber,
        target_account_number: AccountNumber,
        amount: Money,
        occurred_on: DateTime<Utc>,
    },
}

impl AccountEvent {
    /// When the fact occurred
    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            AccountEvent::AccountCreated { occurred_on, .. }
            | AccountEvent::TransferCompleted { occurred_on, .. } => *occurred_on,
        }
    }

    /// Display form of the identifier of the aggregate the event belongs to
    pub fn aggregate_id(&self) -> String {
        match self {
            AccountEvent::AccountCreated { account_id, .. } => account_id.to_string(),
            AccountEvent::TransferCompleted { transaction_id, .. } => transaction_id.to_string(),
        }
    }
}
