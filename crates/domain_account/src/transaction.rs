//! Transaction entity
//!
//! An immutable record of a completed transfer, kept for audit and history.
//! Identity is the transaction id; the payload never changes after
//! construction.

use chrono::{DateTime, Utc};
use core_kernel::{AccountNumber, Money, TransactionId};
use serde::{Deserialize, Serialize};

/// Direction of a transaction from the source account's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money received
    Credit,
    /// Money sent
    Debit,
}

/// Record of a completed transfer between two accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    source_account_number: AccountNumber,
    target_account_number: AccountNumber,
    amount: Money,
    transaction_type: TransactionType,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates the record for a just-completed transfer
    pub fn create_transfer(
        source_account_number: AccountNumber,
        target_account_number: AccountNumber,
        amount: Money,
        description: Option<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            source_account_number,
            target_account_number,
            amount,
            transaction_type: TransactionType::Debit,
            description,
            created_at: Utc::now(),
        }
    }

    /// Rebuilds a transaction from persisted state
    pub fn reconstitute(
        id: TransactionId,
        source_account_number: AccountNumber,
        target_account_number: AccountNumber,
        amount: Money,
        transaction_type: TransactionType,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_account_number,
            target_account_number,
            amount,
            transaction_type,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn source_account_number(&self) -> &AccountNumber {
        &self.source_account_number
    }

    pub fn target_account_number(&self) -> &AccountNumber {
        &self.target_account_number
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Entity identity: equality by id
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}
