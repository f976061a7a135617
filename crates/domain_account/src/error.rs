//! Account domain errors
//!
//! `TransferError` is the closed set of business failures a transfer can
//! produce. Any new failure mode must be added here as a variant rather than
//! smuggled through a generic error channel; exhaustive matches then force
//! every caller to handle it.

use core_kernel::{AccountNumber, Money};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Business-rule failures of the transfer protocol
///
/// Every variant carries enough data for a presentation layer to build a
/// caller-facing message without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TransferError {
    /// The source account balance does not cover the requested amount
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: Money, requested: Money },

    /// An account could not be found by its number
    #[error("Account not found: {account_number}")]
    AccountNotFound { account_number: AccountNumber },

    /// The source account could not be found by its number
    #[error("Source account not found: {account_number}")]
    SourceAccountNotFound { account_number: AccountNumber },

    /// The target account could not be found by its number
    #[error("Target account not found: {account_number}")]
    TargetAccountNotFound { account_number: AccountNumber },

    /// Source and target account numbers are the same
    #[error("Self transfer not allowed for account {account_number}")]
    SelfTransferNotAllowed { account_number: AccountNumber },

    /// The amount violates a transfer rule (zero, negative)
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}

impl TransferError {
    pub fn invalid_amount(reason: impl Into<String>) -> Self {
        TransferError::InvalidAmount {
            reason: reason.into(),
        }
    }
}

/// Construction-time violations when opening an account
///
/// These indicate defects in the caller, never a business condition, so they
/// are deliberately a separate type from [`TransferError`] and cannot be
/// converted into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Owner name cannot be blank")]
    BlankOwnerName,
}
