//! Transfer orchestration
//!
//! The transfer protocol moves an amount from a source account to a target
//! account such that either both sides update or neither does. Validation
//! runs before any lookup, the debit runs strictly before the credit, and a
//! failed debit leaves the target untouched.
//!
//! The service mutates the loaded aggregates in memory and hands them back in
//! a [`TransferReceipt`]; the caller persists both accounts and the
//! transaction as one unit and publishes drained events only after that
//! commit. A single orchestration call owns both aggregates for the duration
//! of the protocol. Independent calls touching the same account are
//! serialized at the persistence boundary through the aggregate's version
//! counter.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::{AccountNumber, Money, Outcome};

use crate::account::Account;
use crate::error::TransferError;
use crate::events::AccountEvent;
use crate::ports::AccountRepository;
use crate::transaction::Transaction;

/// Result of a successful transfer
///
/// Carries the transaction record and both mutated aggregates. The source
/// account holds the buffered [`AccountEvent::TransferCompleted`] until the
/// caller drains it for publication.
#[derive(Debug)]
pub struct TransferReceipt {
    pub transaction: Transaction,
    pub source_account: Account,
    pub target_account: Account,
}

/// Orchestrates transfers between two accounts
pub struct TransferService {
    accounts: Arc<dyn AccountRepository>,
}

impl TransferService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Executes the transfer protocol
    ///
    /// Fails with a [`TransferError`] value, never a panic, for every
    /// business rule: a non-positive amount, a self transfer, a missing
    /// account on either side, or insufficient funds. A request for exactly
    /// the available balance succeeds.
    #[instrument(skip(self), fields(source = %source_number, target = %target_number, amount = %amount))]
    pub async fn transfer(
        &self,
        source_number: &AccountNumber,
        target_number: &AccountNumber,
        amount: Money,
        description: Option<String>,
    ) -> Outcome<TransferReceipt, TransferError> {
        if !amount.is_positive() {
            debug!("rejected: amount not positive");
            return Outcome::failure(TransferError::invalid_amount(
                "Transfer amount must be positive",
            ));
        }

        if source_number == target_number {
            debug!("rejected: self transfer");
            return Outcome::failure(TransferError::SelfTransferNotAllowed {
                account_number: source_number.clone(),
            });
        }

        let Some(mut source_account) = self.accounts.find_by_number(source_number).await else {
            debug!("rejected: source account not found");
            return Outcome::failure(TransferError::SourceAccountNotFound {
                account_number: source_number.clone(),
            });
        };

        let Some(mut target_account) = self.accounts.find_by_number(target_number).await else {
            debug!("rejected: target account not found");
            return Outcome::failure(TransferError::TargetAccountNotFound {
                account_number: target_number.clone(),
            });
        };

        // Debit first: if it fails, the target has not been touched and the
        // whole transfer fails with the debit's error.
        if let Outcome::Failure(error) = source_account.debit(amount) {
            debug!(%error, "rejected by debit");
            return Outcome::failure(error);
        }

        // The amount is already validated positive, so the credit's
        // precondition holds here.
        target_account.credit(amount);

        let transaction = Transaction::create_transfer(
            source_number.clone(),
            target_number.clone(),
            amount,
            description,
        );

        source_account.record_event(AccountEvent::TransferCompleted {
            transaction_id: transaction.id(),
            source_account_number: source_number.clone(),
            target_account_number: target_number.clone(),
            amount,
            occurred_on: transaction.created_at(),
        });

        info!(transaction_id = %transaction.id(), "transfer completed");

        Outcome::success(TransferReceipt {
            transaction,
            source_account,
            target_account,
        })
    }
}
