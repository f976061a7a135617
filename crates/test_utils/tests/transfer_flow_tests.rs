//! Full transfer flow: open accounts, transfer, persist, publish
//!
//! Plays the role of the application layer around the transfer service:
//! persist both mutated accounts and the transaction as one unit, then
//! publish the drained events.

use std::sync::Arc;

use core_kernel::{AccountNumberGenerator, Money};
use domain_account::{
    Account, AccountEvent, AccountRepository, EventPublisher, TransactionRepository,
    TransferService,
};
use rust_decimal_macros::dec;
use test_utils::{
    InMemoryAccountRepository, InMemoryTransactionRepository, MoneyFixtures,
    RecordingEventPublisher, SequentialNumberGenerator, TestAccountBuilder,
};

fn money(amount: rust_decimal::Decimal) -> Money {
    Money::of(amount).unwrap()
}

#[tokio::test]
async fn test_opening_an_account_publishes_its_created_event() {
    let publisher = RecordingEventPublisher::new();
    let repository = InMemoryAccountRepository::new();
    let mut numbers = SequentialNumberGenerator::default();

    let mut account =
        Account::open("Grace Hopper", Some(MoneyFixtures::cop_100()), &mut numbers).unwrap();

    repository.save(&account).await;
    publisher.publish(account.take_events()).await;

    let published = publisher.published().await;
    assert_eq!(published.len(), 1);
    assert!(matches!(published[0], AccountEvent::AccountCreated { .. }));

    let stored = repository.get(account.account_number()).await.unwrap();
    assert_eq!(stored.balance(), MoneyFixtures::cop_100());
}

#[tokio::test]
async fn test_complete_transfer_flow_persists_and_publishes() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let transactions = InMemoryTransactionRepository::new();
    let publisher = RecordingEventPublisher::new();

    let mut numbers = SequentialNumberGenerator::default();
    let source = Account::open("Ada Lovelace", Some(money(dec!(500.00))), &mut numbers).unwrap();
    let target = Account::open("Grace Hopper", Some(money(dec!(100.00))), &mut numbers).unwrap();
    let source_number = source.account_number().clone();
    let target_number = target.account_number().clone();
    accounts.seed([source, target]).await;

    let service = TransferService::new(accounts.clone());
    let mut receipt = service
        .transfer(&source_number, &target_number, money(dec!(200.00)), None)
        .await
        .value();

    // Persist the pair and the transaction, then publish
    accounts.save(&receipt.source_account).await;
    accounts.save(&receipt.target_account).await;
    transactions.save(&receipt.transaction).await;
    publisher.publish(receipt.source_account.take_events()).await;

    let stored_source = accounts.get(&source_number).await.unwrap();
    let stored_target = accounts.get(&target_number).await.unwrap();
    assert_eq!(stored_source.balance(), money(dec!(300.00)));
    assert_eq!(stored_target.balance(), money(dec!(300.00)));

    let saved_transactions = transactions.all().await;
    assert_eq!(saved_transactions.len(), 1);
    assert_eq!(saved_transactions[0].amount(), money(dec!(200.00)));

    let published = publisher.published().await;
    assert_eq!(published.len(), 1);
    assert!(matches!(published[0], AccountEvent::TransferCompleted { .. }));
}

#[tokio::test]
async fn test_failed_transfer_leaves_the_store_untouched() {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let source = TestAccountBuilder::new()
        .with_number(test_utils::AccountNumberFixtures::source())
        .with_balance(money(dec!(50.00)))
        .build();
    let target = TestAccountBuilder::new()
        .with_number(test_utils::AccountNumberFixtures::target())
        .with_balance(money(dec!(100.00)))
        .build();
    let source_number = source.account_number().clone();
    let target_number = target.account_number().clone();
    accounts.seed([source, target]).await;

    let service = TransferService::new(accounts.clone());
    let outcome = service
        .transfer(&source_number, &target_number, money(dec!(75.00)), None)
        .await;

    assert!(outcome.is_failure());
    assert_eq!(
        accounts.get(&source_number).await.unwrap().balance(),
        money(dec!(50.00))
    );
    assert_eq!(
        accounts.get(&target_number).await.unwrap().balance(),
        money(dec!(100.00))
    );
}

#[test]
fn test_sequential_numbers_make_account_opening_deterministic() {
    let mut numbers = SequentialNumberGenerator::new(41);
    assert_eq!(numbers.generate().as_str(), "0000000000000041");

    let account = Account::open("Grace Hopper", None, &mut numbers).unwrap();
    assert_eq!(account.account_number().as_str(), "0000000000000042");
}
