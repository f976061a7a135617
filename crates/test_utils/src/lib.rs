//! Shared test utilities for the banking test suite
//!
//! Fixtures, builders, deterministic generators, and in-memory port adapters
//! used across the workspace's test code.

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod memory;

pub use builders::TestAccountBuilder;
pub use fixtures::{AccountNumberFixtures, MoneyFixtures};
pub use generators::SequentialNumberGenerator;
pub use memory::{
    InMemoryAccountRepository, InMemoryTransactionRepository, RecordingEventPublisher,
};
