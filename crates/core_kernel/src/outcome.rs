//! Outcome type - a two-branch container for business results
//!
//! `Outcome<S, F>` carries either a success value or a typed failure and is
//! the channel for every business-rule violation in the system. Failures are
//! values; exceptions and panics are reserved for programming errors.
//!
//! The combinators mirror an early-return chain: `and_then` short-circuits
//! on the first failure, `fold` is the only total way to leave the
//! container, and accessing the wrong branch panics rather than defaulting.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::Outcome;
//!
//! let doubled: Outcome<i32, String> = Outcome::success(21).map(|n| n * 2);
//! assert_eq!(doubled, Outcome::success(42));
//!
//! let message = doubled.fold(
//!     |n| format!("got {n}"),
//!     |e| format!("failed: {e}"),
//! );
//! assert_eq!(message, "got 42");
//! ```

use serde::{Deserialize, Serialize};

/// Either a success value or a typed failure
///
/// By convention the failure type is a closed enum such as
/// `TransferError`, so pattern matches over failures are exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The operation succeeded with this value
    Success(S),
    /// The operation failed with this business error
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Creates a successful outcome
    pub fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome
    pub fn failure(error: F) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if this is a success
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Transforms the success value, passing a failure through unchanged
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value, passing a success through unchanged
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Outcome<S, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains an operation that may itself fail, short-circuiting on the
    /// first failure
    pub fn and_then<T>(self, f: impl FnOnce(S) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Eliminates the outcome into a single result type, handling both
    /// branches
    pub fn fold<T>(self, on_success: impl FnOnce(S) -> T, on_failure: impl FnOnce(F) -> T) -> T {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Returns the success value, consuming the outcome
    ///
    /// # Panics
    ///
    /// Panics if this is a failure. Calling this on a failure is a
    /// programming error, not a business condition; inspect the variant or
    /// use [`Outcome::fold`] when the branch is not known.
    pub fn value(self) -> S
    where
        F: std::fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called Outcome::value on a Failure: {error:?}")
            }
        }
    }

    /// Returns the failure value, consuming the outcome
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    pub fn failure_value(self) -> F
    where
        S: std::fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called Outcome::failure_value on a Success: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    /// Converts into an `Option` of the success value
    pub fn ok(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the failure value
    pub fn err(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrows the success value, if any
    pub fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure value, if any
    pub fn as_failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result` so `?` works at boundaries
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_transforms_success() {
        let outcome: Outcome<i32, &str> = Outcome::success(2).map(|n| n * 10);
        assert_eq!(outcome, Outcome::success(20));
    }

    #[test]
    fn test_map_passes_failure_through() {
        let outcome: Outcome<i32, &str> = Outcome::failure("boom").map(|n: i32| n * 10);
        assert_eq!(outcome, Outcome::failure("boom"));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let outcome: Outcome<i32, &str> = Outcome::failure("first")
            .and_then(|n: i32| Outcome::success(n + 1))
            .and_then(|_| Outcome::<i32, &str>::failure("second"));
        assert_eq!(outcome, Outcome::failure("first"));
    }

    #[test]
    fn test_fold_handles_both_branches() {
        let success: Outcome<i32, &str> = Outcome::success(1);
        let failure: Outcome<i32, &str> = Outcome::failure("no");
        assert_eq!(success.fold(|n| n, |_| -1), 1);
        assert_eq!(failure.fold(|n| n, |_| -1), -1);
    }

    #[test]
    #[should_panic(expected = "called Outcome::value on a Failure")]
    fn test_value_panics_on_failure() {
        let outcome: Outcome<i32, &str> = Outcome::failure("boom");
        let _ = outcome.value();
    }

    #[test]
    #[should_panic(expected = "called Outcome::failure_value on a Success")]
    fn test_failure_value_panics_on_success() {
        let outcome: Outcome<i32, &str> = Outcome::success(7);
        let _ = outcome.failure_value();
    }

    #[test]
    fn test_result_round_trip() {
        let outcome: Outcome<i32, &str> = Ok(3).into();
        assert_eq!(outcome, Outcome::success(3));
        assert_eq!(outcome.into_result(), Ok(3));
    }
}
