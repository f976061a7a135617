//! Comprehensive unit tests for the Money module
//!
//! Tests cover construction, scale normalization, arithmetic, currency
//! handling, and the non-negativity invariant.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::COP).unwrap();
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::COP);
    }

    #[test]
    fn test_of_uses_default_currency() {
        let m = Money::of(dec!(10.00)).unwrap();
        assert_eq!(m.currency(), Currency::COP);
    }

    #[test]
    fn test_new_normalizes_to_two_decimal_places() {
        let m = Money::of(dec!(100.123)).unwrap();
        assert_eq!(m.amount(), dec!(100.12));
    }

    #[test]
    fn test_new_rounds_half_up() {
        assert_eq!(Money::of(dec!(1.005)).unwrap().amount(), dec!(1.01));
        assert_eq!(Money::of(dec!(2.675)).unwrap().amount(), dec!(2.68));
        assert_eq!(Money::of(dec!(1.004)).unwrap().amount(), dec!(1.00));
    }

    #[test]
    fn test_negative_amount_always_fails() {
        for amount in [dec!(-0.01), dec!(-1), dec!(-1000000.99)] {
            assert!(matches!(
                Money::of(amount),
                Err(MoneyError::NegativeAmount(_))
            ));
        }
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::COP);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_jpy_rounds_to_whole_units() {
        let m = Money::new(dec!(100.5), Currency::JPY).unwrap();
        assert_eq!(m.amount(), dec!(101));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_zero_true_for_zero_amount() {
        assert!(Money::zero_default().is_zero());
    }

    #[test]
    fn test_is_positive_true_for_positive_amount() {
        assert!(Money::of(dec!(0.01)).unwrap().is_positive());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero_default().is_positive());
    }

    #[test]
    fn test_is_negative_false_by_construction() {
        assert!(!Money::of(dec!(0.00)).unwrap().is_negative());
        assert!(!Money::of(dec!(42.00)).unwrap().is_negative());
    }

    #[test]
    fn test_comparisons() {
        let small = Money::of(dec!(10.00)).unwrap();
        let large = Money::of(dec!(20.00)).unwrap();

        assert!(large.is_greater_than(&small));
        assert!(large.is_greater_than_or_equal(&small));
        assert!(large.is_greater_than_or_equal(&large));
        assert!(small.is_less_than(&large));
        assert!(!small.is_greater_than(&large));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_comparison_panics_on_currency_mismatch() {
        let usd = Money::new(dec!(1.00), Currency::USD).unwrap();
        let eur = Money::new(dec!(1.00), Currency::EUR).unwrap();
        let _ = usd.is_greater_than(&eur);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_same_currency() {
        let a = Money::of(dec!(100.00)).unwrap();
        let b = Money::of(dec!(50.25)).unwrap();
        assert_eq!((a + b).amount(), dec!(150.25));
    }

    #[test]
    fn test_sub_same_currency() {
        let a = Money::of(dec!(100.00)).unwrap();
        let b = Money::of(dec!(50.25)).unwrap();
        assert_eq!((a - b).amount(), dec!(49.75));
    }

    #[test]
    fn test_subtract_self_is_zero() {
        let a = Money::of(dec!(37.41)).unwrap();
        assert!((a - a).is_zero());
    }

    #[test]
    fn test_checked_add_rejects_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD).unwrap();
        let eur = Money::new(dec!(100.00), Currency::EUR).unwrap();
        assert!(matches!(
            usd.checked_add(&eur),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_rejects_currency_mismatch() {
        let usd = Money::new(dec!(100.00), Currency::USD).unwrap();
        let eur = Money::new(dec!(100.00), Currency::EUR).unwrap();
        assert!(matches!(
            usd.checked_sub(&eur),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_checked_sub_rejects_negative_difference() {
        let small = Money::of(dec!(10.00)).unwrap();
        let large = Money::of(dec!(20.00)).unwrap();
        assert!(matches!(
            small.checked_sub(&large),
            Err(MoneyError::NegativeAmount(_))
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_includes_currency_code() {
        let m = Money::new(dec!(1234.50), Currency::USD).unwrap();
        assert_eq!(m.to_string(), "1234.50 USD");
    }

    #[test]
    fn test_display_jpy_has_no_fraction() {
        let m = Money::new(dec!(500), Currency::JPY).unwrap();
        assert_eq!(m.to_string(), "500 JPY");
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn construction_always_has_at_most_two_decimals(minor in 0u64..1_000_000_000u64) {
            let money = Money::from_minor(minor, Currency::COP);
            prop_assert!(money.amount().scale() <= 2);
        }

        #[test]
        fn subtract_self_is_always_zero(minor in 0u64..1_000_000_000u64) {
            let money = Money::from_minor(minor, Currency::COP);
            prop_assert!((money - money).is_zero());
        }

        #[test]
        fn addition_is_commutative(a in 0u64..1_000_000u64, b in 0u64..1_000_000u64) {
            let ma = Money::from_minor(a, Currency::COP);
            let mb = Money::from_minor(b, Currency::COP);
            prop_assert_eq!(ma + mb, mb + ma);
        }

        #[test]
        fn rounding_maps_negative_inputs_to_errors(minor in 1u64..1_000_000u64) {
            let amount = -Decimal::from(minor) / dec!(100);
            prop_assert!(Money::of(amount).is_err());
        }
    }
}
