//! Property-based tests for money arithmetic.
//!
//! - Split exactness and fairness
//! - Allocate exactness and proportionality
//! - Rounding idempotence and sign preservation
//! - Absolute / negative sign bounds

use proptest::prelude::*;

use centum_shared::Amount;

use super::allocation::AllocationUtil;
use super::calculator::Calculator;

/// Strategy for amounts well inside the 64-bit range (+/- 10 trillion units).
fn any_amount() -> impl Strategy<Value = i64> {
    -10_000_000_000_000i64..10_000_000_000_000i64
}

/// Strategy for split counts (1 to 200).
fn split_count() -> impl Strategy<Value = i64> {
    1i64..200
}

/// Strategy for ratio sequences with a positive sum.
fn ratios() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..1_000, 1..20)
        .prop_filter("ratios must have a positive sum", |rs| {
            rs.iter().any(|r| *r > 0)
        })
}

fn sum(parts: &[Amount]) -> i128 {
    parts.iter().map(|a| i128::from(a.value())).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The parts of a split add up to the original amount.
    #[test]
    fn prop_split_sum_invariant(amount in any_amount(), n in split_count()) {
        let parts = AllocationUtil::split(Amount::new(amount), n).unwrap();
        prop_assert_eq!(parts.len(), usize::try_from(n).unwrap());
        prop_assert_eq!(sum(&parts), i128::from(amount));
    }

    /// Every part is within one unit of `amount / n`.
    #[test]
    fn prop_split_fairness(amount in any_amount(), n in split_count()) {
        let base = amount / n;
        let parts = AllocationUtil::split(Amount::new(amount), n).unwrap();
        for part in &parts {
            prop_assert!((part.value() - base).abs() <= 1);
        }
    }

    /// Earlier parties never receive less magnitude than later ones.
    #[test]
    fn prop_split_front_loaded(amount in any_amount(), n in split_count()) {
        let parts = AllocationUtil::split(Amount::new(amount), n).unwrap();
        for pair in parts.windows(2) {
            prop_assert!(pair[0].value().abs() >= pair[1].value().abs());
        }
    }

    /// The parts of an allocation add up to the original amount.
    #[test]
    fn prop_allocate_sum_invariant(amount in any_amount(), rs in ratios()) {
        let parts = AllocationUtil::allocate(Amount::new(amount), &rs).unwrap();
        prop_assert_eq!(parts.len(), rs.len());
        prop_assert_eq!(sum(&parts), i128::from(amount));
    }

    /// Each part is within one unit of the exact share `amount * r / sum`.
    #[test]
    fn prop_allocate_proportionality(amount in any_amount(), rs in ratios()) {
        let total: i128 = rs.iter().map(|r| i128::from(*r)).sum();
        let parts = AllocationUtil::allocate(Amount::new(amount), &rs).unwrap();
        for (part, ratio) in parts.iter().zip(&rs) {
            let ideal = i128::from(amount) * i128::from(*ratio) / total;
            prop_assert!((i128::from(part.value()) - ideal).abs() <= 1);
        }
    }

    /// Rounding an already rounded amount changes nothing.
    #[test]
    fn prop_round_idempotent(amount in any_amount(), e in 0u32..=6) {
        let once = Calculator::round(Amount::new(amount), e).unwrap();
        let twice = Calculator::round(once, e).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Rounding lands on a multiple of `10^e` and never flips the sign.
    #[test]
    fn prop_round_multiple_and_sign(amount in any_amount(), e in 0u32..=6) {
        let rounded = Calculator::round(Amount::new(amount), e).unwrap().value();
        prop_assert_eq!(rounded % 10i64.pow(e), 0);
        prop_assert!(rounded == 0 || rounded.signum() == amount.signum());
    }

    /// `absolute` is never negative and `negative` is never positive.
    #[test]
    fn prop_sign_bounds(amount in any::<i64>()) {
        prop_assert!(Calculator::absolute(Amount::new(amount)).value() >= 0);
        prop_assert!(Calculator::negative(Amount::new(amount)).value() <= 0);
    }
}
