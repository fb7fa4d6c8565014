//! Exact-sum splitting and proportional allocation.
//!
//! Both operations guarantee the parts sum EXACTLY to the original amount
//! (no minor unit lost or gained). They work by:
//! 1. Computing each party's truncated share
//! 2. Taking the leftover (amount - sum of shares)
//! 3. Handing leftover units out one at a time, starting at index 0
//!
//! Truncation is toward zero, so the leftover always carries the sign of the
//! amount and its magnitude is smaller than the number of parties.

use centum_shared::{Amount, MoneyError, MoneyResult};
use tracing::debug;

use super::calculator::Calculator;

/// Allocation utility for distributing amounts.
///
/// Earlier parties absorb leftover units first, so results are reproducible
/// and biased toward index 0.
pub struct AllocationUtil;

impl AllocationUtil {
    /// Split `amount` into `n` equal or near-equal parts.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::money::AllocationUtil;
    /// use centum_shared::Amount;
    ///
    /// let parts = AllocationUtil::split(Amount::new(100), 3).unwrap();
    /// assert_eq!(parts, vec![Amount::new(34), Amount::new(33), Amount::new(33)]);
    /// ```
    pub fn split(amount: Amount, n: i64) -> MoneyResult<Vec<Amount>> {
        if n <= 0 {
            return Err(MoneyError::invalid("split count must be positive"));
        }
        let too_many = || MoneyError::invalid("split count exceeds addressable parties");
        let count = usize::try_from(n).map_err(|_| too_many())?;

        let base = Calculator::divide(amount, n)?;
        let leftover = Calculator::modulus(amount, n)?;

        let mut parties = Vec::new();
        parties.try_reserve_exact(count).map_err(|_| too_many())?;
        parties.resize(count, base);
        Self::distribute(&mut parties, leftover)?;

        debug!(
            amount = amount.value(),
            parties = count,
            leftover = leftover.value(),
            "split amount"
        );
        Ok(parties)
    }

    /// Allocate `amount` proportionally to `ratios`.
    ///
    /// Results are returned in ratio order. Each result is within one minor
    /// unit of `amount * ratio / sum(ratios)`.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::money::AllocationUtil;
    /// use centum_shared::Amount;
    ///
    /// let parts = AllocationUtil::allocate(Amount::new(5), &[50, 25, 25]).unwrap();
    /// assert_eq!(parts, vec![Amount::new(3), Amount::new(1), Amount::new(1)]);
    /// ```
    pub fn allocate(amount: Amount, ratios: &[u32]) -> MoneyResult<Vec<Amount>> {
        if ratios.is_empty() {
            return Err(MoneyError::invalid("no ratios specified"));
        }

        let sum: u64 = ratios.iter().copied().map(u64::from).sum();
        if sum == 0 {
            return Err(MoneyError::invalid("ratios must not sum to zero"));
        }

        let mut parties = Vec::with_capacity(ratios.len());
        let mut total = Amount::ZERO;
        for &ratio in ratios {
            let share = Calculator::allocate(amount, ratio, sum)?;
            total = Calculator::add(total, share)?;
            parties.push(share);
        }

        let leftover = Calculator::subtract(amount, total)?;
        Self::distribute(&mut parties, leftover)?;

        debug!(
            amount = amount.value(),
            parties = parties.len(),
            leftover = leftover.value(),
            "allocated amount"
        );
        Ok(parties)
    }

    /// Adds one signed unit to each party in index order until `leftover` is spent.
    fn distribute(parties: &mut [Amount], leftover: Amount) -> MoneyResult<()> {
        let unit = Amount::new(leftover.value().signum());
        let units = usize::try_from(leftover.value().unsigned_abs())
            .map_err(|_| MoneyError::Overflow("distribute"))?;

        // |leftover| < parties.len() holds for truncating shares.
        debug_assert!(units < parties.len() || units == 0);

        for party in parties.iter_mut().take(units) {
            *party = Calculator::add(*party, unit)?;
        }
        Ok(())
    }
}
