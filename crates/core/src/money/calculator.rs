//! Integer arithmetic on a single `Amount`.
//!
//! No currency awareness lives here. Every operation is a pure function that
//! returns a fresh `Amount`; 64-bit overflow is reported instead of wrapping.

use centum_shared::{Amount, MoneyError, MoneyResult};

/// Largest exponent for which `10^e` fits in an `i128`.
const MAX_ROUND_EXPONENT: u32 = 38;

/// Arithmetic core for minor-unit amounts.
pub struct Calculator;

impl Calculator {
    /// `a + b`.
    pub fn add(a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.value()
            .checked_add(b.value())
            .map(Amount::new)
            .ok_or(MoneyError::Overflow("add"))
    }

    /// `a - b`.
    pub fn subtract(a: Amount, b: Amount) -> MoneyResult<Amount> {
        a.value()
            .checked_sub(b.value())
            .map(Amount::new)
            .ok_or(MoneyError::Overflow("subtract"))
    }

    /// `a * m`. Zero and negative multipliers are allowed.
    pub fn multiply(a: Amount, m: i64) -> MoneyResult<Amount> {
        a.value()
            .checked_mul(m)
            .map(Amount::new)
            .ok_or(MoneyError::Overflow("multiply"))
    }

    /// `a / d`, truncating toward zero.
    pub fn divide(a: Amount, d: i64) -> MoneyResult<Amount> {
        if d == 0 {
            return Err(MoneyError::invalid("division by zero"));
        }
        a.value()
            .checked_div(d)
            .map(Amount::new)
            .ok_or(MoneyError::Overflow("divide"))
    }

    /// `a % d`. The remainder takes the sign of the dividend.
    pub fn modulus(a: Amount, d: i64) -> MoneyResult<Amount> {
        if d == 0 {
            return Err(MoneyError::invalid("division by zero"));
        }
        a.value()
            .checked_rem(d)
            .map(Amount::new)
            .ok_or(MoneyError::Overflow("modulus"))
    }

    /// Raw share `a * r / s`, truncating toward zero.
    ///
    /// The product is taken in 128 bits. With `r <= s` the result magnitude
    /// never exceeds `|a|`, so the sum of raw shares never overshoots.
    pub fn allocate(a: Amount, r: u32, s: u64) -> MoneyResult<Amount> {
        if s == 0 {
            return Err(MoneyError::invalid("ratios must not sum to zero"));
        }
        let share = i128::from(a.value()) * i128::from(r) / i128::from(s);
        i64::try_from(share)
            .map(Amount::new)
            .map_err(|_| MoneyError::Overflow("allocate"))
    }

    /// `|a|`. `i64::MIN` saturates to `i64::MAX`.
    #[must_use]
    pub const fn absolute(a: Amount) -> Amount {
        Amount::new(a.value().saturating_abs())
    }

    /// `-|a|`. Zero stays zero.
    #[must_use]
    pub const fn negative(a: Amount) -> Amount {
        if a.value() > 0 {
            Amount::new(-a.value())
        } else {
            a
        }
    }

    /// Rounds the magnitude of `a` to a multiple of `10^e`, then reapplies the sign.
    ///
    /// Only a remainder strictly greater than half of `10^e` rounds up; an
    /// exact half truncates down.
    ///
    /// ```
    /// use centum_core::money::Calculator;
    /// use centum_shared::Amount;
    ///
    /// let rounded = Calculator::round(Amount::new(-75), 2).unwrap();
    /// assert_eq!(rounded, Amount::new(-100));
    /// ```
    pub fn round(a: Amount, e: u32) -> MoneyResult<Amount> {
        if a.is_zero() {
            return Ok(Amount::ZERO);
        }
        if e > MAX_ROUND_EXPONENT {
            return Err(MoneyError::invalid(format!(
                "rounding exponent {e} exceeds {MAX_ROUND_EXPONENT}"
            )));
        }

        let exp = 10_i128.pow(e);
        let mut magnitude = i128::from(a.value()).abs();
        if magnitude % exp > exp / 2 {
            magnitude += exp;
        }
        magnitude = magnitude / exp * exp;

        let signed = if a.is_negative() {
            -magnitude
        } else {
            magnitude
        };
        i64::try_from(signed)
            .map(Amount::new)
            .map_err(|_| MoneyError::Overflow("round"))
    }
}
