use crate::proto::Money;

// ============================================================================
// Money Arithmetic
// ============================================================================
//
// Exact fixed-point arithmetic over wire Money values (whole units plus
// 10^-9 fractional nanos). All operations are integer-only so totals are
// bit-identical across platforms; binary floating point is never involved.
//
// Invariants assumed by every operation:
// - |nanos| < 1_000_000_000
// - units and nanos agree in sign whenever both are non-zero
//
// Violations are reported as MoneyError::InvalidValue. They indicate an
// upstream bug, not a recoverable runtime state.
//
// ============================================================================

const NANOS_MOD: i64 = 1_000_000_000;
const NANOS_MIN: i32 = -999_999_999;
const NANOS_MAX: i32 = 999_999_999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("mismatching currency codes: {0} vs {1}")]
    CurrencyMismatch(String, String),

    #[error("invalid money value")]
    InvalidValue,

    #[error("money arithmetic overflow")]
    ArithmeticOverflow,
}

/// A zero-valued amount in the given currency.
pub fn zero(currency_code: impl Into<String>) -> Money {
    Money {
        currency_code: currency_code.into(),
        units: 0,
        nanos: 0,
    }
}

/// Checks the nanos-range and sign-consistency invariants.
pub fn is_valid(m: &Money) -> bool {
    (NANOS_MIN..=NANOS_MAX).contains(&m.nanos) && sign_matches(m)
}

fn sign_matches(m: &Money) -> bool {
    m.nanos == 0 || m.units == 0 || (m.nanos < 0) == (m.units < 0)
}

/// Adds two values of the same currency.
///
/// Nanos are added with a sign-aware carry: when the combined fraction
/// reaches a whole unit it is carried into `units`; when the partial sums
/// disagree in sign, one unit is borrowed so the result satisfies the sign
/// invariant again.
pub fn sum(l: &Money, r: &Money) -> Result<Money, MoneyError> {
    if !is_valid(l) || !is_valid(r) {
        return Err(MoneyError::InvalidValue);
    }
    if l.currency_code != r.currency_code {
        return Err(MoneyError::CurrencyMismatch(
            l.currency_code.clone(),
            r.currency_code.clone(),
        ));
    }

    let mut units = l
        .units
        .checked_add(r.units)
        .ok_or(MoneyError::ArithmeticOverflow)?;
    let mut nanos = i64::from(l.nanos) + i64::from(r.nanos);

    if (units == 0 && nanos == 0)
        || (units > 0 && nanos >= 0)
        || (units < 0 && nanos <= 0)
    {
        // same sign: carry whole units out of the fraction
        units = units
            .checked_add(nanos / NANOS_MOD)
            .ok_or(MoneyError::ArithmeticOverflow)?;
        nanos %= NANOS_MOD;
    } else {
        // different sign: borrow one unit; nanos cannot leave its range here
        if units > 0 {
            units -= 1;
            nanos += NANOS_MOD;
        } else {
            units += 1;
            nanos -= NANOS_MOD;
        }
    }

    Ok(Money {
        currency_code: l.currency_code.clone(),
        units,
        nanos: nanos as i32,
    })
}

/// Multiplies a value by a non-negative integer quantity, exactly.
///
/// The value is widened to a single i128 nanos count, multiplied, and split
/// back into `(units, nanos)`. A result whose units no longer fit in i64 is
/// an overflow, reported rather than wrapped.
pub fn multiply_slow(m: &Money, quantity: u32) -> Result<Money, MoneyError> {
    if !is_valid(m) {
        return Err(MoneyError::InvalidValue);
    }

    let total_nanos =
        (i128::from(m.units) * i128::from(NANOS_MOD) + i128::from(m.nanos))
            * i128::from(quantity);

    let units = i64::try_from(total_nanos / i128::from(NANOS_MOD))
        .map_err(|_| MoneyError::ArithmeticOverflow)?;
    let nanos = (total_nanos % i128::from(NANOS_MOD)) as i32;

    Ok(Money {
        currency_code: m.currency_code.clone(),
        units,
        nanos,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(units: i64, nanos: i32) -> Money {
        Money {
            currency_code: "USD".to_string(),
            units,
            nanos,
        }
    }

    #[test]
    fn test_valid_values() {
        assert!(is_valid(&usd(0, 0)));
        assert!(is_valid(&usd(10, 500_000_000)));
        assert!(is_valid(&usd(-10, -500_000_000)));
        assert!(is_valid(&usd(0, 999_999_999)));
        assert!(is_valid(&usd(0, -999_999_999)));
        assert!(is_valid(&usd(7, 0)));
    }

    #[test]
    fn test_invalid_values() {
        // nanos out of range
        assert!(!is_valid(&usd(0, 1_000_000_000)));
        assert!(!is_valid(&usd(0, -1_000_000_000)));
        // sign disagreement
        assert!(!is_valid(&usd(1, -1)));
        assert!(!is_valid(&usd(-1, 1)));
    }

    #[test]
    fn test_sum_carries_across_nanos_boundary() {
        // 10.50 + 5.75 = 16.25
        let total = sum(&usd(10, 500_000_000), &usd(5, 750_000_000)).unwrap();
        assert_eq!(total, usd(16, 250_000_000));
    }

    #[test]
    fn test_sum_without_carry() {
        let total = sum(&usd(1, 100_000_000), &usd(2, 200_000_000)).unwrap();
        assert_eq!(total, usd(3, 300_000_000));
    }

    #[test]
    fn test_sum_zero_identity() {
        let a = usd(12, 340_000_000);
        assert_eq!(sum(&a, &zero("USD")).unwrap(), a);
    }

    #[test]
    fn test_sum_is_commutative() {
        let a = usd(10, 900_000_000);
        let b = usd(3, 200_000_000);
        assert_eq!(sum(&a, &b).unwrap(), sum(&b, &a).unwrap());
    }

    #[test]
    fn test_sum_is_associative() {
        let a = usd(1, 999_999_999);
        let b = usd(2, 1);
        let c = usd(-1, -500_000_000);
        let left = sum(&sum(&a, &b).unwrap(), &c).unwrap();
        let right = sum(&a, &sum(&b, &c).unwrap()).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_sum_mixed_signs_borrows_a_unit() {
        // 5.25 + (-0.50) = 4.75
        let total = sum(&usd(5, 250_000_000), &usd(0, -500_000_000)).unwrap();
        assert_eq!(total, usd(4, 750_000_000));
        assert!(is_valid(&total));

        // -5.25 + 0.50 = -4.75
        let total = sum(&usd(-5, -250_000_000), &usd(0, 500_000_000)).unwrap();
        assert_eq!(total, usd(-4, -750_000_000));
        assert!(is_valid(&total));
    }

    #[test]
    fn test_sum_cancels_to_zero() {
        let total = sum(&usd(3, 140_000_000), &usd(-3, -140_000_000)).unwrap();
        assert_eq!(total, usd(0, 0));
    }

    #[test]
    fn test_sum_currency_mismatch() {
        let eur = Money {
            currency_code: "EUR".to_string(),
            units: 1,
            nanos: 0,
        };
        let err = sum(&usd(1, 0), &eur).unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch("USD".to_string(), "EUR".to_string())
        );
    }

    #[test]
    fn test_sum_rejects_invalid_operand() {
        let err = sum(&usd(1, -1), &usd(1, 0)).unwrap_err();
        assert_eq!(err, MoneyError::InvalidValue);
        let err = sum(&usd(1, 0), &usd(0, 1_000_000_000)).unwrap_err();
        assert_eq!(err, MoneyError::InvalidValue);
    }

    #[test]
    fn test_sum_unit_overflow() {
        let err = sum(&usd(i64::MAX, 0), &usd(1, 0)).unwrap_err();
        assert_eq!(err, MoneyError::ArithmeticOverflow);
    }

    #[test]
    fn test_sum_carry_overflow() {
        let err = sum(&usd(i64::MAX, 999_999_999), &usd(0, 999_999_999)).unwrap_err();
        assert_eq!(err, MoneyError::ArithmeticOverflow);
    }

    #[test]
    fn test_multiply_by_zero_and_one() {
        let a = usd(7, 890_000_000);
        assert_eq!(multiply_slow(&a, 0).unwrap(), zero("USD"));
        assert_eq!(multiply_slow(&a, 1).unwrap(), a);
    }

    #[test]
    fn test_multiply_exact_example() {
        // 2.99 * 3 = 8.97
        let total = multiply_slow(&usd(2, 990_000_000), 3).unwrap();
        assert_eq!(total, usd(8, 970_000_000));
    }

    #[test]
    fn test_multiply_matches_repeated_sum() {
        let a = usd(1, 999_999_999);
        let repeated = sum(&sum(&a, &a).unwrap(), &a).unwrap();
        assert_eq!(multiply_slow(&a, 3).unwrap(), repeated);
    }

    #[test]
    fn test_multiply_negative_value() {
        // -1.50 * 4 = -6.00
        let total = multiply_slow(&usd(-1, -500_000_000), 4).unwrap();
        assert_eq!(total, usd(-6, 0));
        assert!(is_valid(&total));
    }

    #[test]
    fn test_multiply_overflow() {
        let err = multiply_slow(&usd(i64::MAX, 0), 2).unwrap_err();
        assert_eq!(err, MoneyError::ArithmeticOverflow);
    }

    #[test]
    fn test_multiply_rejects_invalid_operand() {
        let err = multiply_slow(&usd(-1, 1), 2).unwrap_err();
        assert_eq!(err, MoneyError::InvalidValue);
    }
}
