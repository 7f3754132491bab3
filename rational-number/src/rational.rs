use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::RationalError;

/// Exact fraction of two `i64`s.
///
/// A value is kept exactly as it was constructed (`4/6` stays `4/6`), but every
/// arithmetic result is reduced to lowest terms with a positive denominator.
/// Comparison and hashing go by value, so `4/6 == 2/3`.
///
/// `i64::MIN` is never stored in either part, so the sign can always be moved
/// between numerator and denominator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct RationalNumber(Ratio<i64>);

impl RationalNumber {
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self(Ratio::new_raw(narrow(numer.into())?, narrow(denom.into())?)))
    }

    #[inline]
    pub fn from_integer(integer: i64) -> Result<Self, RationalError> {
        Self::new(integer, 1)
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        *self.0.numer()
    }

    #[inline]
    pub fn denom(&self) -> i64 {
        *self.0.denom()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer().is_zero()
    }

    /// Lowest terms with a positive denominator; zero is only reduced as `0/1`.
    pub fn is_reduced(&self) -> bool {
        self.denom() > 0 && self.numer().gcd(&self.denom()).is_one()
    }

    /// Divides out the greatest common divisor and moves the sign to the numerator.
    pub fn reduce(&self) -> Self {
        Self(self.0.reduced())
    }

    pub fn recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self(Ratio::new_raw(self.denom(), self.numer())))
    }

    /// `(a.n * b.d + b.n * a.d) / (a.d * b.d)`
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_wide(a.0 * b.1 + b.0 * a.1, a.1 * b.1)
    }

    /// `(a.n * b.d - b.n * a.d) / (a.d * b.d)`
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_wide(a.0 * b.1 - b.0 * a.1, a.1 * b.1)
    }

    /// `(a.n * b.n) / (a.d * b.d)`
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, RationalError> {
        let (a, b) = (self.wide(), rhs.wide());
        Self::from_wide(a.0 * b.0, a.1 * b.1)
    }

    /// Multiplies by the reciprocal of `rhs`.
    ///
    /// Fails with [`RationalError::DivisionByZero`] when `rhs` has a zero numerator.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        self.checked_mul(&rhs.recip()?)
    }

    // Products of two parts fit in `i128`, and so does the sum of two products.
    #[inline]
    fn wide(&self) -> (i128, i128) {
        (self.numer().into(), self.denom().into())
    }

    /// Reduces an intermediate result and narrows it back to `i64` parts.
    fn from_wide(numer: i128, denom: i128) -> Result<Self, RationalError> {
        if denom.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let gcd = numer.gcd(&denom);
        let sign = denom.signum();
        Ok(Self(Ratio::new_raw(
            narrow(sign * numer / gcd)?,
            narrow(sign * denom / gcd)?,
        )))
    }
}

fn narrow(value: i128) -> Result<i64, RationalError> {
    i64::try_from(value)
        .ok()
        .filter(|value| *value != i64::MIN)
        .ok_or(RationalError::Overflow)
}

impl TryFrom<(i64, i64)> for RationalNumber {
    type Error = RationalError;

    fn try_from((numer, denom): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl From<RationalNumber> for (i64, i64) {
    fn from(value: RationalNumber) -> Self {
        (value.numer(), value.denom())
    }
}

impl fmt::Display for RationalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for RationalNumber {
    type Err = RationalError;

    /// Accepts `"n"` and `"n/d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (numer, denom) = match s.split_once('/') {
            Some((numer, denom)) => (numer.trim().parse()?, denom.trim().parse()?),
            None => (s.parse()?, 1),
        };
        Self::new(numer, denom)
    }
}

/// Operator forms of the checked arithmetic. Like `Ratio`, they panic on
/// division by zero and on overflow.
macro_rules! impl_checked_op {
    ($($imp: ident, $method: ident, $checked: ident, $symbol: literal);+ $(;)?) => {
        $(
            impl $imp for &RationalNumber {
                type Output = RationalNumber;

                fn $method(self, rhs: Self) -> Self::Output {
                    match self.$checked(rhs) {
                        Ok(value) => value,
                        Err(err) => panic!("{} {} {}: {}", self, $symbol, rhs, err),
                    }
                }
            }

            impl $imp for RationalNumber {
                type Output = RationalNumber;

                #[inline]
                fn $method(self, rhs: Self) -> Self::Output {
                    $imp::$method(&self, &rhs)
                }
            }
        )+
    };
}

impl_checked_op!(
    Add, add, checked_add, "+";
    Sub, sub, checked_sub, "-";
    Mul, mul, checked_mul, "*";
    Div, div, checked_div, "/";
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn rational(numer: i64, denom: i64) -> RationalNumber {
        RationalNumber::new(numer, denom).unwrap()
    }

    #[test]
    fn new_rejects_zero_denominator() {
        assert_eq!(
            RationalNumber::new(3, 0),
            Err(RationalError::ZeroDenominator)
        );
    }

    #[test]
    fn new_keeps_fraction_as_given() {
        let value = rational(4, 6);

        assert_eq!((value.numer(), value.denom()), (4, 6));
        assert!(!value.is_reduced());
        assert_eq!(value, rational(2, 3));
    }

    #[test]
    fn reduce_collapses_zero_to_one_denominator() {
        let value = rational(0, -5).reduce();

        assert_eq!((value.numer(), value.denom()), (0, 1));
    }

    #[test]
    fn reduce_keeps_denominator_positive() {
        let value = rational(3, -6).reduce();

        assert_eq!((value.numer(), value.denom()), (-1, 2));
    }

    #[test]
    fn mul_reduces_result() {
        let product = rational(2, 3).checked_mul(&rational(4, 6)).unwrap();

        assert_eq!((product.numer(), product.denom()), (4, 9));
    }

    #[test]
    fn add_reduces_result() {
        let sum = rational(1, 6) + rational(1, 3);

        assert_eq!((sum.numer(), sum.denom()), (1, 2));
    }

    #[test]
    fn sub_to_zero_has_unit_denominator() {
        let difference = rational(2, 5) - rational(4, 10);

        assert_eq!((difference.numer(), difference.denom()), (0, 1));
    }

    #[test]
    fn div_multiplies_by_reciprocal() {
        let quotient = rational(1, 3).checked_div(&rational(-1, 2)).unwrap();

        assert_eq!((quotient.numer(), quotient.denom()), (-2, 3));
    }

    #[test]
    fn div_by_zero_numerator_fails() {
        assert_eq!(
            rational(1, 2).checked_div(&rational(0, 7)),
            Err(RationalError::DivisionByZero)
        );
        assert_eq!(rational(0, 7).recip(), Err(RationalError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "division by a rational with zero numerator")]
    fn div_operator_panics_on_zero() {
        let _ = rational(1, 2) / rational(0, 1);
    }

    #[test]
    fn overflow_is_reported() {
        let max = RationalNumber::from_integer(i64::MAX).unwrap();
        let one = RationalNumber::from_integer(1).unwrap();

        assert_eq!(max.checked_add(&one), Err(RationalError::Overflow));
        assert_eq!(
            max.checked_mul(&RationalNumber::from_integer(2).unwrap()),
            Err(RationalError::Overflow)
        );
        assert_eq!(
            RationalNumber::from_integer(-i64::MAX).unwrap().checked_sub(&one),
            Err(RationalError::Overflow)
        );
    }

    #[test]
    fn minimum_integer_is_rejected() {
        assert_eq!(RationalNumber::new(1, i64::MIN), Err(RationalError::Overflow));
        assert_eq!(RationalNumber::new(i64::MIN, 1), Err(RationalError::Overflow));
        assert_eq!(RationalNumber::from_integer(i64::MIN), Err(RationalError::Overflow));
        assert!(serde_json::from_str::<RationalNumber>("[1,-9223372036854775808]").is_err());
    }

    #[test]
    fn wide_parts_reduce_without_panicking() {
        let a = rational(1, -(1 << 32));
        let b = rational(-1, 1 << 31);

        let sum = a.checked_add(&b).unwrap();
        assert_eq!((sum.numer(), sum.denom()), (-3, 1 << 32));

        let big = rational(i64::MAX, 2);
        let product = big.checked_mul(&rational(2, i64::MAX)).unwrap();
        assert_eq!((product.numer(), product.denom()), (1, 1));
        assert_eq!(big.reduce(), big);
    }

    #[test]
    fn display() {
        assert_eq!(RationalNumber::from_integer(5).unwrap().to_string(), "5");
        assert_eq!(rational(3, 4).to_string(), "3/4");
        assert_eq!(rational(-3, 4).to_string(), "-3/4");
    }

    #[test]
    fn parse() {
        assert_eq!("3/4".parse::<RationalNumber>(), Ok(rational(3, 4)));
        assert_eq!(" -2 ".parse::<RationalNumber>(), Ok(rational(-2, 1)));
        assert_eq!(" 1 / 2".parse::<RationalNumber>(), Ok(rational(1, 2)));
        assert_eq!(
            "1/0".parse::<RationalNumber>(),
            Err(RationalError::ZeroDenominator)
        );
        assert!(matches!(
            "a/b".parse::<RationalNumber>(),
            Err(RationalError::Parse(_))
        ));
    }

    #[test]
    fn serde_uses_numerator_denominator_pair() {
        let json = serde_json::to_string(&rational(4, 6)).unwrap();
        assert_eq!(json, "[4,6]");

        let value: RationalNumber = serde_json::from_str("[4,6]").unwrap();
        assert_eq!((value.numer(), value.denom()), (4, 6));

        assert!(serde_json::from_str::<RationalNumber>("[1,0]").is_err());
    }

    fn any_denom() -> impl Strategy<Value = i64> {
        prop_oneof![-10_000i64..0, 1i64..10_000]
    }

    fn any_rational() -> impl Strategy<Value = RationalNumber> {
        (-10_000i64..10_000, any_denom()).prop_map(|(numer, denom)| rational(numer, denom))
    }

    fn nonzero_rational() -> impl Strategy<Value = RationalNumber> {
        (any_denom(), any_denom()).prop_map(|(numer, denom)| rational(numer, denom))
    }

    proptest! {
        #[test]
        fn reduce_yields_lowest_terms(value in any_rational()) {
            let reduced = value.reduce();

            prop_assert!(reduced.is_reduced());
            prop_assert_eq!(reduced, value);
            if value.is_zero() {
                prop_assert_eq!(reduced.denom(), 1);
            }
        }

        #[test]
        fn add_then_sub_round_trips(a in any_rational(), b in any_rational()) {
            let sum = a.checked_add(&b).unwrap();
            let back = sum.checked_sub(&b).unwrap();

            prop_assert!(sum.is_reduced());
            prop_assert_eq!((back.numer(), back.denom()), (a.reduce().numer(), a.reduce().denom()));
        }

        #[test]
        fn mul_then_div_round_trips(a in any_rational(), b in nonzero_rational()) {
            let product = a.checked_mul(&b).unwrap();
            let back = product.checked_div(&b).unwrap();

            prop_assert!(product.is_reduced());
            prop_assert_eq!((back.numer(), back.denom()), (a.reduce().numer(), a.reduce().denom()));
        }

        #[test]
        fn operators_match_checked_forms(a in any_rational(), b in nonzero_rational()) {
            prop_assert_eq!(a + b, a.checked_add(&b).unwrap());
            prop_assert_eq!(a - b, a.checked_sub(&b).unwrap());
            prop_assert_eq!(a * b, a.checked_mul(&b).unwrap());
            prop_assert_eq!(a / b, a.checked_div(&b).unwrap());
        }
    }
}
