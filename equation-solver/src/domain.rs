use std::fmt;

use derive_more::{Display, IsVariant};
use rational_number::{RationalError, RationalNumber};
use serde::{Deserialize, Serialize};

/// Numeric representation shared by the known slots of a solve attempt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant, Serialize, Deserialize,
)]
pub enum Domain {
    #[display(fmt = "floating")]
    Floating,
    #[display(fmt = "rational")]
    Rational,
}

/// Arithmetic the solver needs from a domain.
///
/// `None` means the operation has no value in this domain. Zero divisors are
/// rejected by the formulas before `checked_div` is reached.
pub(crate) trait DomainValue: Copy + fmt::Display {
    fn is_zero(&self) -> bool;

    /// Whether a known product may be divided back into one of its factors.
    fn accepts_product(&self) -> bool {
        true
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl DomainValue for f64 {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0.
    }

    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }
}

impl DomainValue for RationalNumber {
    #[inline]
    fn is_zero(&self) -> bool {
        RationalNumber::is_zero(self)
    }

    // A zero product is never divided back, even by a nonzero factor.
    fn accepts_product(&self) -> bool {
        !RationalNumber::is_zero(self)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        arithmetic(RationalNumber::checked_add(&self, &rhs), "+", self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        arithmetic(RationalNumber::checked_sub(&self, &rhs), "-", self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        arithmetic(RationalNumber::checked_mul(&self, &rhs), "*", self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        arithmetic(RationalNumber::checked_div(&self, &rhs), "/", self, rhs)
    }
}

fn arithmetic(
    result: Result<RationalNumber, RationalError>,
    symbol: &str,
    lhs: RationalNumber,
    rhs: RationalNumber,
) -> Option<RationalNumber> {
    result
        .map_err(|err| log::debug!("{lhs} {symbol} {rhs} has no rational value: {err}"))
        .ok()
}
