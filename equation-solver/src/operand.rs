use std::{fmt, num::ParseFloatError};

use derive_more::{Display, Error, IsVariant};
use rational_number::{RationalError, RationalNumber};
use serde::{Deserialize, Serialize};

use crate::{helpers::f64_rounded_string, Domain};

/// Digits kept when a floating operand is rendered.
const DISPLAY_PRECISION: usize = 6;

/// A value slot of an equation.
///
/// Equality is structural: `Floating(0.5)` and `Rational(1/2)` are different operands.
#[derive(Debug, Clone, Copy, PartialEq, IsVariant, Serialize, Deserialize)]
pub enum Operand {
    Floating(f64),
    Rational(RationalNumber),
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseOperandError {
    #[display(fmt = "invalid floating operand: {}", _0)]
    Floating(#[error(source)] ParseFloatError),
    #[display(fmt = "invalid rational operand: {}", _0)]
    Rational(#[error(source)] RationalError),
}

impl Operand {
    #[inline]
    pub const fn from_floating(value: f64) -> Self {
        Self::Floating(value)
    }

    pub fn from_rational(numer: i64, denom: i64) -> Result<Self, RationalError> {
        RationalNumber::new(numer, denom).map(Self::Rational)
    }

    /// Parses `text` as a value of `domain`: a decimal for floating operands,
    /// `n` or `n/d` for rational ones.
    pub fn parse_in(domain: Domain, text: &str) -> Result<Self, ParseOperandError> {
        match domain {
            Domain::Floating => text
                .trim()
                .parse()
                .map(Self::Floating)
                .map_err(ParseOperandError::Floating),
            Domain::Rational => text
                .parse()
                .map(Self::Rational)
                .map_err(ParseOperandError::Rational),
        }
    }

    pub const fn domain(&self) -> Domain {
        match self {
            Self::Floating(_) => Domain::Floating,
            Self::Rational(_) => Domain::Rational,
        }
    }

    pub const fn as_floating(&self) -> Option<f64> {
        if let Self::Floating(value) = self {
            return Some(*value);
        }
        None
    }

    pub const fn as_rational(&self) -> Option<&RationalNumber> {
        if let Self::Rational(value) = self {
            return Some(value);
        }
        None
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Floating(value)
    }
}

impl From<RationalNumber> for Operand {
    #[inline]
    fn from(value: RationalNumber) -> Self {
        Self::Rational(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Floating(value) => f.write_str(&f64_rounded_string(value, DISPLAY_PRECISION)),
            Self::Rational(value) => write!(f, "{value}"),
        }
    }
}
