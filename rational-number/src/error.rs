use std::num::ParseIntError;

use derive_more::{Display, Error};

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RationalError {
    #[display(fmt = "denominator must not be zero")]
    ZeroDenominator,
    #[display(fmt = "division by a rational with zero numerator")]
    DivisionByZero,
    #[display(fmt = "integer overflow in rational arithmetic")]
    Overflow,
    #[display(fmt = "invalid rational literal: {}", _0)]
    Parse(#[error(source)] ParseIntError),
}

impl From<ParseIntError> for RationalError {
    fn from(err: ParseIntError) -> Self {
        Self::Parse(err)
    }
}
