use derive_more::{Display, IsVariant};
use serde::{Deserialize, Serialize};

use crate::domain::DomainValue;

use super::Slot;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant, Serialize, Deserialize,
)]
pub enum Operation {
    #[display(fmt = "+")]
    Addition,
    #[display(fmt = "-")]
    Subtraction,
    #[display(fmt = "*")]
    Multiplication,
    #[display(fmt = "/")]
    Division,
}

impl Operation {
    /// Computes the `unknown` slot from the other two, passed in slot order
    /// (operand1, operand2, result).
    pub(crate) fn apply<T: DomainValue>(self, unknown: Slot, a: T, b: T) -> Option<T> {
        match unknown {
            Slot::Result => self.forward(a, b),
            Slot::Operand2 => self.solve_operand2(a, b),
            Slot::Operand1 => self.solve_operand1(a, b),
        }
    }

    /// `r = x op y`
    fn forward<T: DomainValue>(self, x: T, y: T) -> Option<T> {
        match self {
            Self::Addition => x.checked_add(y),
            Self::Subtraction => x.checked_sub(y),
            Self::Multiplication => x.checked_mul(y),
            Self::Division => x.checked_div(nonzero(y)?),
        }
    }

    /// `y` from `x op y = r`
    fn solve_operand2<T: DomainValue>(self, x: T, r: T) -> Option<T> {
        match self {
            Self::Addition => r.checked_sub(x),
            Self::Subtraction => x.checked_sub(r),
            Self::Multiplication if r.accepts_product() => r.checked_div(nonzero(x)?),
            Self::Multiplication => None,
            Self::Division => x.checked_div(nonzero(r)?),
        }
    }

    /// `x` from `x op y = r`
    fn solve_operand1<T: DomainValue>(self, y: T, r: T) -> Option<T> {
        match self {
            Self::Addition => r.checked_sub(y),
            Self::Subtraction => r.checked_add(y),
            Self::Multiplication if r.accepts_product() => r.checked_div(nonzero(y)?),
            Self::Multiplication => None,
            Self::Division => r.checked_mul(nonzero(y)?),
        }
    }
}

#[inline]
fn nonzero<T: DomainValue>(value: T) -> Option<T> {
    (!value.is_zero()).then_some(value)
}
