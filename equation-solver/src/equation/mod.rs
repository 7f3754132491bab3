mod operation;
mod solve;

use std::fmt;

use derive_more::{Display, IsVariant};
use derive_new::new;
use serde::{Deserialize, Serialize};

pub use operation::Operation;

use crate::Operand;

/// One of the three value slots of an equation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant, Serialize, Deserialize,
)]
pub enum Slot {
    #[display(fmt = "operand1")]
    Operand1,
    #[display(fmt = "operand2")]
    Operand2,
    #[display(fmt = "result")]
    Result,
}

/// `operand1 <operation> operand2 = result` with at most one slot unknown.
///
/// Callers are expected to fill exactly two slots. An equation with fewer
/// known slots has no solution, and a redundant `result` is never checked
/// against the operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct Equation {
    operation: Operation,
    operand1: Option<Operand>,
    operand2: Option<Operand>,
    result: Option<Operand>,
}

impl Equation {
    #[inline]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[inline]
    pub const fn operand1(&self) -> Option<&Operand> {
        self.operand1.as_ref()
    }

    #[inline]
    pub const fn operand2(&self) -> Option<&Operand> {
        self.operand2.as_ref()
    }

    #[inline]
    pub const fn result(&self) -> Option<&Operand> {
        self.result.as_ref()
    }

    pub const fn slot(&self, slot: Slot) -> Option<&Operand> {
        match slot {
            Slot::Operand1 => self.operand1(),
            Slot::Operand2 => self.operand2(),
            Slot::Result => self.result(),
        }
    }

    /// The unknown slot, if exactly one slot is empty.
    pub fn missing_slot(&self) -> Option<Slot> {
        match (&self.operand1, &self.operand2, &self.result) {
            (None, Some(_), Some(_)) => Some(Slot::Operand1),
            (Some(_), None, Some(_)) => Some(Slot::Operand2),
            (Some(_), Some(_), None) => Some(Slot::Result),
            _ => None,
        }
    }
}

impl fmt::Display for Equation {
    /// Renders empty slots as `x`, e.g. `x * 5 = 25`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |operand: Option<&Operand>| {
            operand.map_or_else(|| "x".to_owned(), Operand::to_string)
        };
        write!(
            f,
            "{} {} {} = {}",
            slot(self.operand1()),
            self.operation,
            slot(self.operand2()),
            slot(self.result())
        )
    }
}
