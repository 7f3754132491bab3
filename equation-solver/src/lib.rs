mod domain;
pub mod equation;
mod helpers;
mod operand;

pub use domain::Domain;
pub use equation::{Equation, Operation, Slot};
pub use operand::{Operand, ParseOperandError};
pub use rational_number::{RationalError, RationalNumber};
