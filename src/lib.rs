mod level;
mod question;

pub use equation_solver::{
    Domain, Equation, Operand, Operation, ParseOperandError, RationalError, RationalNumber, Slot,
};
pub use level::Level;
pub use question::{Choice, Question};
