mod error;
mod rational;

pub use error::RationalError;
pub use rational::RationalNumber;
