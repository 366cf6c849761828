//! Core divisor computations

pub mod factors;

pub use factors::{factors_for, factors_of, FactorMapping};
