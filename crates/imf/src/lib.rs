//! Initial mass functions for stellar populations.
//!
//! Every shape is exposed through the one-method [`InitialMassFunction`]
//! capability, which is all the binary-population integrals need.

pub mod error;
pub mod kind;
pub mod mass_function;
pub mod sampling;

#[cfg(test)]
mod mass_function_test;

pub use error::{ImfError, ImfResult};
pub use kind::ImfKind;
pub use mass_function::{Imf, ImfParams, InitialMassFunction};
pub use sampling::{sample_power_law, ImfSampler};
