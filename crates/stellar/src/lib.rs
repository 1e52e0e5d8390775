//! Stellar population physics for galactic chemical evolution.
//!
//! Lifetimes and their inverse, binary-system corrections to the initial
//! mass function, and Type Ia supernova delay-time distributions.

pub mod binary;
pub mod constants;
pub mod dtd;
pub mod error;
pub mod lifetime;

#[cfg(test)]
mod dtd_test;
#[cfg(test)]
mod lifetime_test;

// Re-export types
pub use binary::BinaryPopulation;
pub use dtd::DelayTimeDistribution;
pub use error::{DomainError, DomainResult};
pub use lifetime::TauCoefficients;

// Re-export functions
pub use binary::{
    imf_binary_primary, imf_binary_secondary, imf_plus_primaries, secondary_mass_fraction,
};
pub use dtd::{dtd_mannucci_della_valle_panagia, dtd_ruiz_lapuente, total_energy_ejected};
pub use lifetime::{max_mass_allowed, stellar_lifetime, stellar_mass, tau_coefficients};
