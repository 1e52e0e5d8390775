//! Number density contributions of binary systems to the IMF.
//!
//! A binary of total mass `m_b` is split between its primary and its
//! secondary following the mass-fraction distribution of Greggio & Renzini
//! (1983), as used by Matteucci & Greggio (1986). The integrals over `m_b`
//! use the fixed nine-node rule in [`crate::constants::WEIGHTS_N`].

use imf::InitialMassFunction;
use serde::{Deserialize, Serialize};

use crate::constants::{B_MAX, B_MIN, BIN_FRACTION, M_SNII, N_INTERVALS, WEIGHTS_N};

/// Exponent of the secondary mass-fraction distribution
const GAMMA: f64 = 2.0;

/// Distribution of `mu = M_secondary / M_binary`.
///
/// `f(mu) = 2^(1+γ) (1+γ) mu^γ` with γ = 2, normalized over `(0, 1/2]`.
/// Only meaningful for `mu` in `(0, 1)`; the value is not guarded.
pub fn secondary_mass_fraction(mu: f64) -> f64 {
    2f64.powf(1.0 + GAMMA) * (1.0 + GAMMA) * mu.powf(GAMMA)
}

/// Binary mass limits and the fraction of stars born in binaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinaryPopulation {
    /// Smallest total binary mass (M☉)
    pub b_min: f64,
    /// Largest total binary mass (M☉)
    pub b_max: f64,
    /// Type II supernova threshold used to bound SN Ia progenitors (M☉)
    pub m_snii: f64,
    pub binary_fraction: f64,
}

impl Default for BinaryPopulation {
    fn default() -> Self {
        Self {
            b_min: B_MIN,
            b_max: B_MAX,
            m_snii: M_SNII,
            binary_fraction: BIN_FRACTION,
        }
    }
}

impl BinaryPopulation {
    /// Default mass limits with a custom binary fraction.
    pub fn with_binary_fraction(binary_fraction: f64) -> Self {
        Self {
            binary_fraction,
            ..Self::default()
        }
    }

    /// Whether `mass` lies in the binary-eligible range `[b_min, b_max]`.
    pub fn in_binary_range(&self, mass: f64) -> bool {
        (self.b_min..=self.b_max).contains(&mass)
    }

    /// Number density of binaries whose primary has mass `mass`.
    pub fn primary<I: InitialMassFunction + ?Sized>(&self, mass: f64, imf: &I) -> f64 {
        if mass <= 0.0 {
            return 0.0;
        }
        let b_inf = self.b_min.max(mass);
        let b_sup = self.b_max.min(2.0 * mass);

        self.integrate(b_inf, b_sup, |binary_mass| {
            secondary_mass_fraction(1.0 - mass / binary_mass) * imf.for_mass(binary_mass) * mass
                / binary_mass.powi(2)
        })
    }

    /// Number density of binaries whose secondary has mass `mass`.
    ///
    /// With `sn_ia_events` the total binary mass is capped at
    /// `m_snii + mass`, the systems able to end as Type Ia supernovae.
    pub fn secondary<I: InitialMassFunction + ?Sized>(
        &self,
        mass: f64,
        imf: &I,
        sn_ia_events: bool,
    ) -> f64 {
        if mass <= 0.0 {
            return 0.0;
        }
        let b_inf = self.b_min.max(2.0 * mass);
        let b_sup = if sn_ia_events {
            self.b_max.min(self.m_snii + mass)
        } else {
            self.b_max
        };

        self.integrate(b_inf, b_sup, |binary_mass| {
            secondary_mass_fraction(mass / binary_mass) * imf.for_mass(binary_mass) * mass
                / binary_mass.powi(2)
        })
    }

    /// Single stars plus primaries of binaries at `mass`.
    ///
    /// Inside the binary range the single-star term loses the binary
    /// fraction. Outside it the full IMF is kept and the primary term is
    /// still added.
    ///
    /// Only the single-star term follows `binary_fraction`. The primary
    /// term is always weighted with [`BIN_FRACTION`].
    pub fn imf_plus_primaries<I: InitialMassFunction + ?Sized>(&self, mass: f64, imf: &I) -> f64 {
        let single = if self.in_binary_range(mass) {
            imf.for_mass(mass) * (1.0 - self.binary_fraction)
        } else {
            imf.for_mass(mass)
        };
        let primaries = Self {
            binary_fraction: BIN_FRACTION,
            ..*self
        };
        single + primaries.primary(mass, imf)
    }

    fn integrate(&self, b_inf: f64, b_sup: f64, integrand: impl Fn(f64) -> f64) -> f64 {
        let step = (b_sup - b_inf) / N_INTERVALS as f64;
        if step <= 0.0 {
            return 0.0;
        }

        let sum: f64 = WEIGHTS_N
            .iter()
            .enumerate()
            .map(|(i, weight)| weight * integrand(b_inf + i as f64 * step))
            .sum();

        sum * step * self.binary_fraction
    }
}

/// Initial mass function for primary stars of binary systems.
pub fn imf_binary_primary<I: InitialMassFunction + ?Sized>(
    mass: f64,
    imf: &I,
    binary_fraction: f64,
) -> f64 {
    BinaryPopulation::with_binary_fraction(binary_fraction).primary(mass, imf)
}

/// Initial mass function for secondary stars of binary systems, optionally
/// restricted to Type Ia supernova progenitors.
pub fn imf_binary_secondary<I: InitialMassFunction + ?Sized>(
    mass: f64,
    imf: &I,
    sn_ia_events: bool,
    binary_fraction: f64,
) -> f64 {
    BinaryPopulation::with_binary_fraction(binary_fraction).secondary(mass, imf, sn_ia_events)
}

/// Initial mass function for single stars plus primaries of binaries.
///
/// `binary_fraction` only scales the single stars; see
/// [`BinaryPopulation::imf_plus_primaries`].
pub fn imf_plus_primaries<I: InitialMassFunction + ?Sized>(
    mass: f64,
    imf: &I,
    binary_fraction: f64,
) -> f64 {
    BinaryPopulation::with_binary_fraction(binary_fraction).imf_plus_primaries(mass, imf)
}
