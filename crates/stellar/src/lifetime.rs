//! Stellar lifetimes as a function of mass and metallicity.
//!
//! Empirical fit from Raiteri, Villata & Navarro (1996), A&A 315, 105:
//!
//! ```text
//! log τ[yr] = a0(Z) + a1(Z) log M + a2(Z) (log M)²
//! ```
//!
//! Each coefficient is itself quadratic in log Z. Lifetimes are returned in
//! Gyr, masses in solar masses.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Years in a Gyr, as a base-10 exponent
const LOG_YEARS_PER_GYR: f64 = 9.0;

/// Decimal digits kept by [`stellar_mass`]
const MASS_DECIMALS: i32 = 10;

/// Metallicity-dependent coefficients of the log τ polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TauCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl TauCoefficients {
    /// log10 of the lifetime in years for a star of `log_m = log10(M)`.
    pub fn log_tau(&self, log_m: f64) -> f64 {
        self.a0 + self.a1 * log_m + self.a2 * log_m.powi(2)
    }

    /// log10 of the mass where d(log τ)/d(log M) = 0.
    pub fn turning_point(&self) -> f64 {
        -self.a1 / (2.0 * self.a2)
    }
}

/// Coefficients of the lifetime polynomial for metallicity `z`.
///
/// # Errors
/// [`DomainError::NonPositiveMetallicity`] when `z <= 0`. Zero metallicity is
/// only meaningful for [Fe/H], not for the lifetime fit.
pub fn tau_coefficients(z: f64) -> DomainResult<TauCoefficients> {
    if z <= 0.0 || z.is_nan() {
        return Err(DomainError::NonPositiveMetallicity(z));
    }

    let log_z = z.log10();
    let log_z2 = log_z.powi(2);

    Ok(TauCoefficients {
        a0: 10.13 + 0.07547 * log_z - 0.008084 * log_z2,
        a1: -4.424 - 0.7939 * log_z - 0.1187 * log_z2,
        a2: 1.262 + 0.3385 * log_z + 0.05417 * log_z2,
    })
}

/// Main sequence lifetime in Gyr of a star of `mass` M☉ and metallicity `z`.
///
/// The mass is not checked against [`max_mass_allowed`]; above it the fit
/// turns over and lifetimes grow again with mass.
///
/// # Example
/// ```
/// use stellar::lifetime::stellar_lifetime;
///
/// let sun = stellar_lifetime(1.0, 0.02).unwrap();
/// assert!(sun > 9.0 && sun < 10.0);
/// ```
pub fn stellar_lifetime(mass: f64, z: f64) -> DomainResult<f64> {
    if mass <= 0.0 || mass.is_nan() {
        return Err(DomainError::NonPositiveMass(mass));
    }
    let coefficients = tau_coefficients(z)?;
    let log_tau = coefficients.log_tau(mass.log10());

    Ok(10f64.powf(log_tau - LOG_YEARS_PER_GYR))
}

/// Mass in M☉ of a star whose lifetime is `tau` Gyr at metallicity `z`.
///
/// Inverts the lifetime polynomial and always takes the smaller root, the
/// branch valid below [`max_mass_allowed`]. The result is rounded to ten
/// decimal digits (ties to even) so that the same lifetime grid yields the
/// same masses on every platform.
///
/// # Errors
/// * [`DomainError::NonPositiveLifetime`] when `tau <= 0`
/// * [`DomainError::NegativeDiscriminant`] when `tau` is shorter than the
///   shortest lifetime the fit reaches at this metallicity
pub fn stellar_mass(tau: f64, z: f64) -> DomainResult<f64> {
    if tau <= 0.0 || tau.is_nan() {
        return Err(DomainError::NonPositiveLifetime(tau));
    }
    let TauCoefficients { a0, a1, a2 } = tau_coefficients(z)?;
    let log_tau = (tau * 1e9).log10();

    let discriminant = a1.powi(2) - 4.0 * a2 * (a0 - log_tau);
    if discriminant < 0.0 {
        return Err(DomainError::NegativeDiscriminant {
            tau,
            z,
            discriminant,
        });
    }
    let log_mass_minus = (-a1 - discriminant.sqrt()) / (2.0 * a2);

    Ok(round_to_decimals(10f64.powf(log_mass_minus), MASS_DECIMALS))
}

/// Upper mass limit (M☉, floored to an integer) of the lifetime fit.
///
/// Past the turning point the fitted lifetime increases with mass, so the
/// relation is no longer invertible. Settings use this to clamp `m_max`.
pub fn max_mass_allowed(z: f64) -> DomainResult<f64> {
    let coefficients = tau_coefficients(z)?;
    Ok(10f64.powf(coefficients.turning_point()).floor())
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}
