//! Population-level constants shared by the binary integrator.
//!
//! Binary mass limits follow Matteucci & Greggio (1986), A&A 154, 279.

/// Lower limit of the total mass of a binary system (M☉)
pub const B_MIN: f64 = 3.0;

/// Upper limit of the total mass of a binary system (M☉)
pub const B_MAX: f64 = 16.0;

/// Minimum progenitor mass of a Type II supernova (M☉)
pub const M_SNII: f64 = 8.0;

/// Fraction of stars formed in binary systems
pub const BIN_FRACTION: f64 = 0.15;

/// Number of sub-intervals of the binary mass integrals
pub const N_INTERVALS: usize = 8;

/// Number of quadrature nodes (`N_INTERVALS + 1`, both ends included)
pub const N_POINTS: usize = N_INTERVALS + 1;

/// Closed Newton-Cotes weights for eight equal sub-intervals.
///
/// The weights sum to `N_INTERVALS`, so multiplying the weighted sum by the
/// node spacing integrates a constant exactly.
pub const WEIGHTS_N: [f64; N_POINTS] = [
    989.0 * 4.0 / 14175.0,
    5888.0 * 4.0 / 14175.0,
    -928.0 * 4.0 / 14175.0,
    10496.0 * 4.0 / 14175.0,
    -4540.0 * 4.0 / 14175.0,
    10496.0 * 4.0 / 14175.0,
    -928.0 * 4.0 / 14175.0,
    5888.0 * 4.0 / 14175.0,
    989.0 * 4.0 / 14175.0,
];
