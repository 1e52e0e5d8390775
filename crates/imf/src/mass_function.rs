use serde::{Deserialize, Serialize};

use crate::error::{ImfError, ImfResult};
use crate::kind::ImfKind;

/// Steps of the log-space Simpson rule used for normalization (even)
const NORMALIZATION_STEPS: usize = 2000;

/// Number density of stars per unit mass at a given mass.
pub trait InitialMassFunction {
    fn for_mass(&self, mass: f64) -> f64;
}

impl<F: Fn(f64) -> f64> InitialMassFunction for F {
    fn for_mass(&self, mass: f64) -> f64 {
        self(mass)
    }
}

/// Slope and mass limits of an IMF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImfParams {
    /// Salpeter slope
    pub alpha: f64,
    /// Lowest stellar mass formed (M☉)
    pub m_low: f64,
    /// Highest stellar mass formed (M☉)
    pub m_up: f64,
}

impl Default for ImfParams {
    fn default() -> Self {
        Self {
            alpha: 2.35,
            m_low: 0.15,
            m_up: 100.0,
        }
    }
}

/// An IMF normalized to one solar mass of stars formed.
///
/// `∫ m φ(m) dm = 1` over `[m_low, m_up]`, and `φ` is zero outside it.
///
/// # Example
/// ```
/// use imf::{Imf, ImfKind, ImfParams, InitialMassFunction};
///
/// let kroupa = Imf::new(ImfKind::Kroupa, ImfParams::default()).unwrap();
/// assert!(kroupa.for_mass(1.0) > kroupa.for_mass(10.0));
/// assert_eq!(kroupa.for_mass(200.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imf {
    kind: ImfKind,
    params: ImfParams,
    normalization: f64,
}

impl Imf {
    pub fn new(kind: ImfKind, params: ImfParams) -> ImfResult<Self> {
        let ImfParams { m_low, m_up, .. } = params;
        if !(m_low > 0.0 && m_up > m_low && m_up.is_finite()) {
            return Err(ImfError::InvalidMassRange { m_low, m_up });
        }

        let raw_mass = log_simpson(
            |m| m * kind.shape(m, params.alpha),
            m_low,
            m_up,
            NORMALIZATION_STEPS,
        );

        Ok(Self {
            kind,
            params,
            normalization: 1.0 / raw_mass,
        })
    }

    pub fn kind(&self) -> ImfKind {
        self.kind
    }

    pub fn params(&self) -> ImfParams {
        self.params
    }

    pub fn m_low(&self) -> f64 {
        self.params.m_low
    }

    pub fn m_up(&self) -> f64 {
        self.params.m_up
    }

    /// Constant turning the raw shape into a unit-mass population.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    pub fn description(&self) -> String {
        self.kind.to_string()
    }

    /// Number of stars per solar mass formed with masses in `[m_inf, m_sup]`.
    pub fn number_between(&self, m_inf: f64, m_sup: f64) -> f64 {
        self.integrate_clamped(m_inf, m_sup, |m| self.for_mass(m))
    }

    /// Fraction of the formed mass in stars with masses in `[m_inf, m_sup]`.
    pub fn mass_between(&self, m_inf: f64, m_sup: f64) -> f64 {
        self.integrate_clamped(m_inf, m_sup, |m| m * self.for_mass(m))
    }

    fn integrate_clamped(&self, m_inf: f64, m_sup: f64, f: impl Fn(f64) -> f64) -> f64 {
        let lo = m_inf.max(self.params.m_low);
        let hi = m_sup.min(self.params.m_up);
        if hi <= lo {
            return 0.0;
        }
        log_simpson(f, lo, hi, NORMALIZATION_STEPS)
    }
}

impl InitialMassFunction for Imf {
    fn for_mass(&self, mass: f64) -> f64 {
        if mass < self.params.m_low || mass > self.params.m_up {
            return 0.0;
        }
        self.normalization * self.kind.shape(mass, self.params.alpha)
    }
}

/// Composite Simpson rule of `f(m) dm` on a uniform grid in ln m.
pub(crate) fn log_simpson(f: impl Fn(f64) -> f64, lo: f64, hi: f64, steps: usize) -> f64 {
    let (ln_lo, ln_hi) = (lo.ln(), hi.ln());
    let h = (ln_hi - ln_lo) / steps as f64;

    // dm = m d(ln m); the end points are taken as given so that bounded
    // functions are not cut off by rounding in exp(ln m).
    let g = |i: usize| {
        let m = match i {
            0 => lo,
            i if i == steps => hi,
            i => (ln_lo + i as f64 * h).exp(),
        };
        f(m) * m
    };

    let inner: f64 = (1..steps)
        .map(|i| if i % 2 == 1 { 4.0 * g(i) } else { 2.0 * g(i) })
        .sum();

    (g(0) + inner + g(steps)) * h / 3.0
}
