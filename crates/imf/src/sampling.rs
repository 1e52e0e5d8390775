//! Drawing stellar masses from an initial mass function.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::error::{ImfError, ImfResult};
use crate::kind::ImfKind;
use crate::mass_function::{Imf, InitialMassFunction};

/// Sample from a power-law distribution
///
/// Samples from p(x) ∝ x^α between x_min and x_max using inverse transform sampling.
///
/// # Arguments
/// * `x_min` - Minimum value
/// * `x_max` - Maximum value
/// * `alpha` - Power-law exponent (e.g., -2.35 for Salpeter IMF), must not be -1
/// * `rng` - Random number generator
///
/// # Returns
/// A sample from the power-law distribution
pub fn sample_power_law(x_min: f64, x_max: f64, alpha: f64, rng: &mut ChaChaRng) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Inverse-transform sampler for any [`Imf`].
///
/// Salpeter IMFs are inverted in closed form. Every other shape uses a
/// cumulative number distribution tabulated on a uniform grid in ln m and
/// interpolated linearly inside each bin.
///
/// # Example
/// ```
/// use imf::{Imf, ImfKind, ImfParams, ImfSampler};
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let imf = Imf::new(ImfKind::Kroupa, ImfParams::default()).unwrap();
/// let sampler = ImfSampler::new(&imf);
/// let mut rng = ChaChaRng::seed_from_u64(42);
///
/// let masses = sampler.sample_many(&mut rng, 100);
/// assert!(masses.iter().all(|&m| (0.15..=100.0).contains(&m)));
/// ```
#[derive(Debug, Clone)]
pub struct ImfSampler {
    imf: Imf,
    ln_m_low: f64,
    ln_step: f64,
    cumulative: Vec<f64>,
}

impl ImfSampler {
    pub const DEFAULT_BINS: usize = 1000;

    pub fn new(imf: &Imf) -> Self {
        Self::build(imf, Self::DEFAULT_BINS)
    }

    /// Sampler with a custom number of log-mass bins.
    pub fn with_bins(imf: &Imf, bins: usize) -> ImfResult<Self> {
        if bins < 2 {
            return Err(ImfError::TooFewBins(bins));
        }
        Ok(Self::build(imf, bins))
    }

    fn build(imf: &Imf, bins: usize) -> Self {
        let ln_m_low = imf.m_low().ln();
        let ln_step = (imf.m_up().ln() - ln_m_low) / bins as f64;

        // Stars per unit ln m
        let density = |i: usize| {
            let m = match i {
                0 => imf.m_low(),
                i if i == bins => imf.m_up(),
                i => (ln_m_low + i as f64 * ln_step).exp(),
            };
            m * imf.for_mass(m)
        };

        let mut cumulative = Vec::with_capacity(bins + 1);
        cumulative.push(0.0);
        let mut total = 0.0;
        let mut previous = density(0);
        for i in 1..=bins {
            let current = density(i);
            total += 0.5 * (previous + current) * ln_step;
            cumulative.push(total);
            previous = current;
        }
        for value in cumulative.iter_mut() {
            *value /= total;
        }

        Self {
            imf: imf.clone(),
            ln_m_low,
            ln_step,
            cumulative,
        }
    }

    pub fn imf(&self) -> &Imf {
        &self.imf
    }

    /// Draw one stellar mass in M☉.
    pub fn sample(&self, rng: &mut ChaChaRng) -> f64 {
        let params = self.imf.params();
        if self.imf.kind() == ImfKind::Salpeter && params.alpha != 1.0 {
            return sample_power_law(params.m_low, params.m_up, -params.alpha, rng);
        }

        let u: f64 = rng.random();
        let last = self.cumulative.len() - 1;
        let upper = self
            .cumulative
            .partition_point(|&c| c <= u)
            .clamp(1, last);
        let lower = upper - 1;

        let width = self.cumulative[upper] - self.cumulative[lower];
        let fraction = if width > 0.0 {
            (u - self.cumulative[lower]) / width
        } else {
            0.0
        };
        let ln_m = self.ln_m_low + (lower as f64 + fraction) * self.ln_step;

        ln_m.exp().clamp(params.m_low, params.m_up)
    }

    /// Draw `count` stellar masses.
    pub fn sample_many(&self, rng: &mut ChaChaRng, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
