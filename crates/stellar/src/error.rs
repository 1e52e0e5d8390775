use thiserror::Error;

/// Arguments outside the mathematical domain of the empirical fits.
///
/// Each variant carries the offending value. Nothing in this crate returns
/// NaN in place of one of these.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("metallicity must be positive for the lifetime fit, got z = {0}")]
    NonPositiveMetallicity(f64),

    #[error("stellar mass must be positive, got {0} M☉")]
    NonPositiveMass(f64),

    #[error("stellar lifetime must be positive, got {0} Gyr")]
    NonPositiveLifetime(f64),

    #[error("lifetime {tau} Gyr is outside the fit range for z = {z} (discriminant {discriminant})")]
    NegativeDiscriminant { tau: f64, z: f64, discriminant: f64 },
}

pub type DomainResult<T> = Result<T, DomainError>;
