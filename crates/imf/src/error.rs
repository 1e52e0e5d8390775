use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImfError {
    #[error("invalid IMF mass range: m_low = {m_low}, m_up = {m_up}")]
    InvalidMassRange { m_low: f64, m_up: f64 },

    #[error("unknown IMF '{0}'")]
    UnknownKind(String),

    #[error("sampler needs at least 2 bins, got {0}")]
    TooFewBins(usize),
}

pub type ImfResult<T> = Result<T, ImfError>;
