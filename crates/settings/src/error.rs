use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("parameters must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("Domain error: {0}")]
    Domain(#[from] stellar::DomainError),

    #[error("IMF error: {0}")]
    Imf(#[from] imf::ImfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
