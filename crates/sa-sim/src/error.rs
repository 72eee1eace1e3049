use sa_core::SaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation configuration: {0}")]
    Config(#[from] SaError),
}

pub type SimResult<T> = Result<T, SimError>;
