use sw_agent::PopulationError;
use sw_core::SwError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("swarm configuration error: {0}")]
    Config(String),

    #[error("invalid population: {0}")]
    Population(#[from] PopulationError),
}

impl From<SwError> for SimError {
    fn from(e: SwError) -> Self {
        match e {
            SwError::Config(msg) => SimError::Config(msg),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
