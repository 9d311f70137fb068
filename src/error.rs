use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Anything that goes wrong while adding and formatting a sum.
    #[error("computation fault: {0}")]
    ComputationFault(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn computation(msg: impl Into<String>) -> Self {
        Self::ComputationFault(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
