use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("unsupported window: {token}")]
    Unsupported { token: String },

    #[error("window must be longer than zero: {token}")]
    Empty { token: String },

    #[error("window is too large: {token}")]
    OutOfRange { token: String },
}

impl WindowError {
    pub fn token(&self) -> &str {
        match self {
            WindowError::Unsupported { token }
            | WindowError::Empty { token }
            | WindowError::OutOfRange { token } => token,
        }
    }
}
