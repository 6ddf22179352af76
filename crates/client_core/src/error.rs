use thiserror::Error;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid collection url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response. `message` is the server's `mensagem` when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
