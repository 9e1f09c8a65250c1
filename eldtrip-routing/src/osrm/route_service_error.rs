use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteServiceError {
    /// the request never produced an answer from the service: connection
    /// errors, timeouts, gateway failures. worth retrying.
    #[error("transport failure: {0}")]
    Transport(String),
    /// the service answered and rejected the request (for example, no
    /// route between the points). retrying will not change the answer.
    #[error("routing service error '{code}': {message}")]
    Service { code: String, message: String },
    #[error("failure decoding routing service response: {0}")]
    Decode(String),
    #[error("failure building routing client: {0}")]
    Build(String),
}

impl RouteServiceError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, RouteServiceError::Transport(_))
    }
}
