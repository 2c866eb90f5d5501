use thiserror::Error;

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("service returned no text")]
    EmptyResponse,

    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unusable response: {0}")]
    Invalid(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GatewayError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        GatewayError::Invalid(reason.into())
    }
}
