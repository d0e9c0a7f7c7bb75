use std::fmt;

use thiserror::Error;

use crate::api::traits::TransportError;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("HTTP status error: {0}")]
    Status(#[from] StatusError),

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Encoding request body error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid Retry-After header: {0:?}")]
    RetryAfter(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl RiotApiError {
    /// Classified HTTP error carried by this error, if any.
    pub fn status(&self) -> Option<StatusError> {
        match self {
            RiotApiError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

/// Non-success HTTP statuses returned by the Riot APIs, classified from a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum StatusError {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    UnsupportedMediaType,
    RateLimitExceeded,
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    /// Status outside the table, kept raw.
    Unknown(u16),
}

impl StatusError {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            415 => Self::UnsupportedMediaType,
            429 => Self::RateLimitExceeded,
            500 => Self::InternalServerError,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            other => Self::Unknown(other),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::UnsupportedMediaType => 415,
            Self::RateLimitExceeded => 429,
            Self::InternalServerError => 500,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
            Self::GatewayTimeout => 504,
            Self::Unknown(status) => *status,
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::UnsupportedMediaType => "unsupported media type",
            Self::RateLimitExceeded => "rate limit exceeded",
            Self::InternalServerError => "internal server error",
            Self::BadGateway => "bad gateway",
            Self::ServiceUnavailable => "service unavailable",
            Self::GatewayTimeout => "gateway timeout",
            Self::Unknown(_) => "unknown error reason",
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.reason(), self.status_code())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}
