use http::StatusCode;
use thiserror::Error;
pub use url::ParseError as UrlParseError;
use url::Url;

/// Error types for the CakeMail API client.
#[derive(Error, Debug)]
pub enum CakeMailError {
    /// The server answered with a non-success status code, or with a body
    /// that is not a CakeMail response envelope.
    #[error("HTTP error {status} from {uri}: {message}")]
    HttpError {
        message: String,
        status: StatusCode,
        uri: Url,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The response envelope reported a failure.
    #[error("API error {status} from {uri}: {message}")]
    ApiError {
        message: String,
        status: StatusCode,
        uri: Url,
    },

    /// The envelope reported success but its payload did not have the
    /// expected shape.
    #[error("Deserialization error for {uri}: {message}")]
    DeserializationError {
        message: String,
        status: StatusCode,
        uri: Url,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The request could not be sent or its response could not be read.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error parsing URL.
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] UrlParseError),

    /// The API endpoint/path string is invalid.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),
}

impl CakeMailError {
    /// The HTTP status of the response that produced this error, if one was
    /// received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CakeMailError::HttpError { status, .. }
            | CakeMailError::ApiError { status, .. }
            | CakeMailError::DeserializationError { status, .. } => Some(*status),
            CakeMailError::RequestError(e) => e.status(),
            _ => None,
        }
    }

    /// The URI of the request that produced this error, if known.
    pub fn uri(&self) -> Option<&Url> {
        match self {
            CakeMailError::HttpError { uri, .. }
            | CakeMailError::ApiError { uri, .. }
            | CakeMailError::DeserializationError { uri, .. } => Some(uri),
            CakeMailError::RequestError(e) => e.url(),
            _ => None,
        }
    }
}

/// Result type for CakeMail API operations.
pub type CakeMailResult<T> = Result<T, CakeMailError>;
