use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid method: {0}")]
    InvalidMethod(String),

    #[error("invalid uri: {0}")]
    InvalidUri(String),

    #[error("unsupported protocol version: {0}")]
    InvalidVersion(String),

    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(String),

    #[error("malformed header line (expected 'Name: value'): {0}")]
    MalformedHeaderLine(String),
}
