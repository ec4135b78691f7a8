use thiserror::Error;

/// Failure talking to the storefront REST API.
///
/// The `Display` form is what the UI shows to the user when a request fails,
/// so variants carry enough context to be readable on their own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bad URL).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a 4xx/5xx status.
    #[error("HTTP {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },
    /// The response body was not the JSON we expected.
    #[error("could not decode response: {0}")]
    Decode(String),
    /// HTTP is only wired up in browser builds.
    #[error("HTTP client only available in WASM builds")]
    Unsupported,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
