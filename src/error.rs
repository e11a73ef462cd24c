use thiserror::Error;

/// Errors surfaced by [`ProduitsClient`](crate::ProduitsClient).
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value was neither passed explicitly nor
    /// present in the environment. Raised at construction, before any
    /// network call.
    #[error("missing configuration: {0} not provided and not set in the environment")]
    MissingConfig(&'static str),

    /// Transport-level failure from the HTTP client, surfaced unmodified.
    /// Non-2xx statuses are not an error; the status travels with the
    /// response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request parameters could not be form-encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The response body could not be parsed as form-encoded data.
    #[error("malformed form-encoded response body: {0}")]
    Form(#[from] serde_urlencoded::de::Error),

    /// A response field that carries embedded JSON could not be decoded.
    #[error("malformed JSON in response field {field}: {source}")]
    Decode {
        field: &'static str,
        source: serde_json::Error,
    },
}
