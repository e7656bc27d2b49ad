//! Error type shared by the HTTP boundary and every generated endpoint.
//!
//! # Design
//! Generated methods never inspect or translate errors: whatever the injected
//! client or a configured hook returns is handed back to the caller through
//! `?`. The only errors the generators originate themselves are the default
//! JSON mappings (`Serialization` / `Deserialization`) used when no transform
//! is configured.
//!
//! `NotFound` and `HttpError` are produced by the stock `ReqwestClient`; other
//! `HttpClient` implementations are free to use them or report failures
//! through `Transport`.

/// Boxed error carried by `Transport` and `Transform`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by generated endpoints and `HttpClient` implementations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connect, TLS, timeout, ...).
    #[error("transport failed: {0}")]
    Transport(#[source] BoxError),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// A caller-supplied transform failed.
    #[error("transform failed: {0}")]
    Transform(#[source] BoxError),
}

impl ApiError {
    /// Wrap any error raised inside a caller-supplied transform.
    pub fn transform(err: impl Into<BoxError>) -> Self {
        ApiError::Transform(err.into())
    }

    /// Wrap any error raised by a transport implementation.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ApiError::Transport(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status_and_body() {
        let err = ApiError::HttpError {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn transform_helper_accepts_strings() {
        let err = ApiError::transform("bad payload");
        assert!(matches!(err, ApiError::Transform(_)));
        assert_eq!(err.to_string(), "transform failed: bad payload");
    }

    #[test]
    fn deserialization_error_keeps_source() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = ApiError::Deserialization(source);
        assert!(std::error::Error::source(&err).is_some());
    }
}
