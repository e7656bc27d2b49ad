//! The injected HTTP client boundary.
//!
//! # Design
//! Generated endpoints only ever see `dyn HttpClient`. The client owns the
//! base URL, the wire encoding, and the decision of which statuses count as
//! failures; endpoints pass its errors through untouched.
//!
//! `ReqwestClient` (feature `reqwest`) is the stock implementation: it maps
//! 404 to `ApiError::NotFound` and every other non-2xx status to
//! `ApiError::HttpError`.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP request.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_client::ReqwestClient;

#[cfg(feature = "reqwest")]
mod reqwest_client {
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::Value;

    use super::HttpClient;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// `HttpClient` backed by `reqwest`, bound to one base URL.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        base_url: String,
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(ApiError::transport)?;

            Ok(Self {
                base_url: base_url.strip_suffix('/').unwrap_or(base_url).to_string(),
                client,
            })
        }

        /// Create with a 30 second request timeout.
        pub fn with_default_timeout(base_url: &str) -> Result<Self, ApiError> {
            Self::new(base_url, Duration::from_secs(30))
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        fn url(&self, path: &str) -> String {
            if path.starts_with('/') {
                format!("{}{path}", self.base_url)
            } else {
                format!("{}/{path}", self.base_url)
            }
        }
    }

    #[async_trait]
    impl HttpClient for ReqwestClient {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let url = self.url(&request.path);
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
                HttpMethod::Put => reqwest::Method::PUT,
                HttpMethod::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(query) = &request.query {
                builder = builder.query(query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(ApiError::transport)?;
            let status = response.status().as_u16();
            tracing::debug!(method = %request.method, %url, status, "response received");

            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let text = response.text().await.map_err(ApiError::transport)?;

            let response = HttpResponse {
                status,
                headers,
                body: Value::Null,
            };
            check_status(response, text)
        }
    }

    /// Attach the parsed body to a 2xx response, or map the status to the
    /// appropriate `ApiError` variant.
    fn check_status(response: HttpResponse, text: String) -> Result<HttpResponse, ApiError> {
        if response.is_success() {
            return Ok(HttpResponse {
                body: parse_body(text),
                ..response
            });
        }
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        Err(ApiError::HttpError {
            status: response.status,
            body: text,
        })
    }

    /// Empty bodies become `Null`, non-JSON bodies are kept as a string.
    fn parse_body(text: String) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    }

}

/// Recording client for unit tests.
#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::Value;

    use super::HttpClient;
    use crate::error::ApiError;
    use crate::http::{HttpRequest, HttpResponse};

    /// Returns queued responses in order (or a default `null` 200) and records
    /// every request it sees.
    #[derive(Clone, Default)]
    pub struct MockClient {
        responses: Arc<Mutex<VecDeque<Result<HttpResponse, ApiError>>>>,
        recorded: Arc<Mutex<Vec<HttpRequest>>>,
    }

    impl MockClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a 200 response with `body`.
        pub fn reply(self, body: Value) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(HttpResponse::ok(body)));
            self
        }

        /// Queue a failure.
        pub fn fail(self, err: ApiError) -> Self {
            self.responses.lock().unwrap().push_back(Err(err));
            self
        }

        pub fn recorded(&self) -> Vec<HttpRequest> {
            self.recorded.lock().unwrap().clone()
        }

        pub fn last(&self) -> HttpRequest {
            self.recorded
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl HttpClient for MockClient {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.recorded.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(HttpResponse::ok(Value::Null)))
        }
    }
}
