//! Endpoint generators.
//!
//! # Design
//! Every `generate_*` function takes the resource's `ApiBase` (injected
//! client plus base path) and an options value, and returns an immutable
//! endpoint implementing one capability trait from `crate::api`. Endpoints
//! capture their configuration at generation time and build a fresh
//! `HttpRequest` per call, so one endpoint can serve any number of concurrent
//! calls.
//!
//! Each call runs the same pipeline: resolve path, build query parameters,
//! encode the payload (writes only), execute, decode the body. Errors from the
//! client or from caller hooks are returned as they are.

mod create;
mod crud;
mod delete;
mod read;
mod read_filtered;
mod read_filtered_list;
mod read_filtered_page;
mod read_list;
mod read_one;
mod read_page;
mod update;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::HttpClient;
use crate::error::ApiError;
use crate::hooks::{RequestTransform, ResponseTransform};
use crate::http::HttpRequest;

pub use create::{generate_create_api, CreateEndpoint, CreateOptions};
pub use crud::{
    generate_crud_api, generate_crud_filtered_api, CrudEndpoint, CrudFilteredEndpoint,
    CrudFilteredOptions, CrudOptions,
};
pub use delete::{generate_delete_api, DeleteEndpoint, DeleteOptions};
pub use read::{generate_read_api, ReadEndpoint, ReadOptions};
pub use read_filtered::{generate_read_filtered_api, ReadFilteredEndpoint, ReadFilteredOptions};
pub use read_filtered_list::{
    generate_read_filtered_list_api, ReadFilteredListEndpoint, ReadFilteredListOptions,
};
pub use read_filtered_page::{
    generate_read_filtered_page_api, ReadFilteredPageEndpoint, ReadFilteredPageOptions,
};
pub use read_list::{generate_read_list_api, ReadListEndpoint, ReadListOptions};
pub use read_one::{generate_read_one_api, ReadOneEndpoint, ReadOneOptions};
pub use read_page::{generate_read_page_api, ReadPageEndpoint, ReadPageOptions};
pub use update::{generate_update_api, UpdateEndpoint, UpdateOptions};

/// Configuration shared by every operation on one resource.
#[derive(Clone)]
pub struct ApiBase {
    client: Arc<dyn HttpClient>,
    base_path: String,
}

impl ApiBase {
    pub fn new(client: impl HttpClient + 'static, base_path: impl Into<String>) -> Self {
        Self::from_shared(Arc::new(client), base_path)
    }

    /// Use a client that is already shared with other resources.
    pub fn from_shared(client: Arc<dyn HttpClient>, base_path: impl Into<String>) -> Self {
        Self {
            client,
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn client(&self) -> &Arc<dyn HttpClient> {
        &self.client
    }

    /// Execute `request` and hand back the raw response body.
    pub(crate) async fn send(&self, request: HttpRequest) -> Result<Value, ApiError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.client.execute(request).await?;
        Ok(response.body)
    }
}

impl fmt::Debug for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiBase")
            .field("base_path", &self.base_path)
            .finish_non_exhaustive()
    }
}

/// Outgoing payload: the transform's output, or `request` serialized as is.
pub(crate) async fn encode_request<Req>(
    transform: Option<&RequestTransform<Req>>,
    request: Req,
) -> Result<Value, ApiError>
where
    Req: Serialize + Send + 'static,
{
    match transform {
        Some(transform) => {
            tracing::trace!("applying request transform");
            transform.apply(request).await
        }
        None => serde_json::to_value(&request).map_err(ApiError::Serialization),
    }
}

/// Call result: the transform's output, or `body` deserialized as is.
pub(crate) async fn decode_response<T>(
    transform: Option<&ResponseTransform<T>>,
    body: Value,
) -> Result<T, ApiError>
where
    T: DeserializeOwned + Send + 'static,
{
    match transform {
        Some(transform) => {
            tracing::trace!("applying response transform");
            transform.apply(body).await
        }
        None => serde_json::from_value(body).map_err(ApiError::Deserialization),
    }
}
