use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{decode_response, ApiBase};
use crate::api::ReadListApi;
use crate::error::ApiError;
use crate::hooks::ResponseTransform;
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::build_path;

/// Options for `generate_read_list_api`.
///
/// `params` is a fixed value resolved up front: read-list takes no call-time
/// input to build parameters from.
pub struct ReadListOptions<T> {
    pub path: Option<String>,
    pub params: Option<Params>,
    pub transform_response: Option<ResponseTransform<Vec<T>>>,
}

impl<T> ReadListOptions<T> {
    pub fn new() -> Self {
        Self {
            path: None,
            params: None,
            transform_response: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn transform_response(mut self, transform: ResponseTransform<Vec<T>>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<T> Default for ReadListOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ReadListOptions<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: self.params.clone(),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_list_api`.
pub struct ReadListEndpoint<T> {
    base: ApiBase,
    options: ReadListOptions<T>,
}

impl<T> Clone for ReadListEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_read_list_api<T>(base: ApiBase, options: ReadListOptions<T>) -> ReadListEndpoint<T> {
    ReadListEndpoint { base, options }
}

#[async_trait]
impl<T> ReadListApi<T> for ReadListEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn read_list(&self) -> Result<Vec<T>, ApiError> {
        let path = build_path(self.base.base_path(), self.options.path.as_deref());

        let request = HttpRequest::new(HttpMethod::Get, path).with_query(self.options.params.clone());
        let body = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), body).await
    }
}
