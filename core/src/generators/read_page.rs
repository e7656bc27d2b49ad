use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{decode_response, ApiBase};
use crate::api::ReadPageApi;
use crate::error::ApiError;
use crate::hooks::{PageParamsFn, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::build_path;
use crate::types::{Page, Pagination};

/// Options for `generate_read_page_api`. The parameter builder is required:
/// it is the only way the pagination reaches the server.
pub struct ReadPageOptions<T> {
    pub path: Option<String>,
    pub params: PageParamsFn,
    pub transform_response: Option<ResponseTransform<Page<T>>>,
}

impl<T> ReadPageOptions<T> {
    pub fn new(params: impl Fn(&Pagination) -> Params + Send + Sync + 'static) -> Self {
        Self {
            path: None,
            params: Arc::new(params),
            transform_response: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn transform_response(mut self, transform: ResponseTransform<Page<T>>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<T> Clone for ReadPageOptions<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: Arc::clone(&self.params),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_page_api`.
pub struct ReadPageEndpoint<T> {
    base: ApiBase,
    options: ReadPageOptions<T>,
}

impl<T> Clone for ReadPageEndpoint<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_read_page_api<T>(base: ApiBase, options: ReadPageOptions<T>) -> ReadPageEndpoint<T> {
    ReadPageEndpoint { base, options }
}

#[async_trait]
impl<T> ReadPageApi<T> for ReadPageEndpoint<T>
where
    T: DeserializeOwned + Send + 'static,
{
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError> {
        let path = build_path(self.base.base_path(), self.options.path.as_deref());
        let query = (self.options.params)(&pagination);

        let request = HttpRequest::new(HttpMethod::Get, path).with_query(Some(query));
        let body = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), body).await
    }
}
