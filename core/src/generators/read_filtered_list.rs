use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{decode_response, ApiBase};
use crate::api::ReadFilteredListApi;
use crate::error::ApiError;
use crate::hooks::{FilterParamsFn, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::build_path;

/// Options for `generate_read_filtered_list_api`.
pub struct ReadFilteredListOptions<T, F> {
    pub path: Option<String>,
    pub params: FilterParamsFn<F>,
    pub transform_response: Option<ResponseTransform<Vec<T>>>,
}

impl<T, F> ReadFilteredListOptions<T, F> {
    pub fn new(params: impl Fn(&F) -> Params + Send + Sync + 'static) -> Self {
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

    pub fn transform_response(mut self, transform: ResponseTransform<Vec<T>>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<T, F> Clone for ReadFilteredListOptions<T, F> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: Arc::clone(&self.params),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_filtered_list_api`.
pub struct ReadFilteredListEndpoint<T, F> {
    base: ApiBase,
    options: ReadFilteredListOptions<T, F>,
}

impl<T, F> Clone for ReadFilteredListEndpoint<T, F> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_read_filtered_list_api<T, F>(
    base: ApiBase,
    options: ReadFilteredListOptions<T, F>,
) -> ReadFilteredListEndpoint<T, F> {
    ReadFilteredListEndpoint { base, options }
}

#[async_trait]
impl<T, F> ReadFilteredListApi<T, F> for ReadFilteredListEndpoint<T, F>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
{
    async fn read_filtered_list(&self, filter: F) -> Result<Vec<T>, ApiError> {
        let path = build_path(self.base.base_path(), self.options.path.as_deref());
        let query = (self.options.params)(&filter);

        let request = HttpRequest::new(HttpMethod::Get, path).with_query(Some(query));
        let body = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), body).await
    }
}
