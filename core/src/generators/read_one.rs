use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{decode_response, ApiBase};
use crate::api::ReadOneApi;
use crate::error::ApiError;
use crate::hooks::{IdParamsFn, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::SubPath;

/// Options for `generate_read_one_api`.
pub struct ReadOneOptions<T, Id> {
    pub path: SubPath<Id>,
    pub params: Option<IdParamsFn<Id>>,
    pub transform_response: Option<ResponseTransform<T>>,
}

impl<T, Id> ReadOneOptions<T, Id> {
    pub fn new() -> Self {
        Self {
            path: SubPath::Default,
            params: None,
            transform_response: None,
        }
    }

    pub fn path(mut self, path: SubPath<Id>) -> Self {
        self.path = path;
        self
    }

    pub fn params(mut self, f: impl Fn(&Id) -> Params + Send + Sync + 'static) -> Self {
        self.params = Some(Arc::new(f));
        self
    }

    pub fn transform_response(mut self, transform: ResponseTransform<T>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<T, Id> Default for ReadOneOptions<T, Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Id> Clone for ReadOneOptions<T, Id> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: self.params.clone(),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_one_api`.
pub struct ReadOneEndpoint<T, Id> {
    base: ApiBase,
    options: ReadOneOptions<T, Id>,
}

impl<T, Id> Clone for ReadOneEndpoint<T, Id> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_read_one_api<T, Id>(
    base: ApiBase,
    options: ReadOneOptions<T, Id>,
) -> ReadOneEndpoint<T, Id> {
    ReadOneEndpoint { base, options }
}

#[async_trait]
impl<T, Id> ReadOneApi<T, Id> for ReadOneEndpoint<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: Display + Send + 'static,
{
    async fn read_one(&self, id: Id) -> Result<T, ApiError> {
        let path = self.options.path.target(self.base.base_path(), &id);
        let query = self.options.params.as_ref().map(|params| params(&id));

        let request = HttpRequest::new(HttpMethod::Get, path).with_query(query);
        let body = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), body).await
    }
}
