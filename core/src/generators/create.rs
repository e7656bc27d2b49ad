use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{decode_response, encode_request, ApiBase};
use crate::api::CreateApi;
use crate::error::ApiError;
use crate::hooks::{RequestTransform, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest};
use crate::path::build_path;

/// Options for `generate_create_api`.
///
/// Creation has no identifier, so the sub-path is a plain optional literal;
/// `None` targets the base path.
pub struct CreateOptions<Req, Res> {
    pub path: Option<String>,
    pub transform_request: Option<RequestTransform<Req>>,
    pub transform_response: Option<ResponseTransform<Res>>,
}

impl<Req, Res> CreateOptions<Req, Res> {
    pub fn new() -> Self {
        Self {
            path: None,
            transform_request: None,
            transform_response: None,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn transform_request(mut self, transform: RequestTransform<Req>) -> Self {
        self.transform_request = Some(transform);
        self
    }

    pub fn transform_response(mut self, transform: ResponseTransform<Res>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<Req, Res> Default for CreateOptions<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> Clone for CreateOptions<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            transform_request: self.transform_request.clone(),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_create_api`.
pub struct CreateEndpoint<Req, Res> {
    base: ApiBase,
    options: CreateOptions<Req, Res>,
}

impl<Req, Res> Clone for CreateEndpoint<Req, Res> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_create_api<Req, Res>(
    base: ApiBase,
    options: CreateOptions<Req, Res>,
) -> CreateEndpoint<Req, Res> {
    CreateEndpoint { base, options }
}

#[async_trait]
impl<Req, Res> CreateApi<Req, Res> for CreateEndpoint<Req, Res>
where
    Req: Serialize + Send + 'static,
    Res: DeserializeOwned + Send + 'static,
{
    async fn create(&self, request: Req) -> Result<Res, ApiError> {
        let path = build_path(self.base.base_path(), self.options.path.as_deref());
        let body = encode_request(self.options.transform_request.as_ref(), request).await?;

        let request = HttpRequest::new(HttpMethod::Post, path).with_json_body(body);
        let response = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), response).await
    }
}
