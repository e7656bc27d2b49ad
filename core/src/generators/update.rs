use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{decode_response, encode_request, ApiBase};
use crate::api::UpdateApi;
use crate::error::ApiError;
use crate::hooks::{IdParamsFn, RequestTransform, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::SubPath;

/// Options for `generate_update_api`.
pub struct UpdateOptions<Req, Id, Res> {
    pub path: SubPath<Id>,
    pub params: Option<IdParamsFn<Id>>,
    pub transform_request: Option<RequestTransform<Req>>,
    pub transform_response: Option<ResponseTransform<Res>>,
}

impl<Req, Id, Res> UpdateOptions<Req, Id, Res> {
    pub fn new() -> Self {
        Self {
            path: SubPath::Default,
            params: None,
            transform_request: None,
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

    pub fn transform_request(mut self, transform: RequestTransform<Req>) -> Self {
        self.transform_request = Some(transform);
        self
    }

    pub fn transform_response(mut self, transform: ResponseTransform<Res>) -> Self {
        self.transform_response = Some(transform);
        self
    }
}

impl<Req, Id, Res> Default for UpdateOptions<Req, Id, Res> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Id, Res> Clone for UpdateOptions<Req, Id, Res> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: self.params.clone(),
            transform_request: self.transform_request.clone(),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_update_api`.
pub struct UpdateEndpoint<Req, Id, Res> {
    base: ApiBase,
    options: UpdateOptions<Req, Id, Res>,
}

impl<Req, Id, Res> Clone for UpdateEndpoint<Req, Id, Res> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_update_api<Req, Id, Res>(
    base: ApiBase,
    options: UpdateOptions<Req, Id, Res>,
) -> UpdateEndpoint<Req, Id, Res> {
    UpdateEndpoint { base, options }
}

#[async_trait]
impl<Req, Id, Res> UpdateApi<Req, Id, Res> for UpdateEndpoint<Req, Id, Res>
where
    Req: Serialize + Send + 'static,
    Id: Display + Send + 'static,
    Res: DeserializeOwned + Send + 'static,
{
    async fn update(&self, id: Id, request: Req) -> Result<Res, ApiError> {
        let path = self.options.path.target(self.base.base_path(), &id);
        let query = self.options.params.as_ref().map(|params| params(&id));
        let body = encode_request(self.options.transform_request.as_ref(), request).await?;

        let request = HttpRequest::new(HttpMethod::Put, path)
            .with_query(query)
            .with_json_body(body);
        let response = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), response).await
    }
}

#[cfg(test)]
mod tests {
    use serde::de::IgnoredAny;
    use serde::Deserialize;
    use serde_json::{json, Value};

    use super::*;
    use crate::client::mock::MockClient;
    use crate::hooks::Transform;

    #[derive(Serialize)]
    struct Rename {
        name: String,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: u64,
        name: String,
    }

    fn rename(name: &str) -> Rename {
        Rename {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn puts_serialized_request_to_identifier_path() {
        let client = MockClient::new();
        let api = generate_update_api::<Rename, u64, IgnoredAny>(
            ApiBase::new(client.clone(), "/users"),
            UpdateOptions::new(),
        );

        api.update(42, rename("ada")).await.unwrap();

        let req = client.last();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "/users/42");
        assert!(req.query.is_none());
        assert_eq!(req.body, Some(json!({"name": "ada"})));
    }

    #[tokio::test]
    async fn disabled_path_targets_base() {
        let client = MockClient::new();
        let api = generate_update_api::<Rename, u64, IgnoredAny>(
            ApiBase::new(client.clone(), "/users/current"),
            UpdateOptions::new()
                .path(SubPath::Disabled)
                .params(|id: &u64| Params::new().with("userId", id)),
        );

        api.update(42, rename("ada")).await.unwrap();

        let req = client.last();
        assert_eq!(req.path, "/users/current");
        assert_eq!(req.query, Some(Params::new().with("userId", 42)));
    }

    #[tokio::test]
    async fn computed_path_and_transforms() {
        let client = MockClient::new().reply(json!({"user": {"id": 42, "name": "ADA"}}));
        let options = UpdateOptions::new()
            .path(SubPath::computed(|id: &u64| format!("{id}/name")))
            .transform_request(Transform::from_async(|r: Rename| async move {
                Ok(json!({ "name": r.name.to_uppercase() }))
            }))
            .transform_response(Transform::new(|body: Value| {
                serde_json::from_value(body["user"].clone()).map_err(ApiError::transform)
            }));
        let api = generate_update_api::<Rename, u64, User>(ApiBase::new(client.clone(), "/users"), options);

        let updated = api.update(42, rename("ada")).await.unwrap();

        assert_eq!(
            updated,
            User {
                id: 42,
                name: "ADA".to_string()
            }
        );
        let req = client.last();
        assert_eq!(req.path, "/users/42/name");
        assert_eq!(req.body, Some(json!({"name": "ADA"})));
    }

    #[tokio::test]
    async fn literal_path_ignores_identifier() {
        let client = MockClient::new();
        let api = generate_update_api::<Rename, String, IgnoredAny>(
            ApiBase::new(client.clone(), "/settings"),
            UpdateOptions::new().path(SubPath::literal("/bulk")),
        );

        api.update("anything".to_string(), rename("x")).await.unwrap();

        assert_eq!(client.last().path, "/settings/bulk");
    }
}
