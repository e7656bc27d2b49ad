use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;

use super::ApiBase;
use crate::api::DeleteApi;
use crate::error::ApiError;
use crate::hooks::IdParamsFn;
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::SubPath;

/// Options for `generate_delete_api`.
pub struct DeleteOptions<Id> {
    pub path: SubPath<Id>,
    pub params: Option<IdParamsFn<Id>>,
}

impl<Id> DeleteOptions<Id> {
    pub fn new() -> Self {
        Self {
            path: SubPath::Default,
            params: None,
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
}

impl<Id> Default for DeleteOptions<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id> Clone for DeleteOptions<Id> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: self.params.clone(),
        }
    }
}

/// Endpoint returned by `generate_delete_api`.
pub struct DeleteEndpoint<Id> {
    base: ApiBase,
    options: DeleteOptions<Id>,
}

impl<Id> Clone for DeleteEndpoint<Id> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_delete_api<Id>(base: ApiBase, options: DeleteOptions<Id>) -> DeleteEndpoint<Id> {
    DeleteEndpoint { base, options }
}

#[async_trait]
impl<Id> DeleteApi<Id> for DeleteEndpoint<Id>
where
    Id: Display + Send + 'static,
{
    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        let path = self.options.path.target(self.base.base_path(), &id);
        let query = self.options.params.as_ref().map(|params| params(&id));

        let request = HttpRequest::new(HttpMethod::Delete, path).with_query(query);
        self.base.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::mock::MockClient;

    #[tokio::test]
    async fn deletes_identifier_path_without_params() {
        let client = MockClient::new();
        let api = generate_delete_api(ApiBase::new(client.clone(), "/users"), DeleteOptions::<u64>::new());

        api.delete(42).await.unwrap();

        let req = client.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "/users/42");
        assert!(req.query.is_none());
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn ignores_response_body() {
        let client = MockClient::new().reply(json!({"deleted": true}));
        let api = generate_delete_api(ApiBase::new(client, "/users"), DeleteOptions::<u64>::new());

        assert!(api.delete(1).await.is_ok());
    }

    #[tokio::test]
    async fn literal_path_replaces_identifier() {
        let client = MockClient::new();
        let api = generate_delete_api(
            ApiBase::new(client.clone(), "/users"),
            DeleteOptions::<u64>::new().path(SubPath::literal("/current")),
        );

        api.delete(42).await.unwrap();

        assert_eq!(client.last().path, "/users/current");
    }

    #[tokio::test]
    async fn computed_path_receives_identifier() {
        let client = MockClient::new();
        let api = generate_delete_api(
            ApiBase::new(client.clone(), "/users"),
            DeleteOptions::new().path(SubPath::computed(|id: &u64| format!("archive/{id}"))),
        );

        api.delete(7).await.unwrap();

        let req = client.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "/users/archive/7");
    }

    #[tokio::test]
    async fn disabled_path_ignores_identifier() {
        let client = MockClient::new();
        let api = generate_delete_api(
            ApiBase::new(client.clone(), "/users/"),
            DeleteOptions::new()
                .path(SubPath::Disabled)
                .params(|id: &String| Params::new().with("name", id)),
        );

        api.delete("ada".to_string()).await.unwrap();

        let req = client.last();
        assert_eq!(req.path, "/users/");
        assert_eq!(req.query, Some(Params::new().with("name", "ada")));
    }

    #[tokio::test]
    async fn failure_propagates() {
        let client = MockClient::new().fail(ApiError::NotFound);
        let api = generate_delete_api(ApiBase::new(client, "/users"), DeleteOptions::<u64>::new());

        assert!(matches!(api.delete(1).await, Err(ApiError::NotFound)));
    }
}
