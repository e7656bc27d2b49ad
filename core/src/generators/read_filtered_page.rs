use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{decode_response, ApiBase};
use crate::api::ReadFilteredPageApi;
use crate::error::ApiError;
use crate::hooks::{FilteredPageParamsFn, ResponseTransform};
use crate::http::{HttpMethod, HttpRequest, Params};
use crate::path::build_path;
use crate::types::{Page, Pagination};

/// Options for `generate_read_filtered_page_api`.
pub struct ReadFilteredPageOptions<T, F> {
    pub path: Option<String>,
    pub params: FilteredPageParamsFn<F>,
    pub transform_response: Option<ResponseTransform<Page<T>>>,
}

impl<T, F> ReadFilteredPageOptions<T, F> {
    pub fn new(params: impl Fn(&F, &Pagination) -> Params + Send + Sync + 'static) -> Self {
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

impl<T, F> Clone for ReadFilteredPageOptions<T, F> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            params: Arc::clone(&self.params),
            transform_response: self.transform_response.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_filtered_page_api`.
pub struct ReadFilteredPageEndpoint<T, F> {
    base: ApiBase,
    options: ReadFilteredPageOptions<T, F>,
}

impl<T, F> Clone for ReadFilteredPageEndpoint<T, F> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            options: self.options.clone(),
        }
    }
}

pub fn generate_read_filtered_page_api<T, F>(
    base: ApiBase,
    options: ReadFilteredPageOptions<T, F>,
) -> ReadFilteredPageEndpoint<T, F> {
    ReadFilteredPageEndpoint { base, options }
}

#[async_trait]
impl<T, F> ReadFilteredPageApi<T, F> for ReadFilteredPageEndpoint<T, F>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
{
    async fn read_filtered_page(
        &self,
        filter: F,
        pagination: Pagination,
    ) -> Result<Page<T>, ApiError> {
        let path = build_path(self.base.base_path(), self.options.path.as_deref());
        let query = (self.options.params)(&filter, &pagination);

        let request = HttpRequest::new(HttpMethod::Get, path).with_query(Some(query));
        let body = self.base.send(request).await?;

        decode_response(self.options.transform_response.as_ref(), body).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::mock::MockClient;

    #[tokio::test]
    async fn combines_filter_and_pagination_params() {
        let client = MockClient::new().reply(json!({
            "content": ["ada"],
            "totalElements": 1,
            "totalPages": 1,
        }));
        let options = ReadFilteredPageOptions::new(|q: &String, p: &Pagination| {
            Params::new()
                .with("q", q)
                .with("page", p.page)
                .with("size", p.rows_per_page)
        })
        .path("/search/");
        let api = generate_read_filtered_page_api::<String, String>(ApiBase::new(client.clone(), "/users/"), options);

        let page = api
            .read_filtered_page("ad".to_string(), Pagination::new(3, 25))
            .await
            .unwrap();

        assert_eq!(page.content, vec!["ada"]);
        let req = client.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/users/search/");
        assert_eq!(
            req.query,
            Some(Params::new().with("q", "ad").with("page", 3).with("size", 25))
        );
    }

    #[tokio::test]
    async fn http_error_propagates() {
        let client = MockClient::new().fail(ApiError::HttpError {
            status: 400,
            body: "bad filter".to_string(),
        });
        let api = generate_read_filtered_page_api::<String, ()>(
            ApiBase::new(client, "/users"),
            ReadFilteredPageOptions::new(|_: &(), _: &Pagination| Params::new()),
        );

        let err = api.read_filtered_page((), Pagination::new(1, 1)).await.unwrap_err();

        assert!(matches!(err, ApiError::HttpError { status: 400, ref body } if body == "bad filter"));
    }
}
