use std::fmt::Display;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{
    generate_read_list_api, generate_read_one_api, generate_read_page_api, ApiBase,
    ReadListEndpoint, ReadListOptions, ReadOneEndpoint, ReadOneOptions, ReadPageEndpoint,
    ReadPageOptions,
};
use crate::api::{ReadListApi, ReadOneApi, ReadPageApi};
use crate::error::ApiError;
use crate::http::Params;
use crate::types::{Page, Pagination};

/// Options for `generate_read_api`: one section per read operation.
pub struct ReadOptions<T, Id> {
    pub one: ReadOneOptions<T, Id>,
    pub list: ReadListOptions<T>,
    pub page: ReadPageOptions<T>,
}

impl<T, Id> ReadOptions<T, Id> {
    /// Defaults for read-one and read-list; read-page needs its builder.
    pub fn new(page_params: impl Fn(&Pagination) -> Params + Send + Sync + 'static) -> Self {
        Self {
            one: ReadOneOptions::new(),
            list: ReadListOptions::new(),
            page: ReadPageOptions::new(page_params),
        }
    }

    pub fn one(mut self, one: ReadOneOptions<T, Id>) -> Self {
        self.one = one;
        self
    }

    pub fn list(mut self, list: ReadListOptions<T>) -> Self {
        self.list = list;
        self
    }

    pub fn page(mut self, page: ReadPageOptions<T>) -> Self {
        self.page = page;
        self
    }
}

impl<T, Id> Clone for ReadOptions<T, Id> {
    fn clone(&self) -> Self {
        Self {
            one: self.one.clone(),
            list: self.list.clone(),
            page: self.page.clone(),
        }
    }
}

/// Endpoint returned by `generate_read_api`.
pub struct ReadEndpoint<T, Id> {
    one: ReadOneEndpoint<T, Id>,
    list: ReadListEndpoint<T>,
    page: ReadPageEndpoint<T>,
}

impl<T, Id> Clone for ReadEndpoint<T, Id> {
    fn clone(&self) -> Self {
        Self {
            one: self.one.clone(),
            list: self.list.clone(),
            page: self.page.clone(),
        }
    }
}

pub fn generate_read_api<T, Id>(base: ApiBase, options: ReadOptions<T, Id>) -> ReadEndpoint<T, Id> {
    ReadEndpoint {
        one: generate_read_one_api(base.clone(), options.one),
        list: generate_read_list_api(base.clone(), options.list),
        page: generate_read_page_api(base, options.page),
    }
}

#[async_trait]
impl<T, Id> ReadOneApi<T, Id> for ReadEndpoint<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: Display + Send + 'static,
{
    async fn read_one(&self, id: Id) -> Result<T, ApiError> {
        self.one.read_one(id).await
    }
}

#[async_trait]
impl<T, Id> ReadListApi<T> for ReadEndpoint<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: Send + 'static,
{
    async fn read_list(&self) -> Result<Vec<T>, ApiError> {
        self.list.read_list().await
    }
}

#[async_trait]
impl<T, Id> ReadPageApi<T> for ReadEndpoint<T, Id>
where
    T: DeserializeOwned + Send + 'static,
    Id: Send + 'static,
{
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError> {
        self.page.read_page(pagination).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::api::ReadApi;
    use crate::client::mock::MockClient;
    use crate::http::HttpMethod;
    use crate::path::SubPath;

    fn page_params(p: &Pagination) -> Params {
        Params::new().with("page", p.page).with("size", p.rows_per_page)
    }

    async fn exercise(api: &impl ReadApi<Value, u64>) {
        api.read_one(7).await.unwrap();
        api.read_list().await.unwrap();
        api.read_page(Pagination::new(1, 20)).await.unwrap();
    }

    #[tokio::test]
    async fn every_read_operation_shares_the_base() {
        let client = MockClient::new()
            .reply(json!({"id": 7}))
            .reply(json!([]))
            .reply(json!({"content": [], "totalElements": 0, "totalPages": 0}));
        let api = generate_read_api::<Value, u64>(ApiBase::new(client.clone(), "/users"), ReadOptions::new(page_params));

        exercise(&api).await;

        let recorded = client.recorded();
        assert_eq!(recorded.len(), 3);
        assert!(recorded.iter().all(|r| r.method == HttpMethod::Get));
        assert_eq!(recorded[0].path, "/users/7");
        assert_eq!(recorded[1].path, "/users");
        assert!(recorded[1].query.is_none());
        assert_eq!(recorded[2].path, "/users");
        assert_eq!(recorded[2].query, Some(Params::new().with("page", 1).with("size", 20)));
    }

    #[tokio::test]
    async fn sections_are_configured_independently() {
        let client = MockClient::new()
            .reply(json!({}))
            .reply(json!([]))
            .reply(json!({"content": [], "totalElements": 0, "totalPages": 0}));
        let options = ReadOptions::new(page_params)
            .one(ReadOneOptions::new().path(SubPath::computed(|id: &u64| format!("by-id/{id}"))))
            .list(ReadListOptions::new().path("all"))
            .page(ReadPageOptions::new(page_params).path("paged"));
        let api = generate_read_api::<Value, u64>(ApiBase::new(client.clone(), "/users"), options);

        exercise(&api).await;

        let paths: Vec<_> = client.recorded().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/users/by-id/7", "/users/all", "/users/paged"]);
    }
}
