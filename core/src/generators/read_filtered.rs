use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{
    generate_read_api, generate_read_filtered_list_api, generate_read_filtered_page_api, ApiBase,
    ReadEndpoint, ReadFilteredListEndpoint, ReadFilteredListOptions, ReadFilteredPageEndpoint,
    ReadFilteredPageOptions, ReadOptions,
};
use crate::api::{ReadFilteredListApi, ReadFilteredPageApi, ReadListApi, ReadOneApi, ReadPageApi};
use crate::error::ApiError;
use crate::hooks::{FilterParamsFn, FilteredPageParamsFn};
use crate::http::Params;
use crate::types::{Page, Pagination};

/// Options for `generate_read_filtered_api`.
///
/// The filtered variants reuse the response transforms configured on
/// `read.list` and `read.page`: a filtered list has the same wire shape as
/// the plain one.
pub struct ReadFilteredOptions<T, F, Id> {
    pub read: ReadOptions<T, Id>,
    pub filtered_list_path: Option<String>,
    pub filtered_list_params: FilterParamsFn<F>,
    pub filtered_page_path: Option<String>,
    pub filtered_page_params: FilteredPageParamsFn<F>,
}

impl<T, F, Id> ReadFilteredOptions<T, F, Id> {
    pub fn new(
        read: ReadOptions<T, Id>,
        list_params: impl Fn(&F) -> Params + Send + Sync + 'static,
        page_params: impl Fn(&F, &Pagination) -> Params + Send + Sync + 'static,
    ) -> Self {
        Self {
            read,
            filtered_list_path: None,
            filtered_list_params: Arc::new(list_params),
            filtered_page_path: None,
            filtered_page_params: Arc::new(page_params),
        }
    }

    pub fn filtered_list_path(mut self, path: impl Into<String>) -> Self {
        self.filtered_list_path = Some(path.into());
        self
    }

    pub fn filtered_page_path(mut self, path: impl Into<String>) -> Self {
        self.filtered_page_path = Some(path.into());
        self
    }

    fn list_options(&self) -> ReadFilteredListOptions<T, F> {
        ReadFilteredListOptions {
            path: self.filtered_list_path.clone(),
            params: Arc::clone(&self.filtered_list_params),
            transform_response: self.read.list.transform_response.clone(),
        }
    }

    fn page_options(&self) -> ReadFilteredPageOptions<T, F> {
        ReadFilteredPageOptions {
            path: self.filtered_page_path.clone(),
            params: Arc::clone(&self.filtered_page_params),
            transform_response: self.read.page.transform_response.clone(),
        }
    }
}

impl<T, F, Id> Clone for ReadFilteredOptions<T, F, Id> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            filtered_list_path: self.filtered_list_path.clone(),
            filtered_list_params: Arc::clone(&self.filtered_list_params),
            filtered_page_path: self.filtered_page_path.clone(),
            filtered_page_params: Arc::clone(&self.filtered_page_params),
        }
    }
}

/// Endpoint returned by `generate_read_filtered_api`.
pub struct ReadFilteredEndpoint<T, F, Id> {
    read: ReadEndpoint<T, Id>,
    filtered_list: ReadFilteredListEndpoint<T, F>,
    filtered_page: ReadFilteredPageEndpoint<T, F>,
}

impl<T, F, Id> Clone for ReadFilteredEndpoint<T, F, Id> {
    fn clone(&self) -> Self {
        Self {
            read: self.read.clone(),
            filtered_list: self.filtered_list.clone(),
            filtered_page: self.filtered_page.clone(),
        }
    }
}

pub fn generate_read_filtered_api<T, F, Id>(
    base: ApiBase,
    options: ReadFilteredOptions<T, F, Id>,
) -> ReadFilteredEndpoint<T, F, Id> {
    let filtered_list = generate_read_filtered_list_api(base.clone(), options.list_options());
    let filtered_page = generate_read_filtered_page_api(base.clone(), options.page_options());
    ReadFilteredEndpoint {
        read: generate_read_api(base, options.read),
        filtered_list,
        filtered_page,
    }
}

#[async_trait]
impl<T, F, Id> ReadOneApi<T, Id> for ReadFilteredEndpoint<T, F, Id>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Display + Send + 'static,
{
    async fn read_one(&self, id: Id) -> Result<T, ApiError> {
        self.read.read_one(id).await
    }
}

#[async_trait]
impl<T, F, Id> ReadListApi<T> for ReadFilteredEndpoint<T, F, Id>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
{
    async fn read_list(&self) -> Result<Vec<T>, ApiError> {
        self.read.read_list().await
    }
}

#[async_trait]
impl<T, F, Id> ReadPageApi<T> for ReadFilteredEndpoint<T, F, Id>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
{
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError> {
        self.read.read_page(pagination).await
    }
}

#[async_trait]
impl<T, F, Id> ReadFilteredListApi<T, F> for ReadFilteredEndpoint<T, F, Id>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
{
    async fn read_filtered_list(&self, filter: F) -> Result<Vec<T>, ApiError> {
        self.filtered_list.read_filtered_list(filter).await
    }
}

#[async_trait]
impl<T, F, Id> ReadFilteredPageApi<T, F> for ReadFilteredEndpoint<T, F, Id>
where
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
{
    async fn read_filtered_page(
        &self,
        filter: F,
        pagination: Pagination,
    ) -> Result<Page<T>, ApiError> {
        self.filtered_page.read_filtered_page(filter, pagination).await
    }
}
