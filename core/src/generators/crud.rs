use std::fmt::Display;

use async_trait::async_trait;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use super::{
    generate_create_api, generate_delete_api, generate_read_api, generate_read_filtered_api,
    generate_update_api, ApiBase, CreateEndpoint, CreateOptions, DeleteEndpoint, DeleteOptions,
    ReadEndpoint, ReadFilteredEndpoint, ReadFilteredOptions, ReadOptions, UpdateEndpoint,
    UpdateOptions,
};
use crate::api::{
    CreateApi, DeleteApi, ReadFilteredListApi, ReadFilteredPageApi, ReadListApi, ReadOneApi,
    ReadPageApi, UpdateApi,
};
use crate::error::ApiError;
use crate::types::{Page, Pagination};

/// Options for `generate_crud_api`.
///
/// `C` is the create payload, `T` the read model, `U` the update payload
/// (defaults to `C`). `Created` and `Updated` default to `IgnoredAny`, which
/// accepts and drops whatever the server answers.
pub struct CrudOptions<C, T, Id, U = C, Created = IgnoredAny, Updated = IgnoredAny> {
    pub create: CreateOptions<C, Created>,
    pub read: ReadOptions<T, Id>,
    pub update: UpdateOptions<U, Id, Updated>,
    pub delete: DeleteOptions<Id>,
}

impl<C, T, Id, U, Created, Updated> CrudOptions<C, T, Id, U, Created, Updated> {
    /// Default create, update and delete sections around `read`.
    pub fn new(read: ReadOptions<T, Id>) -> Self {
        Self {
            create: CreateOptions::new(),
            read,
            update: UpdateOptions::new(),
            delete: DeleteOptions::new(),
        }
    }

    pub fn create(mut self, create: CreateOptions<C, Created>) -> Self {
        self.create = create;
        self
    }

    pub fn update(mut self, update: UpdateOptions<U, Id, Updated>) -> Self {
        self.update = update;
        self
    }

    pub fn delete(mut self, delete: DeleteOptions<Id>) -> Self {
        self.delete = delete;
        self
    }
}

/// Endpoint returned by `generate_crud_api`.
pub struct CrudEndpoint<C, T, Id, U = C, Created = IgnoredAny, Updated = IgnoredAny> {
    create: CreateEndpoint<C, Created>,
    read: ReadEndpoint<T, Id>,
    update: UpdateEndpoint<U, Id, Updated>,
    delete: DeleteEndpoint<Id>,
}

impl<C, T, Id, U, Created, Updated> Clone for CrudEndpoint<C, T, Id, U, Created, Updated> {
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            read: self.read.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

pub fn generate_crud_api<C, T, Id, U, Created, Updated>(
    base: ApiBase,
    options: CrudOptions<C, T, Id, U, Created, Updated>,
) -> CrudEndpoint<C, T, Id, U, Created, Updated> {
    CrudEndpoint {
        create: generate_create_api(base.clone(), options.create),
        read: generate_read_api(base.clone(), options.read),
        update: generate_update_api(base.clone(), options.update),
        delete: generate_delete_api(base, options.delete),
    }
}

/// Options for `generate_crud_filtered_api`.
pub struct CrudFilteredOptions<C, T, F, Id, U = C, Created = IgnoredAny, Updated = IgnoredAny> {
    pub create: CreateOptions<C, Created>,
    pub read: ReadFilteredOptions<T, F, Id>,
    pub update: UpdateOptions<U, Id, Updated>,
    pub delete: DeleteOptions<Id>,
}

impl<C, T, F, Id, U, Created, Updated> CrudFilteredOptions<C, T, F, Id, U, Created, Updated> {
    /// Default create, update and delete sections around `read`.
    pub fn new(read: ReadFilteredOptions<T, F, Id>) -> Self {
        Self {
            create: CreateOptions::new(),
            read,
            update: UpdateOptions::new(),
            delete: DeleteOptions::new(),
        }
    }

    pub fn create(mut self, create: CreateOptions<C, Created>) -> Self {
        self.create = create;
        self
    }

    pub fn update(mut self, update: UpdateOptions<U, Id, Updated>) -> Self {
        self.update = update;
        self
    }

    pub fn delete(mut self, delete: DeleteOptions<Id>) -> Self {
        self.delete = delete;
        self
    }
}

/// Endpoint returned by `generate_crud_filtered_api`.
pub struct CrudFilteredEndpoint<C, T, F, Id, U = C, Created = IgnoredAny, Updated = IgnoredAny> {
    create: CreateEndpoint<C, Created>,
    read: ReadFilteredEndpoint<T, F, Id>,
    update: UpdateEndpoint<U, Id, Updated>,
    delete: DeleteEndpoint<Id>,
}

impl<C, T, F, Id, U, Created, Updated> Clone
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
{
    fn clone(&self) -> Self {
        Self {
            create: self.create.clone(),
            read: self.read.clone(),
            update: self.update.clone(),
            delete: self.delete.clone(),
        }
    }
}

pub fn generate_crud_filtered_api<C, T, F, Id, U, Created, Updated>(
    base: ApiBase,
    options: CrudFilteredOptions<C, T, F, Id, U, Created, Updated>,
) -> CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated> {
    CrudFilteredEndpoint {
        create: generate_create_api(base.clone(), options.create),
        read: generate_read_filtered_api(base.clone(), options.read),
        update: generate_update_api(base.clone(), options.update),
        delete: generate_delete_api(base, options.delete),
    }
}

// Both composites forward every operation to the endpoint that owns it.

#[async_trait]
impl<C, T, Id, U, Created, Updated> CreateApi<C, Created>
    for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Serialize + Send + 'static,
    T: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: DeserializeOwned + Send + 'static,
    Updated: Send + 'static,
{
    async fn create(&self, request: C) -> Result<Created, ApiError> {
        self.create.create(request).await
    }
}

#[async_trait]
impl<C, T, Id, U, Created, Updated> ReadOneApi<T, Id> for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    Id: Display + Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_one(&self, id: Id) -> Result<T, ApiError> {
        self.read.read_one(id).await
    }
}

#[async_trait]
impl<C, T, Id, U, Created, Updated> ReadListApi<T> for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_list(&self) -> Result<Vec<T>, ApiError> {
        self.read.read_list().await
    }
}

#[async_trait]
impl<C, T, Id, U, Created, Updated> ReadPageApi<T> for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError> {
        self.read.read_page(pagination).await
    }
}

#[async_trait]
impl<C, T, Id, U, Created, Updated> UpdateApi<U, Id, Updated>
    for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: Send + 'static,
    Id: Display + Send + 'static,
    U: Serialize + Send + 'static,
    Created: Send + 'static,
    Updated: DeserializeOwned + Send + 'static,
{
    async fn update(&self, id: Id, request: U) -> Result<Updated, ApiError> {
        self.update.update(id, request).await
    }
}

#[async_trait]
impl<C, T, Id, U, Created, Updated> DeleteApi<Id> for CrudEndpoint<C, T, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: Send + 'static,
    Id: Display + Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.delete.delete(id).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> CreateApi<C, Created>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Serialize + Send + 'static,
    T: Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: DeserializeOwned + Send + 'static,
    Updated: Send + 'static,
{
    async fn create(&self, request: C) -> Result<Created, ApiError> {
        self.create.create(request).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> ReadOneApi<T, Id>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Display + Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_one(&self, id: Id) -> Result<T, ApiError> {
        self.read.read_one(id).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> ReadListApi<T>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_list(&self) -> Result<Vec<T>, ApiError> {
        self.read.read_list().await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> ReadPageApi<T>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError> {
        self.read.read_page(pagination).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> ReadFilteredListApi<T, F>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_filtered_list(&self, filter: F) -> Result<Vec<T>, ApiError> {
        self.read.read_filtered_list(filter).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> ReadFilteredPageApi<T, F>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: DeserializeOwned + Send + 'static,
    F: Send + 'static,
    Id: Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn read_filtered_page(
        &self,
        filter: F,
        pagination: Pagination,
    ) -> Result<Page<T>, ApiError> {
        self.read.read_filtered_page(filter, pagination).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> UpdateApi<U, Id, Updated>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: Send + 'static,
    F: Send + 'static,
    Id: Display + Send + 'static,
    U: Serialize + Send + 'static,
    Created: Send + 'static,
    Updated: DeserializeOwned + Send + 'static,
{
    async fn update(&self, id: Id, request: U) -> Result<Updated, ApiError> {
        self.update.update(id, request).await
    }
}

#[async_trait]
impl<C, T, F, Id, U, Created, Updated> DeleteApi<Id>
    for CrudFilteredEndpoint<C, T, F, Id, U, Created, Updated>
where
    C: Send + 'static,
    T: Send + 'static,
    F: Send + 'static,
    Id: Display + Send + 'static,
    U: Send + 'static,
    Created: Send + 'static,
    Updated: Send + 'static,
{
    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.delete.delete(id).await
    }
}
