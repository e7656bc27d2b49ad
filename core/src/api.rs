//! Capability traits implemented by generated endpoints.
//!
//! One trait per operation; composite endpoints implement several of them by
//! delegating to the per-operation endpoints they hold. `ReadApi`,
//! `ReadFilteredApi`, `CrudApi` and `CrudFilteredApi` are blanket-implemented
//! markers for "implements all of these", handy as bounds.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{Page, Pagination};

#[async_trait]
pub trait CreateApi<Req, Res>: Send + Sync {
    /// POST `request` to the create path.
    async fn create(&self, request: Req) -> Result<Res, ApiError>;
}

#[async_trait]
pub trait ReadOneApi<T, Id>: Send + Sync {
    /// GET the resource addressed by `id`.
    async fn read_one(&self, id: Id) -> Result<T, ApiError>;
}

#[async_trait]
pub trait ReadListApi<T>: Send + Sync {
    /// GET the whole collection.
    async fn read_list(&self) -> Result<Vec<T>, ApiError>;
}

#[async_trait]
pub trait ReadPageApi<T>: Send + Sync {
    /// GET one page of the collection.
    async fn read_page(&self, pagination: Pagination) -> Result<Page<T>, ApiError>;
}

#[async_trait]
pub trait ReadFilteredListApi<T, F>: Send + Sync {
    /// GET every item matching `filter`.
    async fn read_filtered_list(&self, filter: F) -> Result<Vec<T>, ApiError>;
}

#[async_trait]
pub trait ReadFilteredPageApi<T, F>: Send + Sync {
    /// GET one page of the items matching `filter`.
    async fn read_filtered_page(&self, filter: F, pagination: Pagination)
        -> Result<Page<T>, ApiError>;
}

#[async_trait]
pub trait UpdateApi<Req, Id, Res>: Send + Sync {
    /// PUT `request` to the resource addressed by `id`.
    async fn update(&self, id: Id, request: Req) -> Result<Res, ApiError>;
}

#[async_trait]
pub trait DeleteApi<Id>: Send + Sync {
    /// DELETE the resource addressed by `id`. Any response body is ignored.
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

pub trait ReadApi<T, Id>: ReadOneApi<T, Id> + ReadListApi<T> + ReadPageApi<T> {}

impl<A, T, Id> ReadApi<T, Id> for A where A: ReadOneApi<T, Id> + ReadListApi<T> + ReadPageApi<T> {}

pub trait ReadFilteredApi<T, F, Id>:
    ReadApi<T, Id> + ReadFilteredListApi<T, F> + ReadFilteredPageApi<T, F>
{
}

impl<A, T, F, Id> ReadFilteredApi<T, F, Id> for A where
    A: ReadApi<T, Id> + ReadFilteredListApi<T, F> + ReadFilteredPageApi<T, F>
{
}

pub trait CrudApi<C, T, Id, U, Created, Updated>:
    CreateApi<C, Created> + ReadApi<T, Id> + UpdateApi<U, Id, Updated> + DeleteApi<Id>
{
}

impl<A, C, T, Id, U, Created, Updated> CrudApi<C, T, Id, U, Created, Updated> for A where
    A: CreateApi<C, Created> + ReadApi<T, Id> + UpdateApi<U, Id, Updated> + DeleteApi<Id>
{
}

pub trait CrudFilteredApi<C, T, F, Id, U, Created, Updated>:
    CreateApi<C, Created> + ReadFilteredApi<T, F, Id> + UpdateApi<U, Id, Updated> + DeleteApi<Id>
{
}

impl<A, C, T, F, Id, U, Created, Updated> CrudFilteredApi<C, T, F, Id, U, Created, Updated> for A where
    A: CreateApi<C, Created>
        + ReadFilteredApi<T, F, Id>
        + UpdateApi<U, Id, Updated>
        + DeleteApi<Id>
{
}
