//! Typed REST resource endpoints generated from declarative options.
//!
//! # Overview
//! Each `generate_*` function turns an `ApiBase` (an injected `HttpClient`
//! plus the resource's base path) and an options value into an endpoint that
//! performs one request/response cycle per call: create, read-one,
//! read-list, read-page, read-filtered-list, read-filtered-page, update,
//! delete. Composite generators (`read`, `read_filtered`, `crud`,
//! `crud_filtered`) bundle several of them over one configuration.
//!
//! # Design
//! - The transport is fully delegated: endpoints build a plain `HttpRequest`
//!   and hand it to `dyn HttpClient`. `ReqwestClient` is the stock client.
//! - Sub-paths for identifier operations are an explicit `SubPath` enum
//!   (`Default`, `Literal`, `Computed`, `Disabled`).
//! - Transforms may be sync or async; both are awaited the same way.
//! - Errors from the client and from hooks reach the caller unchanged.
//! - Endpoints are immutable and `Clone`; share them freely across tasks.
//!
//! ```ignore
//! use crudify_core::*;
//!
//! let base = ApiBase::new(ReqwestClient::with_default_timeout("https://api.example.com")?, "/users");
//! let users = generate_crud_api::<NewUser, User, u64, NewUser, IgnoredAny, IgnoredAny>(
//!     base,
//!     CrudOptions::new(ReadOptions::new(|p: &Pagination| {
//!         Params::new().with("page", p.page).with("size", p.rows_per_page)
//!     })),
//! );
//!
//! let user = users.read_one(42).await?;
//! users.delete(42).await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod generators;
pub mod hooks;
pub mod http;
pub mod path;
pub mod types;

pub use api::{
    CreateApi, CrudApi, CrudFilteredApi, DeleteApi, ReadApi, ReadFilteredApi, ReadFilteredListApi,
    ReadFilteredPageApi, ReadListApi, ReadOneApi, ReadPageApi, UpdateApi,
};
#[cfg(feature = "reqwest")]
pub use client::ReqwestClient;
pub use client::HttpClient;
pub use error::{ApiError, BoxError};
pub use generators::*;
pub use hooks::{RequestTransform, ResponseTransform, Transform};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Params};
pub use path::{build_path, SubPath};
pub use serde::de::IgnoredAny;
pub use types::{Page, Pagination};
