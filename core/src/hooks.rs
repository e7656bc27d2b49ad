//! Caller-supplied hooks: body transforms and parameter builders.
//!
//! # Design
//! A `Transform` wraps either a plain closure or an async one behind the same
//! boxed-future signature, so generators always `.await` it and never need to
//! know which kind they were given. Parameter builders are plain closures;
//! they run synchronously before the request is sent.
//!
//! Every hook is stored behind an `Arc`, which makes endpoints cheap to clone
//! and shareable across tasks.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::error::ApiError;
use crate::http::Params;
use crate::types::Pagination;

/// Owned, `Send` future returned by hooks.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Request-body transform: typed input to outgoing JSON.
pub type RequestTransform<Req> = Transform<Req, Value>;

/// Response-body transform: incoming JSON to typed output.
pub type ResponseTransform<T> = Transform<Value, T>;

/// Parameter builder over an identifier.
pub type IdParamsFn<Id> = Arc<dyn Fn(&Id) -> Params + Send + Sync>;

/// Parameter builder over a pagination request.
pub type PageParamsFn = Arc<dyn Fn(&Pagination) -> Params + Send + Sync>;

/// Parameter builder over a filter.
pub type FilterParamsFn<F> = Arc<dyn Fn(&F) -> Params + Send + Sync>;

/// Parameter builder over a filter and a pagination request.
pub type FilteredPageParamsFn<F> = Arc<dyn Fn(&F, &Pagination) -> Params + Send + Sync>;

/// A sync or async function from `In` to `Result<Out, ApiError>`.
pub struct Transform<In, Out> {
    f: Arc<dyn Fn(In) -> BoxFuture<Result<Out, ApiError>> + Send + Sync>,
}

impl<In, Out> Transform<In, Out>
where
    In: Send + 'static,
    Out: Send + 'static,
{
    /// Wrap a synchronous closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(In) -> Result<Out, ApiError> + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(move |input: In| -> BoxFuture<Result<Out, ApiError>> {
                let result = f(input);
                Box::pin(async move { result })
            }),
        }
    }

    /// Wrap a closure returning a future.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(In) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Out, ApiError>> + Send + 'static,
    {
        Self {
            f: Arc::new(move |input: In| -> BoxFuture<Result<Out, ApiError>> {
                Box::pin(f(input))
            }),
        }
    }

    pub async fn apply(&self, input: In) -> Result<Out, ApiError> {
        (self.f)(input).await
    }
}

impl<In, Out> Clone for Transform<In, Out> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<In, Out> fmt::Debug for Transform<In, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}
