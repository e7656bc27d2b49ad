//! Request path composition.
//!
//! `build_path` joins a resource base path with an optional sub-path;
//! `SubPath` decides what that sub-path is for identifier-addressed
//! operations (read-one, update, delete).

use std::fmt;
use std::sync::Arc;

/// Join `base` and `additional` with exactly one `/` between them.
///
/// Returns `base` unchanged when `additional` is absent or empty. Otherwise a
/// single trailing `/` is dropped from `base` and a single leading `/` from
/// `additional`.
pub fn build_path(base: &str, additional: Option<&str>) -> String {
    match additional {
        None | Some("") => base.to_string(),
        Some(additional) => {
            let base = base.strip_suffix('/').unwrap_or(base);
            let additional = additional.strip_prefix('/').unwrap_or(additional);
            format!("{base}/{additional}")
        }
    }
}

/// Closure computing a sub-path from an identifier.
pub type PathFn<Id> = Arc<dyn Fn(&Id) -> String + Send + Sync>;

/// Sub-path configuration for operations addressed by an identifier.
pub enum SubPath<Id> {
    /// Use the identifier's `Display` output: `base/{id}`.
    Default,
    /// Use this literal, whatever the identifier.
    Literal(String),
    /// Compute the sub-path from the identifier.
    Computed(PathFn<Id>),
    /// Send the request to the bare base path.
    ///
    /// The identifier then appears nowhere in the path; if the server needs
    /// it, the operation's parameter builder must put it in the query.
    Disabled,
}

impl<Id> SubPath<Id> {
    pub fn literal(path: impl Into<String>) -> Self {
        SubPath::Literal(path.into())
    }

    pub fn computed(f: impl Fn(&Id) -> String + Send + Sync + 'static) -> Self {
        SubPath::Computed(Arc::new(f))
    }
}

impl<Id: fmt::Display> SubPath<Id> {
    /// The sub-path to hand to `build_path` for `id`.
    pub fn resolve(&self, id: &Id) -> Option<String> {
        match self {
            SubPath::Default => Some(id.to_string()),
            SubPath::Literal(path) => Some(path.clone()),
            SubPath::Computed(f) => Some(f(id)),
            SubPath::Disabled => None,
        }
    }

    /// Full request path for `id` under `base`.
    pub fn target(&self, base: &str, id: &Id) -> String {
        build_path(base, self.resolve(id).as_deref())
    }
}

impl<Id> Default for SubPath<Id> {
    fn default() -> Self {
        SubPath::Default
    }
}

impl<Id> Clone for SubPath<Id> {
    fn clone(&self) -> Self {
        match self {
            SubPath::Default => SubPath::Default,
            SubPath::Literal(path) => SubPath::Literal(path.clone()),
            SubPath::Computed(f) => SubPath::Computed(Arc::clone(f)),
            SubPath::Disabled => SubPath::Disabled,
        }
    }
}

impl<Id> fmt::Debug for SubPath<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubPath::Default => f.write_str("Default"),
            SubPath::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            SubPath::Computed(_) => f.write_str("Computed(..)"),
            SubPath::Disabled => f.write_str("Disabled"),
        }
    }
}
