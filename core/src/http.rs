//! HTTP transport types exchanged with the injected client.
//!
//! # Design
//! Generated endpoints describe each call as a plain `HttpRequest` and hand it
//! to an `HttpClient`; the client returns a plain `HttpResponse`. Nothing in
//! this module touches the network, so endpoints can be tested against a
//! recording client without a server.
//!
//! Bodies are `serde_json::Value`: the generators stay agnostic of the
//! concrete encoding, which is left to the client.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query-string parameters produced by a parameter builder.
///
/// A key may carry several values (`sort=name,asc&sort=age,desc`); they are
/// sent as repeated keys in the order they were appended. Keys are kept
/// sorted so that requests compare equal regardless of the order a builder
/// inserted different keys in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, Vec<String>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Values are rendered with `Display`.
    pub fn with(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style append, keeping earlier values for `key`.
    pub fn with_appended(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.append(key, value);
        self
    }

    /// Set `key` to a single value, replacing any previous ones.
    pub fn insert(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.insert(key.into(), vec![value.to_string()]);
    }

    /// Add one more value for `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl fmt::Display) {
        self.0.entry(key.into()).or_default().push(value.to_string());
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of key/value pairs, counting repeats.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key/value pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

/// Collected pairs are appended, so repeated keys survive.
impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// Serialized as a sequence of pairs, the shape `serde_urlencoded` turns into
/// repeated keys.
impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// An HTTP request described as plain data.
///
/// `path` is relative to whatever base URL the client is bound to.
/// `query` is `None` when the operation has no parameter builder, which is
/// distinct from a builder returning an empty `Params`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<Params>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: Option<Params>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body and the matching content-type header.
    pub fn with_json_body(mut self, body: Value) -> Self {
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }
}

/// An HTTP response described as plain data.
///
/// `body` is `Value::Null` when the server sent nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl HttpResponse {
    /// A 200 response carrying `body`.
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_render_values_with_display() {
        let params = Params::new().with("page", 1).with("size", 20u32);
        assert_eq!(params.get("page"), Some("1"));
        assert_eq!(params.get("size"), Some("20"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn params_ignore_insertion_order() {
        let a = Params::new().with("b", 2).with("a", 1);
        let b: Params = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn params_serialize_as_pairs() {
        let params = Params::new().with("q", "milk");
        assert_eq!(serde_json::to_value(&params).unwrap(), json!([["q", "milk"]]));
    }

    #[test]
    fn append_keeps_repeated_keys_in_order() {
        let params = Params::new()
            .with("size", 20)
            .with_appended("sort", "name,asc")
            .with_appended("sort", "age,desc");

        assert_eq!(params.get("sort"), Some("name,asc"));
        assert_eq!(params.get_all("sort"), ["name,asc", "age,desc"]);
        assert_eq!(params.len(), 3);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("size", "20"), ("sort", "name,asc"), ("sort", "age,desc")]
        );
    }

    #[test]
    fn insert_replaces_every_value() {
        let mut params = Params::new().with_appended("tag", "a").with_appended("tag", "b");
        params.insert("tag", "c");

        assert_eq!(params.get_all("tag"), ["c"]);
        assert!(params.get_all("missing").is_empty());
    }

    #[test]
    fn collected_pairs_keep_duplicates() {
        let params: Params = [("sort", "name"), ("sort", "age")].into_iter().collect();
        assert_eq!(params.get_all("sort"), ["name", "age"]);
    }

    #[test]
    fn success_is_any_2xx() {
        let mut response = HttpResponse::ok(Value::Null);
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }

    #[test]
    fn json_body_sets_content_type() {
        let req = HttpRequest::new(HttpMethod::Post, "/todos").with_json_body(json!({"a": 1}));
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body, Some(json!({"a": 1})));
    }

    #[test]
    fn new_request_has_no_query_or_body() {
        let req = HttpRequest::new(HttpMethod::Delete, "/todos/1");
        assert!(req.query.is_none());
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn method_display_is_uppercase() {
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
    }
}
