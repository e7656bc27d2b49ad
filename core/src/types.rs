//! Paging DTOs shared by the page-returning operations.
//!
//! Field names follow the camelCase wire shape (`rowsPerPage`,
//! `totalElements`, ...) so an untransformed page response deserializes
//! directly.

use serde::{Deserialize, Serialize};

/// Page request passed to read-page and read-filtered-page.
///
/// `sort_by` and `descending` are parallel lists: the flag at index `i`
/// applies to the field at index `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub rows_per_page: u32,
    #[serde(default)]
    pub sort_by: Vec<String>,
    #[serde(default)]
    pub descending: Vec<bool>,
}

impl Pagination {
    pub fn new(page: u32, rows_per_page: u32) -> Self {
        Self {
            page,
            rows_per_page,
            sort_by: Vec::new(),
            descending: Vec::new(),
        }
    }

    /// Append a sort key, keeping both lists aligned.
    pub fn sorted_by(mut self, field: impl Into<String>, descending: bool) -> Self {
        self.sort_by.push(field.into());
        self.descending.push(descending);
        self
    }

    /// Sort keys paired with their direction. Unpaired trailing entries of
    /// either list are skipped.
    pub fn sort_keys(&self) -> impl Iterator<Item = (&str, bool)> {
        self.sort_by
            .iter()
            .map(String::as_str)
            .zip(self.descending.iter().copied())
    }
}

/// One page of results plus totals. No relation between `content.len()` and
/// the totals is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Map the content items, keeping the totals.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pagination_uses_camel_case_on_the_wire() {
        let pagination = Pagination::new(1, 20).sorted_by("name", false);
        assert_eq!(
            serde_json::to_value(&pagination).unwrap(),
            json!({"page": 1, "rowsPerPage": 20, "sortBy": ["name"], "descending": [false]})
        );
    }

    #[test]
    fn pagination_sort_lists_default_to_empty() {
        let pagination: Pagination =
            serde_json::from_value(json!({"page": 2, "rowsPerPage": 5})).unwrap();
        assert_eq!(pagination, Pagination::new(2, 5));
    }

    #[test]
    fn sort_keys_pair_by_position() {
        let pagination = Pagination {
            page: 1,
            rows_per_page: 10,
            sort_by: vec!["name".into(), "age".into(), "city".into()],
            descending: vec![true, false],
        };
        let keys: Vec<_> = pagination.sort_keys().collect();
        assert_eq!(keys, vec![("name", true), ("age", false)]);
    }

    #[test]
    fn page_deserializes_from_wire_shape() {
        let page: Page<String> = serde_json::from_value(json!({
            "content": ["a", "b"],
            "totalElements": 12,
            "totalPages": 6,
        }))
        .unwrap();
        assert_eq!(page.content, vec!["a", "b"]);
        assert_eq!(page.total_elements, 12);
        assert_eq!(page.total_pages, 6);
    }

    #[test]
    fn page_map_keeps_totals() {
        let page = Page {
            content: vec![1, 2],
            total_elements: 2,
            total_pages: 1,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.content, vec![10, 20]);
        assert_eq!(mapped.total_elements, 2);
    }
}
