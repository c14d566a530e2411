//! Paginated collections returned by list operations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parameters for list operations.
///
/// All fields are optional; the remote applies its own default page size
/// when `count` is absent.
///
/// # Example
///
/// ```rust
/// use payrail_api::resources::ListParams;
///
/// let params = ListParams {
///     count: Some(25),
///     offset: Some(50),
///     ..ListParams::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// Maximum number of elements to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Number of elements to skip from the start of the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Return only elements created after the element with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

impl ListParams {
    /// Converts the parameters into URL query parameters.
    ///
    /// Unset fields produce no query parameter at all.
    #[must_use]
    pub fn to_query(&self) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if let Some(count) = self.count {
            query.insert("count".to_string(), count.to_string());
        }
        if let Some(offset) = self.offset {
            query.insert("offset".to_string(), offset.to_string());
        }
        if let Some(starting_after) = &self.starting_after {
            query.insert("starting_after".to_string(), starting_after.clone());
        }
        query
    }
}

/// A page of resources returned by a list operation.
///
/// Lists are homogeneous: every element of `data` is the same resource
/// type. The `count` field, when present, is the total number of elements
/// in the collection, not the page size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct List<T> {
    /// Always `"list"`.
    pub object: String,
    /// The elements on this page.
    pub data: Vec<T>,
    /// Total number of elements in the collection, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// URL of the list endpoint, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> List<T> {
    /// Returns the first element on this page, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the elements on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the total number of elements in the collection, when the
    /// remote reported it.
    #[must_use]
    pub const fn total_count(&self) -> Option<u64> {
        self.count
    }

    /// Computes the parameters for the next page, or `None` when this page
    /// exhausted the collection.
    ///
    /// `current` must be the parameters that produced this page. Pagination
    /// terminates when a page comes back short of the requested count, or
    /// when the advanced offset reaches the reported total.
    #[must_use]
    pub fn next_page_params(&self, current: &ListParams) -> Option<ListParams> {
        if self.data.is_empty() {
            return None;
        }

        let page_len = self.data.len() as u64;
        if let Some(requested) = current.count {
            if page_len < requested {
                return None;
            }
        }

        let next_offset = current.offset.unwrap_or(0) + page_len;
        if let Some(total) = self.count {
            if next_offset >= total {
                return None;
            }
        }

        Some(ListParams {
            count: current.count,
            offset: Some(next_offset),
            starting_after: None,
        })
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
