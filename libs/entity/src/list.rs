use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

/// Paged list envelope shared by every collection endpoint.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    /// Everything else the backend put next to `items`, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ListResponse<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more items exist past `offset + items.len()`.
    pub fn has_more(&self, offset: u64) -> bool {
        self.total
            .is_some_and(|total| offset + (self.items.len() as u64) < total)
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            extra: Map::new(),
        }
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
