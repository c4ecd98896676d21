use entity::prelude::*;

use crate::{response::Response, ClientError};

/// Paging window for list endpoints. Unset fields fall back to the
/// configured page size and offset zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub(crate) fn query(&self, page_size: u64) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.unwrap_or(page_size).to_string()),
            ("offset", self.offset.unwrap_or(0).to_string()),
        ]
    }
}

/// Rejects placeholder ids before they reach a request.
pub(crate) fn real(id: Id) -> Response<Id> {
    if id.is_synthetic() {
        return Err(ClientError::SyntheticId { id: id.get() });
    }
    Ok(id)
}
