use serde::{Deserialize, Serialize};

/// Cursor pagination metadata returned by list endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Opaque cursor for the next page; absent on the last page.
    pub next_cursor: Option<u64>,
    pub per_page: Option<u32>,
}

/// The `{ data, meta }` envelope every success body uses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> ApiResponse<T> {
    /// Cursor to pass to `with_cursor` for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<u64> {
        self.meta.and_then(|meta| meta.next_cursor)
    }
}
