//! Generic Nylas v3 response envelope

use serde::{Deserialize, Serialize};

/// JSON wrapper the Nylas API puts around every endpoint payload.
///
/// `next_cursor` is only present on paginated list endpoints. Callers parse
/// responses into this shape themselves; nothing here is enforced at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NylasResponse<T> {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub data: Option<T>,
}

impl<T> NylasResponse<T> {
    /// Whether the API reported another page after this one.
    pub fn has_next_page(&self) -> bool {
        self.next_cursor.as_deref().is_some_and(|cursor| !cursor.is_empty())
    }
}
