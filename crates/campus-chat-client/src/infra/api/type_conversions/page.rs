// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDto<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> PageDto<T> {
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }
}
