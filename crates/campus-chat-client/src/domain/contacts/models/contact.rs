// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::shared::models::UserBasicInfo;

/// A user the signed-in user is connected with and can start a conversation with.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub connection_id: String,
    pub user: UserBasicInfo,
    pub connected_since: DateTime<Utc>,
}
