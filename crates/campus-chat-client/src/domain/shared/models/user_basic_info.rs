// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct UserBasicInfo {
    pub id: UserId,
    pub username: String,
    /// "First Last" if the user provided a name, the username otherwise.
    pub name: String,
    pub avatar: Option<Url>,
}
