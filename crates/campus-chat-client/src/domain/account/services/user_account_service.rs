// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::UserBasicInfo;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserAccountService: Send + Sync {
    /// Loads the user the current access token belongs to.
    async fn load_current_user(&self) -> Result<UserBasicInfo>;
}
