// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::account::services::UserAccountService;
use crate::domain::shared::models::UserBasicInfo;
use crate::infra::api::type_conversions::UserDto;
use crate::infra::api::ApiClient;

#[derive(Deserialize)]
struct CurrentUserResponse {
    user: UserDto,
}

#[async_trait]
impl UserAccountService for ApiClient {
    async fn load_current_user(&self) -> Result<UserBasicInfo> {
        let response: CurrentUserResponse = self.get("users/current/", &[]).await?;
        Ok(response.user.into_user_info(self.config(), None))
    }
}
