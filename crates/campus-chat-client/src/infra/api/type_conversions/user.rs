// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

use crate::domain::shared::models::{UserBasicInfo, UserId};
use crate::infra::api::ServerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileDto {
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UserDto {
    pub fn into_user_info(
        self,
        config: &ServerConfig,
        profile: Option<&ProfileDto>,
    ) -> UserBasicInfo {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let avatar = self
            .profile_picture
            .as_deref()
            .or_else(|| profile.and_then(|p| p.profile_picture.as_deref()))
            .and_then(|path| config.resolve_media_url(path));

        UserBasicInfo {
            id: UserId::new(self.id),
            name: if name.is_empty() {
                self.username.clone()
            } else {
                name
            },
            username: self.username,
            avatar,
        }
    }
}
