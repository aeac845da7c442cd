// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::general::models::RequestError;
use crate::domain::rooms::models::{ChatRoom, LastMessage};
use crate::domain::shared::models::RoomId;
use crate::infra::api::type_conversions::{MessageDto, ProfileDto, UserDto};
use crate::infra::api::ServerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRoomDto {
    pub id: String,
    pub other_user: UserDto,
    #[serde(default)]
    pub other_user_profile: Option<ProfileDto>,
    #[serde(default)]
    pub last_message: Option<MessageDto>,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChatRoomDto {
    pub fn into_chat_room(self, config: &ServerConfig) -> Result<ChatRoom, RequestError> {
        let room_id = RoomId::from(self.id);

        let last_message = self
            .last_message
            .map(|dto| dto.into_message(Some(&room_id), config))
            .transpose()?
            .map(|message| LastMessage::from(&message));

        let updated_at = self
            .updated_at
            .or(self.created_at)
            .or_else(|| last_message.as_ref().map(|m| m.timestamp))
            .unwrap_or_default();

        Ok(ChatRoom {
            id: room_id,
            participant: self
                .other_user
                .into_user_info(config, self.other_user_profile.as_ref()),
            last_message,
            unread_count: self.unread_count,
            updated_at,
        })
    }
}
