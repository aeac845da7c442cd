// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::rooms::models::ChatRoom;
use crate::domain::rooms::services::RoomManagementService;
use crate::domain::shared::models::UserId;
use crate::infra::api::type_conversions::ChatRoomDto;
use crate::infra::api::ApiClient;

#[async_trait]
impl RoomManagementService for ApiClient {
    async fn load_rooms(&self) -> Result<Vec<ChatRoom>> {
        let response: Vec<ChatRoomDto> = self.get("chat/rooms/", &[]).await?;
        Ok(response
            .into_iter()
            .map(|dto| dto.into_chat_room(self.config()))
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn get_or_create_room(&self, user_id: &UserId) -> Result<ChatRoom> {
        let response: ChatRoomDto = self.get(&format!("chat/room/{}/", user_id), &[]).await?;
        Ok(response.into_chat_room(self.config())?)
    }
}
