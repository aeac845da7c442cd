// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::rooms::models::ChatRoom;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomManagementService: Send + Sync {
    async fn load_rooms(&self) -> Result<Vec<ChatRoom>>;

    /// Returns the room shared with `user_id`, creating it if needed. Fails if the users are
    /// not connected.
    async fn get_or_create_room(&self, user_id: &UserId) -> Result<ChatRoom>;
}
