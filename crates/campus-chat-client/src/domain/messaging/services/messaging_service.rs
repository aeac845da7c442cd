// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{Message, MessageId, MessagePage, SendMessageRequest};
use crate::domain::shared::models::RoomId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagingService: Send + Sync {
    /// Loads one page of the room's history. Pages start at 1 and contain the newest
    /// messages first.
    async fn load_messages(&self, room_id: &RoomId, page: u32) -> Result<MessagePage>;

    /// Persists a message and returns the record created by the backend.
    async fn send_message(&self, room_id: &RoomId, request: SendMessageRequest)
        -> Result<Message>;

    async fn mark_messages_read(&self, room_id: &RoomId) -> Result<()>;

    async fn delete_message(&self, message_id: &MessageId) -> Result<()>;

    /// Searches all conversations, or only `room_id` if given.
    async fn search_messages(&self, query: &str, room_id: Option<&RoomId>)
        -> Result<Vec<Message>>;
}
