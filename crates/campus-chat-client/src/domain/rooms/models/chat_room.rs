// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{Message, MessageId};
use crate::domain::shared::models::{RoomId, UserBasicInfo, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRoom {
    pub id: RoomId,
    /// The other participant of the conversation.
    pub participant: UserBasicInfo,
    pub last_message: Option<LastMessage>,
    pub unread_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LastMessage {
    pub id: MessageId,
    pub sender_id: UserId,
    pub preview: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatRoom {
    /// The time of the latest activity, used to order the room list.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_message
            .as_ref()
            .map(|message| message.timestamp.max(self.updated_at))
            .unwrap_or(self.updated_at)
    }
}

impl From<&Message> for LastMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            sender_id: message.sender.id,
            preview: message.preview(),
            timestamp: message.timestamp,
        }
    }
}
