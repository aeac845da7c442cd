// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use campus_utils::id_string;

use crate::domain::messaging::models::{Attachment, SendMessageRequest};
use crate::domain::shared::models::{RoomId, UserBasicInfo, UserId};

id_string!(MessageId);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    File,
    Voice,
    Video,
}

/// Where a message stands in its round trip to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryState {
    /// Inserted locally, the backend has not answered yet.
    Pending,
    Confirmed,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub room_id: RoomId,
    pub sender: UserBasicInfo,
    pub body: String,
    pub attachment: Option<Attachment>,
    pub r#type: MessageType,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub delivery: DeliveryState,
}

impl Message {
    /// Builds the local placeholder that is shown while `request` is being delivered.
    pub fn pending(
        id: MessageId,
        room_id: RoomId,
        sender: UserBasicInfo,
        request: &SendMessageRequest,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            room_id,
            sender,
            body: request.body.clone(),
            attachment: request.attachment.clone().map(Attachment::Local),
            r#type: request.r#type,
            timestamp,
            is_read: true,
            delivery: DeliveryState::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.delivery == DeliveryState::Pending
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.delivery, DeliveryState::Failed { .. })
    }

    pub fn is_unread_for(&self, viewer: &UserId) -> bool {
        !self.is_read && &self.sender.id != viewer
    }

    /// A one-line summary used in the room list.
    pub fn preview(&self) -> String {
        match self.r#type {
            MessageType::Text => self.body.clone(),
            _ if !self.body.trim().is_empty() => self.body.clone(),
            MessageType::Image => "Photo".to_string(),
            MessageType::File => "File".to_string(),
            MessageType::Voice => "Voice message".to_string(),
            MessageType::Video => "Video".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_message_type_strings() {
        assert_eq!(MessageType::Video.to_string(), "video");
        assert_eq!(MessageType::from_str("voice").unwrap(), MessageType::Voice);
        assert!(MessageType::from_str("sticker").is_err());
    }
}
