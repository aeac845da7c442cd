// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::general::models::RequestError;
use crate::domain::messaging::models::{Attachment, DeliveryState, Message, MessageType};
use crate::domain::shared::models::RoomId;
use crate::infra::api::type_conversions::UserDto;
use crate::infra::api::ServerConfig;

/// A message as serialized by the REST endpoints and inside `chat_message` frames. Frames
/// omit the room and the read marker.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDto {
    pub id: String,
    #[serde(default)]
    pub chat_room: Option<String>,
    pub sender: UserDto,
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl MessageDto {
    /// `room_id` is used if the payload does not name its room.
    pub fn into_message(
        self,
        room_id: Option<&RoomId>,
        config: &ServerConfig,
    ) -> Result<Message, RequestError> {
        let room_id = self
            .chat_room
            .map(RoomId::from)
            .or_else(|| room_id.cloned())
            .ok_or_else(|| RequestError::Decoding {
                msg: format!("Message {} does not belong to a room", self.id),
            })?;

        let attachment = self
            .file
            .as_deref()
            .and_then(|path| config.resolve_media_url(path))
            .map(Attachment::Remote);

        Ok(Message {
            id: self.id.into(),
            room_id,
            sender: self.sender.into_user_info(config, None),
            body: self.content.unwrap_or_default(),
            attachment,
            r#type: self.message_type,
            timestamp: self.created_at,
            is_read: self.is_read,
            delivery: DeliveryState::Confirmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use url::Url;

    use crate::domain::messaging::models::MessageId;
    use crate::domain::shared::models::UserId;

    use super::*;

    #[test]
    fn test_converts_rest_message() {
        let config = ServerConfig::new("http://localhost:8000").unwrap();
        let dto: MessageDto = serde_json::from_str(
            r#"{
                "id": "5b0d3f6a-5a0e-4f43-9d0e-8b3fd0c7e3a1",
                "chat_room": "1d6a8c4e-6b3c-4f7e-9b7b-6f4f0c3a2e10",
                "sender": {"id": 3, "username": "alice"},
                "message_type": "image",
                "content": "",
                "file": "/media/chat_files/cat.jpg",
                "is_read": true,
                "created_at": "2026-02-01T09:30:00Z"
            }"#,
        )
        .unwrap();

        let message = dto.into_message(None, &config).unwrap();

        assert_eq!(
            message.id,
            MessageId::from("5b0d3f6a-5a0e-4f43-9d0e-8b3fd0c7e3a1")
        );
        assert_eq!(
            message.room_id,
            RoomId::from("1d6a8c4e-6b3c-4f7e-9b7b-6f4f0c3a2e10")
        );
        assert_eq!(message.sender.id, UserId::new(3));
        assert_eq!(message.r#type, MessageType::Image);
        assert_eq!(
            message.attachment,
            Some(Attachment::Remote(
                Url::parse("http://localhost:8000/media/chat_files/cat.jpg").unwrap()
            ))
        );
        assert!(message.is_read);
        assert_eq!(
            message.timestamp,
            Utc.with_ymd_and_hms(2026, 2, 1, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_requires_room() {
        let config = ServerConfig::new("http://localhost:8000").unwrap();
        let dto: MessageDto = serde_json::from_str(
            r#"{
                "id": "m1",
                "sender": {"id": 3, "username": "alice"},
                "content": "Hi",
                "created_at": "2026-02-01T09:30:00Z"
            }"#,
        )
        .unwrap();

        assert!(dto.clone().into_message(None, &config).is_err());

        let message = dto
            .into_message(Some(&RoomId::from("room")), &config)
            .unwrap();
        assert_eq!(message.room_id, RoomId::from("room"));
        assert_eq!(message.r#type, MessageType::Text);
        assert!(!message.is_read);
    }
}
