// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::connection::models::{InboundEvent, OutboundEvent};
use crate::domain::messaging::models::{Message, MessageType};
use crate::domain::shared::models::RoomId;
use crate::infra::api::type_conversions::MessageDto;
use crate::infra::api::ServerConfig;

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutboundFrame<'a> {
    NewMessage {
        message: FrameMessage<'a>,
        #[serde(rename = "roomId")]
        room_id: &'a str,
    },
    TypingStart {
        #[serde(rename = "roomId")]
        room_id: &'a str,
    },
    TypingStop {
        #[serde(rename = "roomId")]
        room_id: &'a str,
    },
    MarkRead,
    MessageRead {
        message_id: &'a str,
    },
    Heartbeat,
}

#[derive(Serialize)]
struct FrameMessage<'a> {
    id: &'a str,
    content: &'a str,
    sender: FrameSender<'a>,
    created_at: DateTime<Utc>,
    message_type: MessageType,
}

#[derive(Serialize)]
struct FrameSender<'a> {
    id: i64,
    username: &'a str,
}

impl<'a> From<&'a Message> for FrameMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            id: message.id.as_str(),
            content: &message.body,
            sender: FrameSender {
                id: message.sender.id.value(),
                username: &message.sender.username,
            },
            created_at: message.timestamp,
            message_type: message.r#type,
        }
    }
}

pub(crate) fn encode(event: &OutboundEvent, room_id: &RoomId) -> Result<String> {
    let room_id = room_id.as_str();

    let frame = match event {
        OutboundEvent::NewMessage(message) => OutboundFrame::NewMessage {
            message: message.into(),
            room_id,
        },
        OutboundEvent::TypingStarted => OutboundFrame::TypingStart { room_id },
        OutboundEvent::TypingStopped => OutboundFrame::TypingStop { room_id },
        OutboundEvent::MarkRead => OutboundFrame::MarkRead,
        OutboundEvent::MessageRead(message_id) => OutboundFrame::MessageRead {
            message_id: message_id.as_str(),
        },
    };

    Ok(serde_json::to_string(&frame)?)
}

pub(crate) fn heartbeat() -> String {
    r#"{"type":"heartbeat"}"#.to_string()
}

#[derive(Deserialize)]
struct ChatMessageFrame {
    message: MessageDto,
}

#[derive(Deserialize)]
struct TypingIndicatorFrame {
    user: String,
    is_typing: bool,
}

/// Parses a text frame received on the channel of `room_id`. Returns `None` for frame types
/// we don't handle.
pub(crate) fn decode(
    text: &str,
    room_id: &RoomId,
    config: &ServerConfig,
) -> Result<Option<InboundEvent>> {
    let value: Value = serde_json::from_str(text)?;

    if let Some(error) = value.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Ok(Some(InboundEvent::ServerError { message }));
    }

    let Some(frame_type) = value.get("type").and_then(Value::as_str).map(str::to_owned) else {
        return Ok(None);
    };

    let event = match frame_type.as_str() {
        "chat_message" => {
            let frame: ChatMessageFrame = serde_json::from_value(value)?;
            InboundEvent::MessageReceived(frame.message.into_message(Some(room_id), config)?)
        }
        "typing_indicator" => {
            let frame: TypingIndicatorFrame = serde_json::from_value(value)?;
            InboundEvent::UserTyping {
                user: frame.user,
                is_typing: frame.is_typing,
            }
        }
        _ => return Ok(None),
    };

    Ok(Some(event))
}
