// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::connection::models::InboundEvent;
use crate::domain::messaging::models::Message;
use crate::domain::shared::models::RoomId;

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Message(MessageEvent),
    Typing(TypingEvent),
    Notice(NoticeEvent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageEvent {
    pub room_id: RoomId,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypingEvent {
    pub room_id: RoomId,
    /// The username of the typing user.
    pub user: String,
    pub is_typing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeEvent {
    pub room_id: RoomId,
    pub message: String,
}

impl ServerEvent {
    pub fn room_id(&self) -> &RoomId {
        match self {
            ServerEvent::Message(event) => &event.room_id,
            ServerEvent::Typing(event) => &event.room_id,
            ServerEvent::Notice(event) => &event.room_id,
        }
    }

    pub fn new(room_id: RoomId, event: InboundEvent) -> Self {
        match event {
            InboundEvent::MessageReceived(message) => {
                ServerEvent::Message(MessageEvent { room_id, message })
            }
            InboundEvent::UserTyping { user, is_typing } => ServerEvent::Typing(TypingEvent {
                room_id,
                user,
                is_typing,
            }),
            InboundEvent::ServerError { message } => {
                ServerEvent::Notice(NoticeEvent { room_id, message })
            }
        }
    }
}
