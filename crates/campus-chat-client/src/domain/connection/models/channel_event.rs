// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::connection::models::ConnectionError;
use crate::domain::messaging::models::{Message, MessageId};

/// An event the backend pushed over a room's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    MessageReceived(Message),
    UserTyping { user: String, is_typing: bool },
    /// The backend reported a problem with a frame we sent.
    ServerError { message: String },
}

/// An event we push over a room's channel.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// Tells the other participant about a message the backend confirmed.
    NewMessage(Message),
    TypingStarted,
    TypingStopped,
    MarkRead,
    MessageRead(MessageId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Received(InboundEvent),
    Disconnected { error: Option<ConnectionError> },
}
