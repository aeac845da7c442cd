// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::{
    connection::models::ConnectionError,
    contacts::models::Contact,
    general::models::{RequestError, RequestErrorExt},
    messaging::models::{
        Attachment, DeliveryState, LocalAttachment, Message, MessageId, MessageType,
        MessagingError, SendMessageRequest,
    },
    rooms::models::{ChatRoom, LastMessage},
    shared::models::{ConnectionState, RoomId, UserBasicInfo, UserId},
};
