// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ConnectionState, RoomId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// A user signed in or out.
    SessionChanged,

    /// Rooms were loaded or added, or their preview or unread count changed.
    RoomListChanged,

    /// The list of connections was reloaded.
    ContactListChanged,

    RoomChanged {
        room_id: RoomId,
        r#type: ClientRoomEventType,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientRoomEventType {
    /// The room's channel moved to another state.
    ConnectionStateChanged { state: ConnectionState },

    /// One or many messages were either received, loaded or sent.
    MessagesAppended { message_ids: Vec<MessageId> },

    /// The backend accepted a message. The placeholder was replaced by `message_id`.
    MessageConfirmed {
        placeholder_id: MessageId,
        message_id: MessageId,
    },

    /// Messages changed their content or delivery state.
    MessagesUpdated { message_ids: Vec<MessageId> },

    MessagesDeleted { message_ids: Vec<MessageId> },

    /// The backend rejected a message. It stays in the timeline and can be retried.
    MessageSendFailed { message_id: MessageId, error: String },

    /// Loading a page of history failed. The timeline was left unchanged.
    HistoryLoadFailed { error: String },

    MessagesRead { message_ids: Vec<MessageId> },

    /// A user in the room started or stopped typing.
    ComposingUsersChanged,

    /// The backend reported a problem over the room's channel.
    ServerNotice { message: String },
}
