// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_room::{ChatRoom, LastMessage};
pub use room_list::RoomList;

mod chat_room;
mod room_list;
